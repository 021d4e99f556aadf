//! JSON file I/O for the quest journal.
//!
//! The journal is a single pretty-printed JSON array of quests. Every save
//! writes the complete set; nothing is appended.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{QuestError, Result};
use crate::model::Quest;

/// Load quests from a journal file, in stored order.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot be
/// read, or `Json` if its content is not a quest array.
pub fn load(path: &Path) -> Result<Vec<Quest>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            QuestError::FileNotFound(path.to_path_buf())
        } else {
            QuestError::Io(e)
        }
    })?;

    Ok(serde_json::from_str(&content)?)
}

/// Serialize quests the way they appear on disk.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn to_string(quests: &[Quest]) -> Result<String> {
    Ok(serde_json::to_string_pretty(quests)?)
}

/// Save quests to a journal file with atomic write.
///
/// Uses write-to-temp + rename in the target directory, so readers see either
/// the previous snapshot or the new one. The rename replaces the path itself:
/// a symlinked journal becomes a regular file, and the new file gets default
/// permissions rather than the old file's.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save(path: &Path, quests: &[Quest]) -> Result<()> {
    let json = to_string(quests)?;

    let tmp_path = temp_path(path);
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        // Leave no stray temp file behind when the rename is refused.
        let _ = fs::remove_file(&tmp_path);
        return Err(QuestError::Io(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
