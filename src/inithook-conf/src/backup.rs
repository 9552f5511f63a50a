//! Backup of a pre-existing destination file.

use crate::error::{ConfError, ConfResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to the destination path to form the backup path.
pub const BACKUP_SUFFIX: &str = "bak";

/// Backup path for `dest`: the same path with `.bak` appended
/// (`conf` becomes `conf.bak`, `mkinitcpio.conf` becomes
/// `mkinitcpio.conf.bak`).
pub fn backup_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy a pre-existing regular file at `dest` verbatim to `<dest>.bak`,
/// overwriting any prior backup.
///
/// Returns the backup path when a copy was made, `None` when nothing exists
/// at `dest`. Must run before anything writes to `dest`; the policy is
/// "exists at destination before we write", not "something changed".
pub fn backup_existing(dest: &Path) -> ConfResult<Option<PathBuf>> {
    if !dest.is_file() {
        return Ok(None);
    }

    let backup = backup_path(dest);
    tracing::info!(dest = %dest.display(), backup = %backup.display(), "backing up");

    fs::copy(dest, &backup).map_err(|source| ConfError::Backup {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/etc/mkinitcpio.conf")),
            PathBuf::from("/etc/mkinitcpio.conf.bak")
        );
    }

    #[test]
    fn test_backup_copies_contents() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("conf");
        fs::write(&dest, "original contents").unwrap();

        let backup = backup_existing(&dest).unwrap().unwrap();
        assert_eq!(backup, dir.path().join("conf.bak"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "original contents");
    }

    #[test]
    fn test_backup_overwrites_prior_backup() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("conf");
        fs::write(&dest, "new").unwrap();
        fs::write(dir.path().join("conf.bak"), "stale").unwrap();

        backup_existing(&dest).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("conf.bak")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_no_backup_when_dest_missing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("conf");

        assert!(backup_existing(&dest).unwrap().is_none());
        assert!(!dir.path().join("conf.bak").exists());
    }
}
