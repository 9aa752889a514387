//! Where the inspector keeps its settings file and logs.
//!
//! `config.toml` lives in the per-user config directory, `latest.log` and its
//! archived predecessors in the cache directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;

const SETTINGS_FILE: &str = "config.toml";
const LATEST_LOG: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "inspector", "inspector")
}

/// Default settings file, if a home directory can be determined.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamp and drop the oldest
/// archives. Must run before the new log file is created.
pub fn rotate_logs() {
    let Some(dirs) = project_dirs() else { return };
    let cache = dirs.cache_dir();
    archive_latest(cache);
    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

fn archive_latest(cache: &Path) {
    let latest = cache.join(LATEST_LOG);
    if !latest.exists() {
        return;
    }
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let archived = cache.join(format!("{stamp}.log"));
    if let Err(e) = fs::rename(&latest, &archived) {
        debug!("Could not archive {}: {e}", latest.display());
    }
}

/// Keep the `keep` newest archived logs in `cache`.
fn cleanup_old_logs(cache: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();
    if archived.len() <= keep {
        return;
    }

    // Oldest first
    archived.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    let excess = archived.len() - keep;
    for entry in &archived[..excess] {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_keeps_latest_and_newest() {
        let dir = std::env::temp_dir().join(format!("inspector-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["a.log", "b.log", "c.log", LATEST_LOG, "notes.txt"] {
            fs::write(dir.join(name), name).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        cleanup_old_logs(&dir, 1);

        let mut left: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, vec!["c.log", LATEST_LOG, "notes.txt"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_archive_renames_latest() {
        let dir = std::env::temp_dir().join(format!("inspector-archive-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        archive_latest(&dir);

        assert!(!dir.join(LATEST_LOG).exists());
        let archived: Vec<_> = fs::read_dir(&dir).unwrap().filter_map(Result::ok).collect();
        assert_eq!(archived.len(), 1);
        assert_eq!(fs::read_to_string(archived[0].path()).unwrap(), "previous run");

        fs::remove_dir_all(&dir).unwrap();
    }
}
