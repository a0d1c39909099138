use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tracing::{error, info, warn};

/// Files whose changes trigger a reload, and the directories watched to see them.
///
/// Directories are watched instead of the files themselves so that an editor
/// replacing a file by rename is still noticed.
#[derive(Debug, Default, PartialEq)]
pub struct WatchTargets {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

impl WatchTargets {
    pub fn new(paths: &[PathBuf]) -> Self {
        let mut targets = Self::default();
        for path in paths {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let dir = dir.canonicalize().unwrap_or(dir);
            if let Some(name) = path.file_name() {
                targets.files.insert(dir.join(name));
                targets.dirs.insert(dir);
            }
        }
        targets
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Whether the event touches one of the watched files
    pub fn matches(&self, event: &Event) -> bool {
        if matches!(event.kind, EventKind::Access(_)) {
            return false;
        }
        event.paths.iter().any(|p| self.files.contains(p))
    }
}

/// Calls `on_change` whenever the configuration file or schema file changes.
///
/// `on_change` returns the files to watch from then on, or `None` to keep the
/// current set (a failed reload).
pub struct ConfigWatcher {
    _watcher: Arc<Mutex<RecommendedWatcher>>,
}

impl ConfigWatcher {
    pub fn new<F>(paths: Vec<PathBuf>, on_change: F) -> Result<Self>
    where
        F: Fn() -> Option<Vec<PathBuf>> + Send + Sync + 'static,
    {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

        let mut targets = WatchTargets::new(&paths);
        for dir in targets.dirs() {
            watch_dir(&mut watcher, dir);
        }

        let watcher = Arc::new(Mutex::new(watcher));
        let handle = Arc::downgrade(&watcher);

        std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Ok(event)) => {
                    if !targets.matches(&event) {
                        continue;
                    }
                    // Editors often write in several steps; let them finish
                    std::thread::sleep(Duration::from_millis(100));
                    while rx.try_recv().is_ok() {}
                    info!("Form configuration change detected, reloading...");

                    if let Some(paths) = on_change() {
                        let next = WatchTargets::new(&paths);
                        if next != targets {
                            retarget(&handle, &targets, &next);
                            targets = next;
                        }
                    }
                }
                Ok(Err(e)) => error!("Watch error: {:?}", e),
                Err(e) => {
                    error!("Watch channel error: {:?}", e);
                    break;
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}

fn watch_dir(watcher: &mut RecommendedWatcher, dir: &Path) {
    if !dir.exists() {
        warn!("Configuration directory does not exist, skipping: {}", dir.display());
        return;
    }
    match watcher.watch(dir, RecursiveMode::NonRecursive) {
        Ok(()) => info!("Watching form configuration in {}", dir.display()),
        Err(e) => warn!("Failed to watch {}: {}", dir.display(), e),
    }
}

fn retarget(handle: &Weak<Mutex<RecommendedWatcher>>, current: &WatchTargets, next: &WatchTargets) {
    let Some(watcher) = handle.upgrade() else {
        return;
    };
    let Ok(mut watcher) = watcher.lock() else {
        error!("Watcher lock poisoned, keeping the current watch set");
        return;
    };

    for dir in current.dirs.difference(&next.dirs) {
        if let Err(e) = watcher.unwatch(dir) {
            warn!("Failed to stop watching {}: {}", dir.display(), e);
        }
    }
    for dir in next.dirs.difference(&current.dirs) {
        watch_dir(&mut watcher, dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RenameMode};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_targets_share_parent_directory() {
        let dir = TempDir::new().unwrap();
        let targets = WatchTargets::new(&[
            dir.path().join("survey.toml"),
            dir.path().join("feedback.json"),
        ]);

        let dirs: Vec<&Path> = targets.dirs().collect();
        assert_eq!(dirs, [dir.path().canonicalize().unwrap().as_path()]);
    }

    #[test]
    fn test_bare_file_name_watches_current_directory() {
        let targets = WatchTargets::new(&[PathBuf::from("survey.toml")]);
        let cwd = PathBuf::from(".").canonicalize().unwrap();

        let dirs: Vec<&Path> = targets.dirs().collect();
        assert_eq!(dirs, [cwd.as_path()]);

        let event = Event::new(EventKind::Create(CreateKind::File)).add_path(cwd.join("survey.toml"));
        assert!(targets.matches(&event));
    }

    #[test]
    fn test_only_watched_files_trigger() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let targets = WatchTargets::new(&[dir.path().join("survey.toml")]);

        let sibling = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(root.join("notes.txt"));
        assert!(!targets.matches(&sibling));

        let renamed_over = Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
            .add_path(root.join(".survey.toml.swp"))
            .add_path(root.join("survey.toml"));
        assert!(targets.matches(&renamed_over));

        let read = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(root.join("survey.toml"));
        assert!(!targets.matches(&read));
    }

    #[test]
    fn test_new_schema_path_changes_targets() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("forms")).unwrap();
        let config = dir.path().join("survey.toml");

        let before = WatchTargets::new(&[config.clone()]);
        let after = WatchTargets::new(&[config, dir.path().join("forms/v2.yaml")]);

        assert_ne!(before, after);
        assert_eq!(after.dirs().count(), 2);
        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(dir.path().canonicalize().unwrap().join("forms/v2.yaml"));
        assert!(!before.matches(&event));
        assert!(after.matches(&event));
    }
}
