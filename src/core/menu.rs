// src/core/menu.rs

use crate::models::{EntryKind, MenuEntry};
use log::debug;
use std::{
    ffi::OsString,
    fs::{self, Metadata},
    io,
    path::Path,
};

/// Lists the visible children of `dir`, sorted by name.
///
/// Directories are always visible. Files are visible when the current process may
/// execute them. Anything whose metadata cannot be read (broken symlinks included) is
/// left out. The directory itself failing to open is the only error.
pub fn list_entries(dir: &Path) -> io::Result<Vec<MenuEntry>> {
    let mut children: Vec<(OsString, MenuEntry)> = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = match dir_entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in '{}': {}", dir.display(), e);
                continue;
            }
        };

        let path = dir_entry.path();
        // `fs::metadata` follows symlinks, so a link is judged by its target.
        let kind = match fs::metadata(&path) {
            Ok(metadata) => classify(&metadata),
            Err(e) => {
                debug!("Skipping '{}': {}", path.display(), e);
                None
            }
        };

        if let Some(kind) = kind {
            let file_name = dir_entry.file_name();
            let entry = MenuEntry {
                name: file_name.to_string_lossy().into_owned(),
                path,
                kind,
            };
            children.push((file_name, entry));
        }
    }

    children.sort_by(|(a, _), (b, _)| a.cmp(b));
    debug!("{} menu entries in '{}'", children.len(), dir.display());
    Ok(children.into_iter().map(|(_, entry)| entry).collect())
}

fn classify(metadata: &Metadata) -> Option<EntryKind> {
    if metadata.is_dir() {
        Some(EntryKind::Directory)
    } else if metadata.is_file() && is_executable(metadata) {
        Some(EntryKind::Executable)
    } else {
        None
    }
}

#[cfg(unix)]
fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &Metadata) -> bool {
    true
}
