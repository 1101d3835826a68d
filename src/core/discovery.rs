use crate::domain::model::{Discovery, Layout, MODULES};
use crate::utils::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Walks each watched module below `directory`.
///
/// Source files are only taken from the top level of a module: nested
/// directories are not mirrored into the new layout, so files in them stay
/// where they are. Marker files are collected from the whole subtree.
/// Unreadable nested directories are skipped; an unreadable module root is
/// an error.
pub fn discover(directory: &Path, layout: &Layout) -> Result<Discovery> {
    let mut discovery = Discovery::default();

    for module in MODULES {
        let module_root = directory.join(module);
        let mut sources = Vec::new();

        for entry in WalkDir::new(&module_root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    tracing::warn!("Skipping unreadable entry below {}: {}", module, e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name();
            if layout.is_marker(file_name) {
                discovery.init_files.push(entry.path().to_path_buf());
            } else if entry.depth() == 1 && layout.is_source_file(file_name) {
                sources.push(file_name.to_os_string());
            } else if entry.depth() > 1 && layout.is_source_file(file_name) {
                tracing::warn!(
                    "{} is nested below {} and will not be relocated",
                    entry.path().display(),
                    module
                );
            }
        }

        tracing::debug!("Found {} source files in {}", sources.len(), module_root.display());
        discovery.files.insert(module.to_string(), sources);
    }

    Ok(discovery)
}
