use crate::domain::model::{Layout, MODULES};
use crate::utils::error::{ConvertError, Result};
use std::path::Path;

/// Read-only checks that `directory` is a raut page/model tree.
/// Fails on the first problem found.
pub fn validate_tree(directory: &Path, layout: &Layout) -> Result<()> {
    if !directory.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    if !directory.join(&layout.marker).is_file() {
        return Err(ConvertError::NotAModule {
            path: directory.to_path_buf(),
        });
    }

    for module in MODULES {
        let subdir = directory.join(module);
        if !subdir.is_dir() {
            return Err(ConvertError::MissingSubdirectory { path: subdir });
        }
    }

    tracing::debug!("{} is a valid page/model tree", directory.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn module_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("__init__.py"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_valid_tree() {
        let temp_dir = module_dir();
        fs::create_dir(temp_dir.path().join("models")).unwrap();
        fs::create_dir(temp_dir.path().join("pages")).unwrap();
        assert!(validate_tree(temp_dir.path(), &Layout::default()).is_ok());
    }

    #[test]
    fn test_not_a_directory() {
        let temp_dir = module_dir();
        let file = temp_dir.path().join("__init__.py");
        let err = validate_tree(&file, &Layout::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory { .. }));
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("__init__.py")).unwrap();
        fs::create_dir(temp_dir.path().join("models")).unwrap();
        fs::create_dir(temp_dir.path().join("pages")).unwrap();
        let err = validate_tree(temp_dir.path(), &Layout::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NotAModule { .. }));
    }

    #[test]
    fn test_first_missing_subdirectory_reported() {
        let temp_dir = module_dir();
        let err = validate_tree(temp_dir.path(), &Layout::default()).unwrap_err();
        match err {
            ConvertError::MissingSubdirectory { path } => {
                assert_eq!(path, temp_dir.path().join("models"))
            }
            other => panic!("unexpected error: {other}"),
        }

        fs::create_dir(temp_dir.path().join("models")).unwrap();
        let err = validate_tree(temp_dir.path(), &Layout::default()).unwrap_err();
        match err {
            ConvertError::MissingSubdirectory { path } => {
                assert_eq!(path, temp_dir.path().join("pages"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_marker() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("__init__.pyi"), "").unwrap();
        fs::create_dir(temp_dir.path().join("models")).unwrap();
        fs::create_dir(temp_dir.path().join("pages")).unwrap();

        let layout = Layout {
            marker: "__init__.pyi".to_string(),
            suffix: ".pyi".to_string(),
        };
        assert!(validate_tree(temp_dir.path(), &layout).is_ok());
        assert!(validate_tree(temp_dir.path(), &Layout::default()).is_err());
    }
}
