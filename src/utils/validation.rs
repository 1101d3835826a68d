use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: &str) -> ConvertError {
    ConvertError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

/// A bare file name: no separators, not `.` or `..`.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') {
        return Err(invalid(field_name, name, "File name cannot contain path separators"));
    }

    if name == "." || name == ".." {
        return Err(invalid(field_name, name, "File name cannot be a relative path component"));
    }

    Ok(())
}

pub fn validate_suffix(field_name: &str, suffix: &str) -> Result<()> {
    if !suffix.starts_with('.') || suffix.len() < 2 {
        return Err(invalid(
            field_name,
            suffix,
            "Suffix must start with '.' followed by an extension",
        ));
    }

    validate_file_name(field_name, suffix)
}
