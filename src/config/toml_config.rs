use crate::domain::model::Layout;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub layout: Option<LayoutSection>,
    pub imports: Option<ImportsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    pub marker: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportsSection {
    pub root_path: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::ConfigError {
                message: format!("cannot read '{}': {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Layout with file values applied over the defaults.
    pub fn layout(&self) -> Layout {
        let mut layout = Layout::default();
        if let Some(section) = &self.layout {
            if let Some(marker) = &section.marker {
                layout.marker = marker.clone();
            }
            if let Some(suffix) = &section.suffix {
                layout.suffix = suffix.clone();
            }
        }
        layout
    }

    pub fn root_path(&self) -> Option<&str> {
        self.imports.as_ref().and_then(|i| i.root_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let layout = self.layout();
        validation::validate_file_name("layout.marker", &layout.marker)?;
        validation::validate_suffix("layout.suffix", &layout.suffix)?;
        if let Some(root_path) = self.root_path() {
            validation::validate_path("imports.root_path", root_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[layout]
marker = "__init__.pyi"
suffix = ".pyi"

[imports]
root_path = "/srv/project"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let layout = config.layout();
        assert_eq!(layout.marker, "__init__.pyi");
        assert_eq!(layout.suffix, ".pyi");
        assert_eq!(config.root_path(), Some("/srv/project"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.layout(), Layout::default());
        assert_eq!(config.root_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RAUT2WEBSTR_TEST_ROOT", "/opt/webstr");

        let toml_content = r#"
[imports]
root_path = "${RAUT2WEBSTR_TEST_ROOT}/src"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.root_path(), Some("/opt/webstr/src"));

        std::env::remove_var("RAUT2WEBSTR_TEST_ROOT");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let toml_content = r#"
[imports]
root_path = "${RAUT2WEBSTR_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.root_path(), Some("${RAUT2WEBSTR_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[layout]\nsuffix = \"py\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[layout]\nmarker = \"a/__init__.py\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = TomlConfig::from_toml_str("[layout]\nmodules = [\"views\"]\n").unwrap_err();
        assert!(matches!(err, ConvertError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[layout]\nmarker = \"__init__.py\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.layout().marker, "__init__.py");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/nonexistent/raut2webstr.toml").unwrap_err();
        assert!(matches!(err, ConvertError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
