pub mod toml_config;

use crate::domain::model::Layout;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{builder::TypedValueParser, Parser};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    /// Pseudo-shell commands, one per action
    #[default]
    Text,
    /// The whole plan as one JSON document
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "raut2webstr")]
#[command(about = "convert raut page/model tree to webstr format")]
pub struct CliConfig {
    /// file path to page/model directory tree in raut format
    // An empty path is accepted here and rejected later as "not a directory".
    #[arg(value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from))]
    pub directory: PathBuf,

    /// print the equivalent shell commands instead of changing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// root path of a project, the import path will be constructed relatively to this path
    #[arg(short, long)]
    pub root_path: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// dry-run output format
    #[arg(short, long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a conversion needs, resolved from flags and the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub root_path: Option<PathBuf>,
    pub layout: Layout,
    pub format: PlanFormat,
}

impl ConvertConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            dry_run: false,
            root_path: None,
            layout: Layout::default(),
            format: PlanFormat::Text,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_root_path(mut self, root_path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(root_path.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_format(mut self, format: PlanFormat) -> Self {
        self.format = format;
        self
    }

    /// Applies a settings file underneath values already set on `self`.
    pub fn merge_file(mut self, file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        self.layout = file.layout();
        if self.root_path.is_none() {
            self.root_path = file.root_path().map(PathBuf::from);
        }
        Ok(self)
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut config = Self::new(&cli.directory)
            .with_dry_run(cli.dry_run)
            .with_format(cli.format);
        if let Some(root_path) = &cli.root_path {
            config = config.with_root_path(root_path);
        }
        if let Some(path) = &cli.config {
            tracing::debug!("Loading settings from {}", path.display());
            config = config.merge_file(&TomlConfig::from_file(path)?)?;
        }
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_file_name("layout.marker", &self.layout.marker)?;
        validation::validate_suffix("layout.suffix", &self.layout.suffix)?;
        if let Some(root_path) = &self.root_path {
            validation::validate_path("root_path", &root_path.to_string_lossy())?;
        }
        Ok(())
    }
}

impl ConfigProvider for ConvertConfig {
    fn directory(&self) -> &Path {
        &self.directory
    }

    fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_root_path_wins_over_file() {
        let file = TomlConfig::from_toml_str("[imports]\nroot_path = \"/from/file\"\n").unwrap();
        let config = ConvertConfig::new("proj")
            .with_root_path("/from/cli")
            .merge_file(&file)
            .unwrap();
        assert_eq!(config.root_path(), Some(Path::new("/from/cli")));

        let config = ConvertConfig::new("proj").merge_file(&file).unwrap();
        assert_eq!(config.root_path(), Some(Path::new("/from/file")));
    }

    #[test]
    fn test_invalid_file_rejected_on_merge() {
        let file = TomlConfig::from_toml_str("[layout]\nsuffix = \"\"\n").unwrap();
        assert!(ConvertConfig::new("proj").merge_file(&file).is_err());
    }

    #[test]
    fn test_layout_is_validated() {
        assert!(ConvertConfig::new("proj").validate().is_ok());

        let layout = Layout {
            marker: "__init__.py".to_string(),
            suffix: "py".to_string(),
        };
        assert!(ConvertConfig::new("proj").with_layout(layout).validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_accepts_empty_directory() {
        let cli = CliConfig::try_parse_from(["raut2webstr", ""]).unwrap();
        assert_eq!(cli.directory, PathBuf::new());
        assert!(ConvertConfig::from_cli(&cli).is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from(["raut2webstr", "-d", "-r", "/srv", "proj"]);
        assert!(cli.dry_run);
        assert_eq!(cli.root_path, Some(PathBuf::from("/srv")));
        assert_eq!(cli.format, PlanFormat::Text);

        let config = ConvertConfig::from_cli(&cli).unwrap();
        assert_eq!(config.directory, PathBuf::from("proj"));
        assert!(config.dry_run);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_long_flags() {
        let cli = CliConfig::parse_from([
            "raut2webstr",
            "--dry-run",
            "--root-path",
            "src",
            "--format",
            "json",
            "proj",
        ]);
        assert_eq!(cli.format, PlanFormat::Json);
        assert_eq!(cli.root_path, Some(PathBuf::from("src")));
    }
}
