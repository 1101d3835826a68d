pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, ConvertConfig, PlanFormat};
pub use crate::core::{
    convert::Converter,
    executor::FsExecutor,
    render::{JsonPrinter, ShellPrinter},
};
pub use domain::model::{Action, ConversionSummary, Discovery, Layout, Plan, MODULES};
pub use domain::ports::{ConfigProvider, Executor};
pub use utils::error::{ConvertError, Result};
