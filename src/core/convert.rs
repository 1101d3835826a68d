use crate::config::{ConvertConfig, PlanFormat};
use crate::core::discovery::discover;
use crate::core::executor::FsExecutor;
use crate::core::planner::Planner;
use crate::core::render::{JsonPrinter, ShellPrinter};
use crate::core::validator::validate_tree;
use crate::domain::model::{ConversionSummary, Plan};
use crate::domain::ports::{ConfigProvider, Executor};
use crate::utils::error::Result;
use std::io::Write;

/// Runs validation, discovery and planning, then hands the plan to an executor.
pub struct Converter<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Converter<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Everything up to, but not including, execution. Never writes.
    pub fn plan(&self) -> Result<Plan> {
        let directory = self.config.directory();
        let layout = self.config.layout();

        validate_tree(directory, layout)?;

        let discovery = discover(directory, layout)?;
        tracing::info!(
            "Discovered {} source files and {} marker files in {}",
            discovery.source_count(),
            discovery.init_files.len(),
            directory.display()
        );

        let planner = Planner::new(directory, layout, self.config.root_path())?;
        planner.plan(&discovery)
    }

    pub fn run<E: Executor>(&self, executor: &mut E) -> Result<ConversionSummary> {
        let plan = self.plan()?;
        executor.execute(&plan)?;
        Ok(ConversionSummary::from_plan(&plan))
    }
}

impl Converter<ConvertConfig> {
    /// Picks the executor from the config: the filesystem, or a dry-run
    /// printer writing to `out`.
    pub fn run_configured<W: Write>(&self, out: W) -> Result<ConversionSummary> {
        if !self.config.dry_run {
            return self.run(&mut FsExecutor::new());
        }

        tracing::debug!("Dry run, rendering plan as {:?}", self.config.format);
        match self.config.format {
            PlanFormat::Text => self.run(&mut ShellPrinter::new(out)),
            PlanFormat::Json => self.run(&mut JsonPrinter::new(out)),
        }
    }
}
