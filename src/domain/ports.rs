use crate::domain::model::{Layout, Plan};
use crate::utils::error::Result;
use std::path::Path;

/// Consumes a plan, either by performing it or by describing it.
pub trait Executor {
    fn execute(&mut self, plan: &Plan) -> Result<()>;
}

pub trait ConfigProvider {
    fn directory(&self) -> &Path;
    fn root_path(&self) -> Option<&Path>;
    fn layout(&self) -> &Layout;
}
