use crate::domain::model::{Action, Plan};
use crate::domain::ports::Executor;
use crate::utils::error::{ConvertError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Applies a plan to the real filesystem. Stops at the first failure;
/// actions already applied are not undone.
#[derive(Debug, Default)]
pub struct FsExecutor;

impl FsExecutor {
    pub fn new() -> Self {
        Self
    }

    fn apply(&self, action: &Action) -> Result<()> {
        match action {
            Action::CreateDir { path } => match fs::create_dir(path) {
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!("{} already exists", path.display());
                    Ok(())
                }
                other => other.map_err(|e| ConvertError::filesystem("mkdir", path, e)),
            },
            Action::Touch { path } => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map(drop)
                .map_err(|e| ConvertError::filesystem("touch", path, e)),
            Action::AppendLine { path, line } => append_line(path, line),
            Action::Move { from, to } => {
                fs::rename(from, to).map_err(|e| ConvertError::filesystem("rename", from, e))
            }
            Action::RemoveFile { path } => {
                fs::remove_file(path).map_err(|e| ConvertError::filesystem("remove", path, e))
            }
            Action::RemoveDirIfEmpty { path } => {
                let mut entries =
                    fs::read_dir(path).map_err(|e| ConvertError::filesystem("list", path, e))?;
                if entries.next().is_some() {
                    tracing::info!("Keeping {}, it is not empty", path.display());
                    return Ok(());
                }
                fs::remove_dir(path).map_err(|e| ConvertError::filesystem("rmdir", path, e))
            }
        }
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| ConvertError::filesystem("open", path, e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| ConvertError::filesystem("append", path, e))
}

impl Executor for FsExecutor {
    fn execute(&mut self, plan: &Plan) -> Result<()> {
        for action in plan.iter() {
            tracing::debug!("Applying {:?}", action);
            self.apply(action)?;
        }
        Ok(())
    }
}
