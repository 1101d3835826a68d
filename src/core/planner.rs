use crate::domain::model::{Action, Discovery, Layout, Plan, MODULES};
use crate::utils::error::{ConvertError, Result};
use crate::utils::paths;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Builds the ordered action list for one conversion: relocations for
/// `models` then `pages`, followed by cleanup.
pub struct Planner<'a> {
    directory: &'a Path,
    layout: &'a Layout,
    /// Absolute, normalized form of the import root.
    root_path: Option<PathBuf>,
}

impl<'a> Planner<'a> {
    pub fn new(directory: &'a Path, layout: &'a Layout, root_path: Option<&Path>) -> Result<Self> {
        let root_path = root_path
            .map(|root| {
                paths::absolutize(root)
                    .map_err(|e| ConvertError::filesystem("resolve root path", root, e))
            })
            .transpose()?;

        Ok(Self {
            directory,
            layout,
            root_path,
        })
    }

    pub fn plan(&self, discovery: &Discovery) -> Result<Plan> {
        let mut plan = Plan::default();

        for module in MODULES {
            for file_name in discovery.files_for(module) {
                self.plan_relocation(&mut plan, module, file_name)?;
            }
        }

        for init_file in &discovery.init_files {
            plan.push(Action::RemoveFile {
                path: init_file.clone(),
            });
        }

        for module in MODULES {
            plan.push(Action::RemoveDirIfEmpty {
                path: self.directory.join(module),
            });
        }

        Ok(plan)
    }

    fn plan_relocation(&self, plan: &mut Plan, module: &str, file_name: &OsStr) -> Result<()> {
        let stem = self.layout.stem(file_name);
        let new_module_path = self.directory.join(stem);
        let new_init_path = new_module_path.join(&self.layout.marker);
        let old_file_path = self.directory.join(module).join(file_name);
        let new_file_path = new_module_path.join(format!("{}{}", module, self.layout.suffix));
        let import_path = self.import_path(&new_module_path, stem)?;

        plan.push(Action::CreateDir {
            path: new_module_path,
        });
        plan.push(Action::Touch {
            path: new_init_path.clone(),
        });
        plan.push(Action::AppendLine {
            path: new_init_path,
            line: format!("import {}{}\n", import_path, module),
        });
        plan.push(Action::Move {
            from: old_file_path,
            to: new_file_path,
        });
        Ok(())
    }

    /// Dotted prefix for the import line, always ending in `.`.
    /// Names that are not UTF-8 are written lossily.
    pub fn import_path(&self, new_module_path: &Path, stem: &OsStr) -> Result<String> {
        let mut import_path = match &self.root_path {
            Some(root) => {
                let absolute = paths::absolutize(new_module_path).map_err(|e| {
                    ConvertError::filesystem("resolve module path", new_module_path, e)
                })?;
                paths::dotted(&paths::relative_to(&absolute, root))
            }
            None => stem.to_string_lossy().into_owned(),
        };
        import_path.push('.');
        Ok(import_path)
    }
}
