use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Subdirectories of a raut page/model tree whose files get relocated.
pub const MODULES: [&str; 2] = ["models", "pages"];

pub const DEFAULT_MARKER: &str = "__init__.py";
pub const DEFAULT_SUFFIX: &str = ".py";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Module marker file name, e.g. `__init__.py`.
    pub marker: String,
    /// Source file suffix including the dot, e.g. `.py`.
    pub suffix: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl Layout {
    pub fn is_marker(&self, file_name: &OsStr) -> bool {
        file_name == OsStr::new(&self.marker)
    }

    /// Works on raw names, so file names that are not UTF-8 still match.
    pub fn is_source_file(&self, file_name: &OsStr) -> bool {
        file_name.as_encoded_bytes().ends_with(self.suffix.as_bytes()) && !self.is_marker(file_name)
    }

    /// File name without the source suffix.
    pub fn stem<'a>(&self, file_name: &'a OsStr) -> &'a OsStr {
        let bytes = file_name.as_encoded_bytes();
        match bytes.strip_suffix(self.suffix.as_bytes()) {
            // SAFETY: the bytes come from an `OsStr` and are split right before
            // `suffix`, which is non-empty UTF-8.
            Some(stem) => unsafe { OsStr::from_encoded_bytes_unchecked(stem) },
            None => file_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Source file names per watched module, sorted.
    pub files: BTreeMap<String, Vec<OsString>>,
    /// Every marker file found below the watched modules, in walk order.
    pub init_files: Vec<PathBuf>,
}

impl Discovery {
    pub fn files_for(&self, module: &str) -> &[OsString] {
        self.files.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn source_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    CreateDir { path: PathBuf },
    Touch { path: PathBuf },
    AppendLine { path: PathBuf, line: String },
    Move { from: PathBuf, to: PathBuf },
    RemoveFile { path: PathBuf },
    RemoveDirIfEmpty { path: PathBuf },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    pub files_relocated: usize,
    pub init_files_removed: usize,
    pub modules_created: usize,
}

impl ConversionSummary {
    pub fn from_plan(plan: &Plan) -> Self {
        let mut summary = Self::default();
        let mut created = std::collections::BTreeSet::new();
        for action in plan.iter() {
            match action {
                Action::Move { .. } => summary.files_relocated += 1,
                Action::RemoveFile { .. } => summary.init_files_removed += 1,
                Action::CreateDir { path } => {
                    created.insert(path.clone());
                }
                _ => {}
            }
        }
        summary.modules_created = created.len();
        summary
    }
}
