use crate::domain::model::{Action, Plan};
use crate::domain::ports::Executor;
use crate::utils::error::Result;
use std::io::Write;

/// Shell-equivalent text for one action.
///
/// `AppendLine` keeps the line's own newline inside the quotes, so that
/// command spans two output lines.
pub fn shell_command(action: &Action) -> String {
    match action {
        Action::CreateDir { path } => format!("mkdir {}", path.display()),
        Action::Touch { path } => format!("touch {}", path.display()),
        Action::AppendLine { path, line } => format!("echo \"{}\" >> {}", line, path.display()),
        Action::Move { from, to } => format!("mv {} {}", from.display(), to.display()),
        Action::RemoveFile { path } => format!("rm {}", path.display()),
        Action::RemoveDirIfEmpty { path } => format!("rmdir {}", path.display()),
    }
}

/// Dry-run executor writing one shell command per action.
pub struct ShellPrinter<W: Write> {
    out: W,
}

impl<W: Write> ShellPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Executor for ShellPrinter<W> {
    fn execute(&mut self, plan: &Plan) -> Result<()> {
        for action in plan.iter() {
            writeln!(self.out, "{}", shell_command(action))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Dry-run executor writing the plan as pretty JSON.
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Executor for JsonPrinter<W> {
    fn execute(&mut self, plan: &Plan) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, plan)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
