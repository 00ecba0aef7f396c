use anyhow::Result;
use dfm_types::Severity;

// Builtin command modules
mod registry;
mod z;
mod zoxide;

pub use registry::{COMMAND_REGISTRY, CommandRegistry};
pub use z::ZCommand;
pub use zoxide::{Resolution, Zoxide};

/// Trait that provides an interface for builtin commands to interact with the file manager
/// This allows builtin commands to perform navigation and messaging without direct coupling
pub trait FmProxy {
    /// Changes the current working directory and updates the browser state
    fn changepwd(&mut self, path: &str) -> Result<()>;

    /// Shows a message in the file manager's notification area
    fn notify(&mut self, message: &str, severity: Severity);
}

/// A builtin command recognized by the file manager's dispatch table
///
/// Commands receive at most one argument token; the dispatcher treats a
/// missing argument and an empty string identically.
pub trait Command: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// Run the command against the host
    fn execute(&self, argument: Option<&str>, fm: &mut dyn FmProxy) -> Result<()>;
}
