//! Builtin command registry.
//!
//! Provides a centralized registry for the file manager's builtin commands,
//! consulted by the host's dispatcher at startup.

use crate::z::ZCommand;
use crate::{Command, FmProxy};
use anyhow::Result;
use dfm_types::FmError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Global builtin command registry.
pub static COMMAND_REGISTRY: Lazy<CommandRegistry> = Lazy::new(CommandRegistry::new);

/// Registry of builtin commands.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new registry with all builtin commands registered.
    pub fn new() -> Self {
        let mut commands: HashMap<&'static str, Box<dyn Command>> = HashMap::new();

        // Navigation
        register(&mut commands, Box::new(ZCommand::default()));

        Self { commands }
    }

    /// Get a command by name.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| &**c)
    }

    /// Check if a name refers to a builtin command.
    pub fn is_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// List all registered builtin command names.
    pub fn list(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    /// Dispatch a tokenized command line against the host.
    ///
    /// `argv[0]` is the command name; at most one argument token is
    /// consumed, further tokens are ignored.
    pub fn dispatch(&self, argv: &[String], fm: &mut dyn FmProxy) -> Result<()> {
        let name = argv.first().map(String::as_str).unwrap_or_default();
        let cmd = self
            .get(name)
            .ok_or_else(|| FmError::UnknownCommand(name.to_string()))?;
        cmd.execute(argument_from(argv), fm)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn register(commands: &mut HashMap<&'static str, Box<dyn Command>>, cmd: Box<dyn Command>) {
    commands.insert(cmd.name(), cmd);
}

/// Extract the single optional argument token from a tokenized line.
///
/// A missing argument and an empty string are equivalent.
fn argument_from(argv: &[String]) -> Option<&str> {
    argv.get(1).map(String::as_str).filter(|s| !s.is_empty())
}
