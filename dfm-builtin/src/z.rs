use crate::zoxide::{Resolution, Zoxide};
use crate::{Command, FmProxy};
use anyhow::Result;
use dfm_types::Severity;
use tracing::debug;

const NO_MATCH: &str = "No match found in zoxide database.";

/// Built-in z command implementation
/// Jumps to a directory resolved by zoxide: `z <query>` asks the index for
/// the best match, bare `z` opens the tool's interactive chooser.
pub struct ZCommand {
    index: Zoxide,
}

impl ZCommand {
    pub fn new(index: Zoxide) -> Self {
        Self { index }
    }
}

impl Default for ZCommand {
    fn default() -> Self {
        Self::new(Zoxide::default())
    }
}

impl Command for ZCommand {
    fn name(&self) -> &'static str {
        "z"
    }

    fn execute(&self, argument: Option<&str>, fm: &mut dyn FmProxy) -> Result<()> {
        debug!("call z {:?}", argument);
        match self.index.query(argument)? {
            Resolution::Path(target) => fm.changepwd(&target),
            Resolution::NoMatch { status } => {
                debug!("no zoxide match (status {:?})", status);
                fm.notify(NO_MATCH, Severity::Bad);
                Ok(())
            }
        }
    }
}
