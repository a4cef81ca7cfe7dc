//! Command Interpreter - turns raw player input into state changes and narration.
//!
//! Every recognized or unrecognized command is framed the same way:
//! 1. **Echo**: `"> "` followed by the raw input, then a blank line
//! 2. **Body**: the command's narration (or the fallback for unknown input)
//! 3. **Spacer**: one trailing blank line
//!
//! Input that is empty after trimming is dropped without touching the log.

mod handlers;

pub use handlers::Handler;

use game_state::{GameState, RulesConfig};
use std::collections::HashMap;

use crate::commands::{normalize, Command};

/// Prefix marking echoed player input in the history log.
pub const ECHO_PREFIX: &str = "> ";

/// What a call to [`CommandInterpreter::process`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing was appended.
    Ignored,
    /// A vocabulary command ran.
    Handled(Command),
    /// Input fell through to the fallback message.
    Unrecognized,
}

#[derive(Clone, Copy)]
struct Binding {
    command: Command,
    handler: Handler,
}

/// Dispatches normalized commands against a [`GameState`].
pub struct CommandInterpreter {
    config: RulesConfig,
    table: HashMap<&'static str, Binding>,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl CommandInterpreter {
    /// Create an interpreter with the full vocabulary bound.
    pub fn new(config: RulesConfig) -> Self {
        let table = Command::ALL
            .iter()
            .map(|&command| {
                let binding = Binding {
                    command,
                    handler: handlers::for_command(command),
                };
                (command.name(), binding)
            })
            .collect();

        Self { config, table }
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Run one player command to completion.
    pub fn process(&self, state: &mut GameState, raw: &str) -> Outcome {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            log::trace!("ignoring blank input");
            return Outcome::Ignored;
        }

        state.append_line(format!("{ECHO_PREFIX}{raw}"));
        state.append_line("");

        let outcome = match self.table.get(normalized.as_str()) {
            Some(binding) => {
                log::debug!("dispatching '{}'", binding.command);
                (binding.handler)(state, &self.config);
                Outcome::Handled(binding.command)
            }
            None => {
                log::debug!("unrecognized input '{normalized}'");
                handlers::unrecognized(state, raw);
                Outcome::Unrecognized
            }
        };

        state.append_line("");
        outcome
    }
}
