//! `help` and `exit`: commands that only raise display-layer flags.

use super::{Command, CommandOutcome, CommandResult};
use crate::repo::model::Model;

pub const HELP_COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn command_word(&self) -> &'static str {
        HELP_COMMAND_WORD
    }

    fn execute(&mut self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::help("Opened help window."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn command_word(&self) -> &'static str {
        EXIT_COMMAND_WORD
    }

    fn execute(&mut self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::exit("Exiting student list as requested ..."))
    }
}
