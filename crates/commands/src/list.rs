use addressbook_core::DomainResult;
use addressbook_people::UniquePersonList;

use crate::{Command, CommandResult};

/// Lists all persons in their current order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const WORD: &'static str = "list";
    pub const USAGE: &'static str =
        "list: Displays all persons in the address book as a list with index numbers.\nExample: list";
}

impl Command for ListCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, persons: &mut UniquePersonList) -> DomainResult<CommandResult> {
        Ok(CommandResult::listing(persons.as_slice()))
    }
}
