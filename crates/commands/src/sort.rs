use addressbook_core::DomainResult;
use addressbook_people::{NameOrder, UniquePersonList};

use crate::{AddressBookConfig, Command, CommandResult};

/// Sorts all persons in the address book by name, then lists them.
///
/// The new order stays in the list, so a later `list` shows it too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCommand {
    order: NameOrder,
}

impl SortCommand {
    pub const WORD: &'static str = "sort";
    pub const USAGE: &'static str = "sort: Sorts entries in address book by name then lists entries with index numbers.\nExample: sort";

    pub fn new(order: NameOrder) -> Self {
        Self { order }
    }

    pub fn from_config(config: &AddressBookConfig) -> Self {
        Self::new(config.name_order)
    }

    pub fn order(&self) -> NameOrder {
        self.order
    }
}

impl Command for SortCommand {
    fn word(&self) -> &'static str {
        Self::WORD
    }

    fn execute(&self, persons: &mut UniquePersonList) -> DomainResult<CommandResult> {
        persons.sort_by_name(self.order);
        Ok(CommandResult::listing(persons.as_slice()))
    }
}
