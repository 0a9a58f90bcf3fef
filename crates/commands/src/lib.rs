//! Address book commands.
//!
//! Commands operate on a [`UniquePersonList`] handed to them by the caller; there is no
//! shared or global collection. Turning user input into a command and rendering the
//! [`CommandResult`] are the caller's concern.

pub mod command;
pub mod config;
pub mod list;
pub mod result;
pub mod sort;

pub use addressbook_people::UniquePersonList;
pub use command::{Command, execute};
pub use config::AddressBookConfig;
pub use list::ListCommand;
pub use result::{CommandResult, persons_listed_summary};
pub use sort::SortCommand;
