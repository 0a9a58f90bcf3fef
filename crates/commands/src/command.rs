use addressbook_core::DomainResult;
use addressbook_people::UniquePersonList;

use crate::CommandResult;

/// A fully-parsed user command.
///
/// Commands are built by an input parser (outside this crate) and run against the
/// person list the caller owns. Execution is synchronous and runs to completion before
/// the next command starts; the `&mut` borrow is the single-writer guarantee.
pub trait Command: core::fmt::Debug {
    /// Keyword that invokes this command (e.g. `"sort"`).
    fn word(&self) -> &'static str;

    fn execute(&self, persons: &mut UniquePersonList) -> DomainResult<CommandResult>;
}

/// Execute a command with logging around it.
///
/// Prefer this over calling `Command::execute` directly from a dispatch loop.
pub fn execute<C>(command: &C, persons: &mut UniquePersonList) -> DomainResult<CommandResult>
where
    C: Command + ?Sized,
{
    let span = tracing::info_span!("command", word = command.word());
    let _guard = span.enter();

    match command.execute(persons) {
        Ok(result) => {
            tracing::info!(feedback = %result.feedback, "command executed");
            Ok(result)
        }
        Err(err) => {
            tracing::warn!(error = %err, "command failed");
            Err(err)
        }
    }
}
