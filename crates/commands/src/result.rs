use serde::Serialize;

use addressbook_people::Person;

/// Outcome of a command: feedback for the user plus, for listing commands, the persons
/// to show in order.
///
/// `persons` is a snapshot; later mutations of the list do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub feedback: String,
    pub persons: Option<Vec<Person>>,
}

impl CommandResult {
    /// Feedback only.
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            persons: None,
        }
    }

    /// Feedback summarising `persons`, followed by the persons themselves.
    pub fn listing(persons: &[Person]) -> Self {
        Self {
            feedback: persons_listed_summary(persons.len()),
            persons: Some(persons.to_vec()),
        }
    }

    pub fn persons(&self) -> Option<&[Person]> {
        self.persons.as_deref()
    }
}

/// `"<count> persons listed!"`
pub fn persons_listed_summary(count: usize) -> String {
    format!("{count} persons listed!")
}
