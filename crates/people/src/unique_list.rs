//! Duplicate-free, orderable list of persons.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use addressbook_core::{DomainError, DomainResult, Entity, PersonId};

use crate::{Name, Person};

/// How names compare when sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameOrder {
    /// Ordinal comparison of the name strings.
    #[default]
    CaseSensitive,
    /// Ordinal comparison after lowercasing both names.
    CaseInsensitive,
}

impl NameOrder {
    pub fn compare(self, a: &Name, b: &Name) -> Ordering {
        match self {
            NameOrder::CaseSensitive => a.as_str().cmp(b.as_str()),
            NameOrder::CaseInsensitive => a
                .as_str()
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.as_str().chars().flat_map(char::to_lowercase)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NameOrder::CaseSensitive => "case-sensitive",
            NameOrder::CaseInsensitive => "case-insensitive",
        }
    }
}

impl core::fmt::Display for NameOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "case-sensitive" => Ok(NameOrder::CaseSensitive),
            "case-insensitive" => Ok(NameOrder::CaseInsensitive),
            other => Err(DomainError::validation(format!(
                "name order must be one of: case-sensitive, case-insensitive (got {other:?})"
            ))),
        }
    }
}

/// A list of persons that never holds two entries for the same person.
///
/// Insertion order is kept until [`UniquePersonList::sort`] (or another mutation)
/// changes it. Reads go through [`UniquePersonList::as_slice`] / [`UniquePersonList::iter`];
/// the backing storage is never handed out mutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing records, rejecting duplicates among them.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> DomainResult<Self> {
        let mut list = Self::new();
        for person in persons {
            list.add(person)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Whether an equivalent person (same data, any identity) is present.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id() == id)
    }

    /// Append a person. Fails without changing the list if an equivalent person exists.
    pub fn add(&mut self, person: Person) -> DomainResult<()> {
        if self.contains(&person) {
            return Err(DomainError::duplicate(format!(
                "person already exists: {}",
                person.name()
            )));
        }
        tracing::debug!(person_id = %person.id(), "adding person");
        self.persons.push(person);
        Ok(())
    }

    /// Remove the person with the given identity.
    pub fn remove(&mut self, id: &PersonId) -> DomainResult<Person> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        tracing::debug!(person_id = %id, "removing person");
        Ok(self.persons.remove(index))
    }

    /// Replace (edit) the person with the given identity, keeping its position.
    ///
    /// Fails if the target is missing, if `edited` carries a different identity, or if
    /// the replacement duplicates any *other* entry.
    pub fn replace(&mut self, id: &PersonId, edited: Person) -> DomainResult<()> {
        let index = self.position(id).ok_or_else(DomainError::not_found)?;
        if edited.id() != id {
            return Err(DomainError::invariant("person_id mismatch"));
        }

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.is_same_person(&edited));
        if clashes {
            return Err(DomainError::duplicate(format!(
                "person already exists: {}",
                edited.name()
            )));
        }

        tracing::debug!(person_id = %id, "replacing person");
        self.persons[index] = edited;
        Ok(())
    }

    /// Stable sort by name, case-sensitive.
    pub fn sort(&mut self) {
        self.sort_by_name(NameOrder::CaseSensitive);
    }

    /// Stable sort by name using `order`. Persons with equal names keep their relative order.
    pub fn sort_by_name(&mut self, order: NameOrder) {
        self.persons.sort_by(|a, b| order.compare(a.name(), b.name()));
        tracing::debug!(count = self.persons.len(), %order, "sorted persons by name");
    }

    /// Read-only view in current order.
    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    fn position(&self, id: &PersonId) -> Option<usize> {
        self.persons.iter().position(|p| p.id() == id)
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = core::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
