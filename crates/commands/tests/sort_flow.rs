//! Black-box flow: build a list, run `list` and `sort` the way a dispatcher would.

use addressbook_commands::{
    AddressBookConfig, Command, CommandResult, ListCommand, SortCommand, UniquePersonList,
    execute,
};
use addressbook_core::{DomainError, PersonId};
use addressbook_people::{Address, Email, Name, NameOrder, Person, Phone};
use proptest::prelude::*;

fn person(name: &str, phone: &str, address: &str) -> Person {
    Person::new(
        PersonId::new(),
        Name::new(name, false).unwrap(),
        Phone::new(phone, false).unwrap(),
        Email::new(&format!("{phone}@example.com"), false).unwrap(),
        Address::new(address, false).unwrap(),
    )
}

fn listed_names(result: &CommandResult) -> Vec<&str> {
    result
        .persons()
        .unwrap()
        .iter()
        .map(|p| p.name().as_str())
        .collect()
}

fn sample_book() -> UniquePersonList {
    UniquePersonList::from_persons([
        person("Charlie", "3", "3, Lorong 3"),
        person("Alice", "1", "123, Clementi Ave 3, #12-34, 560123"),
        person("Bob", "2", "Blk 45 Emerald Hill"),
    ])
    .unwrap()
}

#[test]
fn sort_reorders_what_list_shows_afterwards() {
    addressbook_observability::init();
    let mut book = sample_book();

    let before = execute(&ListCommand, &mut book).unwrap();
    assert_eq!(listed_names(&before), ["Charlie", "Alice", "Bob"]);

    let sorted = execute(&SortCommand::default(), &mut book).unwrap();
    assert_eq!(sorted.feedback, "3 persons listed!");
    assert_eq!(listed_names(&sorted), ["Alice", "Bob", "Charlie"]);

    let after = execute(&ListCommand, &mut book).unwrap();
    assert_eq!(listed_names(&after), ["Alice", "Bob", "Charlie"]);
}

#[test]
fn result_snapshot_is_detached_from_later_edits() {
    let mut book = sample_book();
    let sorted = execute(&SortCommand::default(), &mut book).unwrap();

    let first = book.as_slice()[0].id_typed();
    book.remove(&first).unwrap();

    assert_eq!(book.len(), 2);
    assert_eq!(sorted.persons().unwrap().len(), 3);
}

#[test]
fn commands_run_behind_a_trait_object() {
    let config = AddressBookConfig::from_lookup(|_| Some("case-insensitive".to_string()));
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(SortCommand::from_config(&config)),
        Box::new(ListCommand),
    ];

    let mut book = UniquePersonList::from_persons([
        person("bob", "1", "Blk 1"),
        person("Alice", "2", "Blk 2"),
    ])
    .unwrap();

    let words: Vec<&str> = commands.iter().map(|c| c.word()).collect();
    assert_eq!(words, ["sort", "list"]);

    for command in &commands {
        let result = execute(command.as_ref(), &mut book).unwrap();
        assert_eq!(listed_names(&result), ["Alice", "bob"]);
    }
}

#[test]
fn sort_never_breaks_uniqueness() {
    let mut book = sample_book();
    execute(&SortCommand::new(NameOrder::CaseSensitive), &mut book).unwrap();

    let again = person("Alice", "1", "123,Clementi Ave 3,#12-34,560123");
    assert!(matches!(book.add(again), Err(DomainError::Duplicate(_))));
    assert_eq!(book.len(), 3);
}

#[test]
fn invalid_address_surfaces_the_constraint_message() {
    let err = Address::new("   ", false).unwrap_err();
    assert_eq!(
        err.constraint_message(),
        Some("Person addresses can be in any format")
    );
}

proptest! {
    /// Property: running `sort` twice lists the same order as running it once.
    #[test]
    fn sort_command_is_idempotent(names in prop::collection::vec("[A-Ca-c]{1,2}", 0..12)) {
        let persons = names
            .iter()
            .enumerate()
            .map(|(i, n)| person(n, &i.to_string(), "Blk 1"));
        let mut book = UniquePersonList::from_persons(persons).unwrap();

        let once = SortCommand::default().execute(&mut book).unwrap();
        let twice = SortCommand::default().execute(&mut book).unwrap();

        prop_assert_eq!(once.feedback, format!("{} persons listed!", names.len()));
        prop_assert_eq!(once.persons, twice.persons);
    }
}
