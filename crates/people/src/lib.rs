//! People domain module (persons and their contact details).
//!
//! This crate contains the business rules for person records, implemented purely as
//! deterministic domain logic (no IO, no command parsing, no storage).

pub mod address;
pub mod contact;
pub mod person;
pub mod unique_list;

mod record;

pub use address::{Address, AddressParts};
pub use contact::{Email, Name, Phone};
pub use person::Person;
pub use unique_list::{NameOrder, UniquePersonList};
