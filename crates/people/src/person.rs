use serde::{Deserialize, Serialize};

use addressbook_core::{Entity, PersonId};

use crate::{Address, Email, Name, Phone};

/// Entity: a person in the address book.
///
/// `PartialEq` compares every field including the identity. Duplicate detection in
/// collections uses [`Person::is_same_person`], which ignores the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
}

impl Person {
    pub fn new(id: PersonId, name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            address,
        }
    }

    pub fn id_typed(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Duplicate predicate: same name, phone, email and address.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}
