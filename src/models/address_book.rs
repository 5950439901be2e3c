//! The address book: an ordered list of unique persons.

use crate::models::Person;
use serde::{Deserialize, Serialize};

/// Wraps the person list. Uniqueness (no two persons with the same name)
/// is checked by the commands before they mutate the book, mirroring how
/// duplicate errors carry user-facing messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Whether a person with the same name already exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Replace the person at `index`, returning the previous value.
    pub fn set_person(&mut self, index: usize, person: Person) -> Person {
        std::mem::replace(&mut self.persons[index], person)
    }

    /// Remove and return the person at `index`.
    pub fn remove_person(&mut self, index: usize) -> Person {
        self.persons.remove(index)
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}
