//! Address book service layer.
//!
//! Holds the live application state: the address book plus the list of
//! persons currently visible to the user. Index-taking commands (`delete`,
//! `edit`, `setstatus`) resolve their 1-based indices against the visible
//! list, so the service is the single place that maps view positions to
//! book positions.

use crate::error::{CommandError, ExecResult};
use crate::models::{AddressBook, Person};
use crate::domain::Status;
use tracing::debug;

/// Person field a `findby` search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Address,
    OrgId,
    DeviceInfo,
}

impl SearchField {
    fn value_of<'a>(&self, person: &'a Person) -> &'a str {
        match self {
            SearchField::Name => person.name().as_str(),
            SearchField::Phone => person.phone().as_str(),
            SearchField::Email => person.email().as_str(),
            SearchField::Address => person.address().as_str(),
            SearchField::OrgId => person.org_id().as_str(),
            SearchField::DeviceInfo => person.device_info().as_str(),
        }
    }
}

/// Mutable application state behind the commands.
#[derive(Debug)]
pub struct AddressBookService {
    book: AddressBook,
    // Indices into `book.persons()`, in display order.
    visible: Vec<usize>,
}

impl AddressBookService {
    pub fn new(book: AddressBook) -> Self {
        let visible = (0..book.len()).collect();
        Self { book, visible }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// The persons currently visible, in display order.
    pub fn visible_persons(&self) -> Vec<&Person> {
        self.visible
            .iter()
            .map(|&i| &self.book.persons()[i])
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// The person at the 1-based position in the visible list.
    pub fn person_at(&self, one_based: usize) -> Option<&Person> {
        let book_index = *self.visible.get(one_based.checked_sub(1)?)?;
        Some(&self.book.persons()[book_index])
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    /// Append a person and show the full list again.
    pub fn add_person(&mut self, person: Person) {
        self.book.add_person(person);
        self.show_all();
    }

    /// Replace the person at the 1-based visible position, returning the
    /// previous value. Resets the view to the full list.
    pub fn set_person(&mut self, one_based: usize, person: Person) -> ExecResult<Person> {
        let book_index = self.resolve(one_based)?;
        let old = self.book.set_person(book_index, person);
        self.show_all();
        Ok(old)
    }

    /// Remove the person at the 1-based visible position.
    pub fn remove_person(&mut self, one_based: usize) -> ExecResult<Person> {
        let book_index = self.resolve(one_based)?;
        let removed = self.book.remove_person(book_index);
        self.show_all();
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.book.clear();
        self.visible.clear();
    }

    /// Show every person; returns the visible count.
    pub fn show_all(&mut self) -> usize {
        self.visible = (0..self.book.len()).collect();
        self.visible.len()
    }

    /// Keep persons whose name contains any of the keywords as a whole
    /// word, ignoring case. Returns the visible count.
    pub fn filter_by_name_keywords(&mut self, keywords: &[String]) -> usize {
        self.retain(|person| {
            person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| word.eq_ignore_ascii_case(k)))
        })
    }

    /// Keep persons whose `field` value contains `keyword`, ignoring case.
    pub fn filter_by_field(&mut self, field: SearchField, keyword: &str) -> usize {
        let needle = keyword.to_lowercase();
        self.retain(|person| field.value_of(person).to_lowercase().contains(&needle))
    }

    /// Keep persons with the given status.
    pub fn filter_by_status(&mut self, status: Status) -> usize {
        self.retain(|person| person.status() == status)
    }

    /// Add every person that is not already present. Returns
    /// `(added, skipped)`.
    pub fn import(&mut self, persons: Vec<Person>) -> (usize, usize) {
        let mut added = 0;
        let mut skipped = 0;
        for person in persons {
            if self.book.has_person(&person) {
                debug!(name = person.name().as_str(), "import skipped duplicate");
                skipped += 1;
            } else {
                self.book.add_person(person);
                added += 1;
            }
        }
        self.show_all();
        (added, skipped)
    }

    /// Swap in a different book wholesale (used when loading from storage).
    pub fn reset(&mut self, book: AddressBook) {
        self.book = book;
        self.show_all();
    }

    fn resolve(&self, one_based: usize) -> ExecResult<usize> {
        one_based
            .checked_sub(1)
            .and_then(|i| self.visible.get(i).copied())
            .ok_or(CommandError::InvalidIndex)
    }

    fn retain(&mut self, predicate: impl Fn(&Person) -> bool) -> usize {
        self.visible = self
            .book
            .persons()
            .iter()
            .enumerate()
            .filter(|(_, p)| predicate(p))
            .map(|(i, _)| i)
            .collect();
        self.visible.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonBuilder;

    fn service_with(names: &[&str]) -> AddressBookService {
        let mut book = AddressBook::new();
        for (i, name) in names.iter().enumerate() {
            book.add_person(
                PersonBuilder::new()
                    .with_name(*name)
                    .with_phone(format!("9000000{}", i))
                    .build()
                    .unwrap(),
            );
        }
        AddressBookService::new(book)
    }

    #[test]
    fn test_person_at_is_one_based() {
        let service = service_with(&["Amy Bee", "Bob Choo"]);
        assert_eq!(service.person_at(1).unwrap().name().as_str(), "Amy Bee");
        assert_eq!(service.person_at(2).unwrap().name().as_str(), "Bob Choo");
        assert!(service.person_at(0).is_none());
        assert!(service.person_at(3).is_none());
    }

    #[test]
    fn test_filter_by_name_matches_whole_words() {
        let mut service = service_with(&["Amy Bee", "Bob Choo", "Amy Choo"]);
        assert_eq!(service.filter_by_name_keywords(&["amy".to_string()]), 2);
        assert_eq!(service.filter_by_name_keywords(&["Choo".to_string()]), 2);
        // substring of a word is not a match
        assert_eq!(service.filter_by_name_keywords(&["Cho".to_string()]), 0);
    }

    #[test]
    fn test_index_resolves_against_visible_list() {
        let mut service = service_with(&["Amy Bee", "Bob Choo"]);
        service.filter_by_name_keywords(&["Bob".to_string()]);
        // Visible position 1 is Bob, not Amy.
        let removed = service.remove_person(1).unwrap();
        assert_eq!(removed.name().as_str(), "Bob Choo");
        assert_eq!(service.book().len(), 1);
        // Mutation resets the view to the full list.
        assert_eq!(service.visible_count(), 1);
    }

    #[test]
    fn test_filter_by_field_substring() {
        let mut service = service_with(&["Amy Bee", "Bob Choo"]);
        assert_eq!(service.filter_by_field(SearchField::Phone, "90000001"), 1);
        assert_eq!(service.filter_by_field(SearchField::Email, "AMY@"), 1);
        assert_eq!(service.filter_by_field(SearchField::DeviceInfo, "device"), 2);
    }

    #[test]
    fn test_filter_by_status() {
        let mut service = service_with(&["Amy Bee"]);
        assert_eq!(service.filter_by_status(Status::Active), 0);
        assert_eq!(service.filter_by_status(Status::None), 1);
    }

    #[test]
    fn test_import_skips_duplicates() {
        let mut service = service_with(&["Amy Bee"]);
        let incoming = vec![
            PersonBuilder::new().build().unwrap(), // duplicate of Amy
            PersonBuilder::new().with_name("Bob Choo").build().unwrap(),
        ];
        let (added, skipped) = service.import(incoming);
        assert_eq!((added, skipped), (1, 1));
        assert_eq!(service.book().len(), 2);
    }

    #[test]
    fn test_invalid_index_errors() {
        let mut service = service_with(&["Amy Bee"]);
        assert_eq!(service.remove_person(5), Err(CommandError::InvalidIndex));
        assert_eq!(service.remove_person(0), Err(CommandError::InvalidIndex));
    }
}
