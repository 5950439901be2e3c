//! Shared fixtures for integration tests.

use staffbook::models::{AddressBook, Person, PersonBuilder};
use staffbook::services::AddressBookService;

/// The default builder person.
pub fn amy() -> Person {
    PersonBuilder::new().build().unwrap()
}

#[allow(dead_code)]
pub fn bob() -> Person {
    PersonBuilder::new()
        .with_name("Bob Choo")
        .with_phone("91234567")
        .with_email("bob@example.com")
        .with_org_id("0000000777")
        .with_device_info("Tablet-7")
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn carl_active() -> Person {
    PersonBuilder::new()
        .with_name("Carl Kurz")
        .with_phone("95352563")
        .with_email("heinz@example.com")
        .with_status("active")
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn service_with(persons: Vec<Person>) -> AddressBookService {
    let mut book = AddressBook::new();
    for person in persons {
        book.add_person(person);
    }
    AddressBookService::new(book)
}
