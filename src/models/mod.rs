//! Data models for the address book.
//!
//! This module contains the `Person` aggregate, its builder, and the
//! `AddressBook` collection they live in.

pub mod address_book;
pub mod person;

pub use address_book::AddressBook;
pub use person::{Person, PersonBuilder};
