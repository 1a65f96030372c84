//! Core types and trait definitions for the roster people service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod memory;
pub mod person;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use person::{NewPerson, Person, PersonId};
pub use service::{PersonService, Upsert};
pub use store::PersonStore;
