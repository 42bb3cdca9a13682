//! # Contactbook Architecture
//!
//! Contactbook is a personal assistant for contacts: names, phone numbers,
//! emails, addresses, birthdays and tagged notes. The library holds all of the
//! behaviour; the binary is one interactive client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, prints results, handles exit codes  │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session's book       │
//! │  - Supplies today's date and settings                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over &mut AddressBook                     │
//! │  - Returns structured CmdResult values, no I/O              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-book load and save                │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain types sit beside the layers and are used by all of them:
//! validated field values in [`fields`], [`model::Record`] and
//! [`model::Note`] in [`model`], the [`book::AddressBook`] collection and the
//! birthday calendar in [`birthdays`].
//!
//! ## Validation
//!
//! Field values are checked when they are constructed, and again when a book
//! is read back from disk. An operation that fails validation leaves the book
//! exactly as it was.
//!
//! ## Testing
//!
//! 1. **Domain and commands**: unit tests next to the code, with fixed dates.
//! 2. **API**: dispatch and persistence timing against `InMemoryStore`.
//! 3. **CLI**: line parsing unit tests, plus end-to-end runs of the binary in
//!    `tests/`.

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
