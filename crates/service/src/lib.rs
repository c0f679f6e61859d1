//! Destination store for wanderlist
//!
//! Owns the canonical destination list, persists a full snapshot on every
//! mutation, and exposes the operations the presentation layer calls.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod destination_store;
mod error;

pub use destination_store::{BulkAddReport, DestinationStore};
pub use error::StoreError;
