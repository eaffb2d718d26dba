//! # inputset-core
//!
//! Core types shared across the InputSet crates: the document/batch data
//! model, the well-known metadata field names, and the error enums returned
//! by store construction and input resolution.

pub mod batch;
pub mod document;
pub mod error;

pub use batch::Batch;
pub use document::{Document, INPUT_KEY, INPUT_OPTIONAL};
pub use error::{InputError, StoreError};
