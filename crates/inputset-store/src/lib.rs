//! # inputset-store
//!
//! The input store: decodes a document batch once from a byte stream, then
//! exposes keyed lookup (required and optional variants), generic typed
//! decoding, and full enumeration.
//!
//! The public entry point is [`InputStore`].

pub mod codec;
pub mod store;

pub use codec::BatchFormat;
pub use store::InputStore;
