//! gradebook-core — Student records, roster persistence, and reporting.
//!
//! This crate defines the record model, the line-oriented file codec, and
//! the roster store that the gradebook CLI builds on.

pub mod codec;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
