//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod entry;
pub mod validation;

pub use entry::EntryTitle;
pub use validation::ValidationError;
