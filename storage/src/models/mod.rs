//! Row models for the catalog tables.

mod part;

pub use part::Part;
