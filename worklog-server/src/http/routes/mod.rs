//! Route handlers organized by resource

pub mod entries;
pub mod root;
