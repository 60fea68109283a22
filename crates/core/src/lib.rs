//! Domain types, errors and validation rules shared by the store and API crates.

pub mod error;
pub mod storyboard;
pub mod types;
