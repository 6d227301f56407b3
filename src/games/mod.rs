//! Game implementations.

pub mod clash;
