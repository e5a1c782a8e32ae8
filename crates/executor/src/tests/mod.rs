//! Test modules for the executor crate.

pub mod execute_many;
pub mod serialization;
