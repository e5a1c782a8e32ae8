//! Registry engine for UNIAG
//!
//! This crate owns the entities defined in `uniag-core`:
//! - Registry: id-keyed maps of members and projects, the only place
//!   associations are created or removed
//! - SharedRegistry: `Arc<RwLock<Registry>>` handle for multi-threaded callers
//!
//! The engine is the only component that knows about:
//! - Id allocation (one sequence per entity kind)
//! - Keeping both sides of an association in step
//! - Cascading removal

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;
pub mod shared;

pub use registry::Registry;
pub use shared::SharedRegistry;
