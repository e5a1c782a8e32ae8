//! Command handlers organized by entity.
//!
//! | Module | Commands | Registry area |
//! |--------|----------|---------------|
//! | `member` | 5 | Member lifecycle |
//! | `project` | 6 | Project lifecycle |
//! | `association` | 3 | Links and funding distribution |

pub mod association;
pub mod member;
pub mod project;
