//! Domain layer: the org chart, its move engine and its history
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod employee;
pub mod error;
pub mod history;
mod lookup;
mod moves;
pub mod org_tree;

pub use arena::{OrgArena, OrgNode};
pub use employee::{Employee, EmployeeData, EmployeeId};
pub use error::{DomainError, DomainResult};
pub use history::History;
pub use org_tree::OrgTree;
