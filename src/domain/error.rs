//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::EmployeeId;

/// Domain errors represent violations of the org chart rules.
/// These are independent of file and CLI concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("cannot move employee {employee} under {supervisor}: neither exists")]
    NotFound {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },

    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("supervisor not found: {0}")]
    SupervisorNotFound(EmployeeId),

    #[error("cannot move the root of the chart: {0}")]
    CannotMoveRoot(EmployeeId),

    #[error("employee cannot supervise themselves: {0}")]
    SelfSupervision(EmployeeId),

    #[error("duplicate employee id in chart: {0}")]
    DuplicateId(EmployeeId),

    #[error("snapshot failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
