//! Step scripts: replaying moves, undos and redos against a chart.
//!
//! Step syntax: `move:<employee>:<supervisor>`, `undo`, `redo`.

use std::fmt;
use std::str::FromStr;

use tracing::{info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{EmployeeId, OrgTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move {
        employee: EmployeeId,
        supervisor: EmployeeId,
    },
    Undo,
    Redo,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Move {
                employee,
                supervisor,
            } => write!(f, "move:{employee}:{supervisor}"),
            Step::Undo => write!(f, "undo"),
            Step::Redo => write!(f, "redo"),
        }
    }
}

impl FromStr for Step {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ApplicationError::InvalidStep {
            step: s.to_string(),
            reason: reason.to_string(),
        };
        let parse_id = |raw: &str| {
            raw.parse::<EmployeeId>()
                .map_err(|e| invalid(&format!("bad employee id '{raw}': {e}")))
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [op] if op.eq_ignore_ascii_case("undo") => Ok(Step::Undo),
            [op] if op.eq_ignore_ascii_case("redo") => Ok(Step::Redo),
            [op, employee, supervisor] if op.eq_ignore_ascii_case("move") => Ok(Step::Move {
                employee: parse_id(employee)?,
                supervisor: parse_id(supervisor)?,
            }),
            [op, ..] if op.eq_ignore_ascii_case("move") => {
                Err(invalid("expected move:<employee>:<supervisor>"))
            }
            _ => Err(invalid("expected move, undo or redo")),
        }
    }
}

/// What a step did to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    /// False for undo/redo at the edge of the history
    pub changed: bool,
}

/// Apply `steps` in order, stopping at the first failing move.
#[instrument(level = "debug", skip(org))]
pub fn apply_steps(org: &mut OrgTree, steps: &[Step]) -> ApplicationResult<Vec<StepOutcome>> {
    let mut outcomes = Vec::with_capacity(steps.len());
    for &step in steps {
        let changed = match step {
            Step::Move {
                employee,
                supervisor,
            } => {
                org.move_employee(employee, supervisor)?;
                true
            }
            Step::Undo => org.undo(),
            Step::Redo => org.redo(),
        };
        if changed {
            info!(%step, "applied");
        } else {
            warn!(%step, "nothing to do");
        }
        outcomes.push(StepOutcome { step, changed });
    }
    Ok(outcomes)
}
