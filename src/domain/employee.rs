//! Domain entities: employees and their identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique, exact-match identifier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// An employee together with the full subtree of their reports.
///
/// This is the value form of the hierarchy: chart files deserialize into it,
/// snapshots serialize from it, and lookups hand out copies of it.
/// Field names follow the `uniqueId`/`name`/`subordinates` chart layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "uniqueId", alias = "id")]
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub subordinates: Vec<Employee>,
}

impl Employee {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            subordinates: Vec::new(),
        }
    }

    /// Builder-style helper for assembling charts in code and tests.
    pub fn with_subordinates(mut self, subordinates: Vec<Employee>) -> Self {
        self.subordinates = subordinates;
        self
    }

    /// Number of employees in this subtree, including `self`.
    pub fn headcount(&self) -> usize {
        1 + self
            .subordinates
            .iter()
            .map(Employee::headcount)
            .sum::<usize>()
    }
}

/// Payload stored per arena node: everything except the subordinate links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeData {
    pub id: EmployeeId,
    pub name: String,
}

impl fmt::Display for EmployeeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
