//! orgtree: a single-rooted organization chart with reparenting moves and
//! linear undo/redo.
//!
//! ```
//! use orgtree::domain::{Employee, EmployeeId, OrgTree};
//!
//! let chart = Employee::new(1, "Ceo").with_subordinates(vec![
//!     Employee::new(2, "Lead").with_subordinates(vec![Employee::new(3, "Dev")]),
//!     Employee::new(4, "Ops"),
//! ]);
//! let mut org = OrgTree::new(chart.clone()).unwrap();
//!
//! org.move_employee(EmployeeId(2), EmployeeId(4)).unwrap();
//! assert_eq!(org.supervisor_of(EmployeeId(3)), Some(EmployeeId(1)));
//!
//! org.undo();
//! assert_eq!(org.ceo(), chart);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
