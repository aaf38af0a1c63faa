//! The org chart facade: live tree, move engine and undo/redo.

use tracing::{debug, error, info, instrument};

use crate::domain::arena::OrgArena;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::history::History;
use crate::domain::{Employee, EmployeeData, EmployeeId};

/// A single-rooted organization chart with reversible moves.
///
/// The initial chart is snapshot 0 of the history; every successful
/// [`OrgTree::move_employee`] commits one more snapshot.
#[derive(Debug, Clone)]
pub struct OrgTree {
    tree: OrgArena,
    history: History,
}

impl OrgTree {
    /// Takes `root` as the initial chart. Fails if an id occurs twice.
    #[instrument(level = "debug", skip(root), fields(ceo = %root.id))]
    pub fn new(root: Employee) -> DomainResult<Self> {
        let tree = OrgArena::from_employee(&root)?;
        let history = History::new(&root)?;
        info!(employees = tree.len(), "org chart loaded");
        Ok(Self { tree, history })
    }

    /// The current chart, materialized from the root down.
    pub fn ceo(&self) -> Employee {
        self.tree.to_employee()
    }

    pub fn ceo_id(&self) -> EmployeeId {
        self.tree.root_id()
    }

    /// A copy of the employee's current subtree.
    pub fn get(&self, id: EmployeeId) -> Option<Employee> {
        self.tree.find(id).and_then(|idx| self.tree.subtree(idx))
    }

    /// Live access to an employee's own fields.
    ///
    /// Edits made here are not recorded: the next `undo` or `redo` replaces the
    /// chart with a snapshot and discards them.
    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut EmployeeData> {
        let idx = self.tree.find(id)?;
        self.tree.get_node_mut(idx).map(|node| &mut node.data)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.tree.contains(id)
    }

    /// Id of the employee's direct supervisor; `None` for the root or unknown ids.
    pub fn supervisor_of(&self, id: EmployeeId) -> Option<EmployeeId> {
        self.tree
            .find_parent(id)
            .and_then(|idx| self.tree.get_node(idx))
            .map(|node| node.data.id)
    }

    /// Employees in pre-order.
    pub fn employees(&self) -> impl Iterator<Item = &EmployeeData> + '_ {
        self.tree.iter().map(|(_, node)| &node.data)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn leaf_ids(&self) -> Vec<EmployeeId> {
        self.tree.leaf_ids()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn arena(&self) -> &OrgArena {
        &self.tree
    }

    /// Moves `employee_id` under `supervisor_id`.
    ///
    /// The employee's own reports stay behind and become reports of the
    /// employee's former supervisor. All checks run before the chart is
    /// touched, so a failed move leaves chart and history unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn move_employee(
        &mut self,
        employee_id: EmployeeId,
        supervisor_id: EmployeeId,
    ) -> DomainResult<()> {
        let employee = self.tree.find(employee_id);
        let supervisor = self.tree.find(supervisor_id);

        let (employee, supervisor) = match (employee, supervisor) {
            (Some(employee), Some(supervisor)) => (employee, supervisor),
            (None, None) => {
                return Err(DomainError::NotFound {
                    employee: employee_id,
                    supervisor: supervisor_id,
                })
            }
            (None, Some(_)) => return Err(DomainError::EmployeeNotFound(employee_id)),
            (Some(_), None) => return Err(DomainError::SupervisorNotFound(supervisor_id)),
        };

        if employee == supervisor {
            return Err(DomainError::SelfSupervision(employee_id));
        }
        let previous_parent = self
            .tree
            .find_parent(employee_id)
            .ok_or(DomainError::CannotMoveRoot(employee_id))?;

        // live chart is only replaced once the snapshot is recorded
        let mut moved = self.tree.clone();
        moved.reparent(employee, previous_parent, supervisor);
        self.history.record(&moved.to_employee())?;
        self.tree = moved;

        debug!(
            step = self.history.cursor(),
            snapshot_bytes = self.history.current().len(),
            "move committed"
        );
        Ok(())
    }

    /// Steps back one snapshot. Returns `false` at the earliest state.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> bool {
        match self.history.undo_target() {
            Some(target) => self.restore(target),
            None => false,
        }
    }

    /// Steps forward one snapshot. Returns `false` at the latest state.
    #[instrument(level = "debug", skip(self))]
    pub fn redo(&mut self) -> bool {
        match self.history.redo_target() {
            Some(target) => self.restore(target),
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore(&mut self, target: usize) -> bool {
        let rebuilt = self
            .history
            .restore(target)
            .map(|state| state.and_then(|employee| OrgArena::from_employee(&employee)));

        match rebuilt {
            Some(Ok(tree)) => {
                self.tree = tree;
                self.history.seek(target);
                debug!(step = target, "snapshot restored");
                true
            }
            Some(Err(e)) => {
                error!(step = target, error = %e, "snapshot could not be restored");
                false
            }
            None => false,
        }
    }
}
