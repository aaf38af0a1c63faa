//! Reparenting with promotion of the mover's reports.

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::arena::OrgArena;

impl OrgArena {
    /// Relinks `employee` under `supervisor`.
    ///
    /// The employee leaves `previous_parent`, their own reports are appended to
    /// `previous_parent` in order, and the employee joins `supervisor` last and
    /// without reports. Callers resolve and validate the three indices first;
    /// `employee` must differ from `supervisor`.
    #[instrument(level = "debug", skip(self))]
    pub fn reparent(&mut self, employee: Index, previous_parent: Index, supervisor: Index) {
        let promoted = self
            .get_node_mut(employee)
            .map(|node| std::mem::take(&mut node.children))
            .unwrap_or_default();
        trace!(promoted = promoted.len(), "promoting reports");

        if let Some(parent) = self.get_node_mut(previous_parent) {
            parent.children.retain(|&child| child != employee);
            parent.children.extend(promoted);
        }

        if let Some(supervisor) = self.get_node_mut(supervisor) {
            supervisor.children.push(employee);
        }
    }
}
