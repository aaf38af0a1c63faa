//! Id and parent lookups over the arena.
//!
//! Both searches walk the live tree on every call; nothing is cached, so the
//! answers always reflect the current structure after moves and undo/redo.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::OrgArena;
use crate::domain::EmployeeId;

impl OrgArena {
    /// Depth-first search for `id`, root first, reports left to right.
    ///
    /// A chart whose root has no reports only ever matches the root's own id.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, id: EmployeeId) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.data.id == id)
            .map(|(idx, _)| idx)
    }

    /// Finds the direct supervisor of `id`.
    ///
    /// Each visited node scans its own reports before the search descends into
    /// them. The root is returned for its own direct reports, so those can be
    /// moved like anyone else. Returns `None` for the root and for unknown ids.
    #[instrument(level = "trace", skip(self))]
    pub fn find_parent(&self, id: EmployeeId) -> Option<Index> {
        self.find_parent_from(self.root(), id)
    }

    fn find_parent_from(&self, node_idx: Index, id: EmployeeId) -> Option<Index> {
        let node = self.get_node(node_idx)?;

        let is_parent = node.children.iter().any(|&child| {
            self.get_node(child)
                .is_some_and(|child| child.data.id == id)
        });
        if is_parent {
            return Some(node_idx);
        }

        node.children
            .iter()
            .find_map(|&child| self.find_parent_from(child, id))
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.find(id).is_some()
    }
}
