//! Arena-backed storage for the live org chart.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::{Employee, EmployeeData, EmployeeId};

/// Tree node in the arena-based hierarchy.
#[derive(Debug, Clone)]
pub struct OrgNode {
    /// Employee payload for this node
    pub data: EmployeeData,
    /// Indices of direct reports, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based org chart.
///
/// Nodes are never removed from the arena, only relinked, so the root and
/// every index stored in a `children` list stay valid for the arena's lifetime.
/// Parents are not stored; see [`OrgArena::find_parent`].
#[derive(Debug, Clone)]
pub struct OrgArena {
    arena: Arena<OrgNode>,
    root: Index,
}

impl OrgArena {
    /// Builds the arena from a value tree, rejecting repeated ids.
    #[instrument(level = "debug", skip(root), fields(root = %root.id))]
    pub fn from_employee(root: &Employee) -> DomainResult<Self> {
        let mut arena = Arena::with_capacity(root.headcount());
        let mut seen = HashSet::new();
        let mut root_idx = None;
        let mut stack: Vec<(&Employee, Option<Index>)> = vec![(root, None)];

        while let Some((employee, parent_idx)) = stack.pop() {
            if !seen.insert(employee.id) {
                return Err(DomainError::DuplicateId(employee.id));
            }

            let node_idx = arena.insert(OrgNode {
                data: EmployeeData {
                    id: employee.id,
                    name: employee.name.clone(),
                },
                children: Vec::with_capacity(employee.subordinates.len()),
            });

            match parent_idx {
                Some(parent_idx) => {
                    if let Some(parent) = arena.get_mut(parent_idx) {
                        parent.children.push(node_idx);
                    }
                }
                None => root_idx = Some(node_idx),
            }

            // Push in reverse so siblings are linked left to right
            for child in employee.subordinates.iter().rev() {
                stack.push((child, Some(node_idx)));
            }
        }

        // The root is always the first node popped
        let root = root_idx.ok_or(DomainError::EmployeeNotFound(root.id))?;
        Ok(Self { arena, root })
    }

    /// Materializes the whole chart as a value tree.
    pub fn to_employee(&self) -> Employee {
        self.build_employee(self.root)
    }

    /// Materializes the subtree rooted at `idx`.
    pub fn subtree(&self, idx: Index) -> Option<Employee> {
        self.arena.contains(idx).then(|| self.build_employee(idx))
    }

    fn build_employee(&self, idx: Index) -> Employee {
        let node = &self.arena[idx];
        Employee {
            id: node.data.id,
            name: node.data.name.clone(),
            subordinates: node
                .children
                .iter()
                .map(|&child| self.build_employee(child))
                .collect(),
        }
    }

    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut OrgNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_id(&self) -> EmployeeId {
        self.arena[self.root].data.id
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal: a node before its reports, reports left to right.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Number of management levels, the root alone counting as one.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Ids of employees without reports, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_ids(&self) -> Vec<EmployeeId> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.id)
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a OrgArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a OrgArena) -> Self {
        Self {
            arena,
            stack: vec![arena.root()],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a OrgNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
