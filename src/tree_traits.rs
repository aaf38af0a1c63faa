//! Conversion of org charts into printable `termtree` trees.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Employee, OrgArena, OrgTree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Employee {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .subordinates
            .iter()
            .map(|s| s.to_tree_string())
            .collect();

        Tree::new(format!("{} ({})", self.name, self.id)).with_leaves(leaves)
    }
}

impl TreeNodeConvert for OrgArena {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &OrgArena, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = arena.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = arena.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.data.to_string());
                        build_tree(arena, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let root_label = self
            .get_node(self.root())
            .map(|node| node.data.to_string())
            .unwrap_or_default();
        let mut tree = Tree::new(root_label);
        build_tree(self, self.root(), &mut tree);
        tree
    }
}

impl TreeNodeConvert for OrgTree {
    fn to_tree_string(&self) -> Tree<String> {
        self.arena().to_tree_string()
    }
}
