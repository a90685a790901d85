//! Arena-backed rooted tree with per-branch mutation annotations.
//!
//! Nodes live in a flat `Vec` and reference each other by index, so every
//! traversal is an explicit-stack walk over integer ids. Input trees run to
//! millions of nodes; recursive formulations would exhaust the stack, so none
//! of the operations here recurse.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use crate::mutation::{AaMutation, NucMutation};

pub type NodeId = usize;

/// A single tree node. Fields filled in by later pipeline stages (layout
/// coordinates, amino-acid mutations, tip counts) start at their defaults.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub label: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// This branch's own nucleotide substitutions, in input order.
    pub nuc_mutations: Vec<NucMutation>,
    /// Derived amino-acid substitutions for this branch.
    pub aa_mutations: Vec<AaMutation>,
    /// Defaults to the count of own nucleotide mutations.
    pub branch_length: f64,
    /// Branch length on the time axis, when a time tree was estimated.
    pub time_length: f64,
    /// Leaf count under this node (1 for a leaf).
    pub num_tips: usize,
    pub x_dist: f64,
    pub x_time: f64,
    pub y: f64,
    /// Clade annotations keyed by annotation type, e.g. "pango" -> "BA.2".
    pub clades: BTreeMap<String, String>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Creates a tree consisting of a single unlabelled root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            root: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes ever allocated, including any that a later
    /// stage detached. Only meaningful against the input arrays right after
    /// decoding, before expansion or shearing touch the topology.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: Some(parent),
            ..Node::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Unlinks `child` from `parent`. The child's subtree stays allocated in
    /// the arena but becomes unreachable from the root.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.retain(|&c| c != child);
        self.nodes[child].parent = None;
    }

    /// Nodes reachable from the root, parents before children, siblings left
    /// to right.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.nodes[id].children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// Nodes reachable from the root, children before parents.
    pub fn postorder(&self) -> Vec<NodeId> {
        // Preorder with children pushed left-to-right visits right subtrees
        // first; reversing that gives a left-to-right postorder.
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.nodes[id].children.iter() {
                stack.push(child);
            }
        }
        order.reverse();
        order
    }

    /// Number of nodes reachable from the root.
    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    /// Recomputes `num_tips` bottom-up for every reachable node. Must be
    /// rerun after any topology change before a stage that reads tip counts.
    pub fn assign_num_tips(&mut self) {
        for id in self.postorder() {
            let tips = if self.nodes[id].is_leaf() {
                1
            } else {
                self.nodes[id]
                    .children
                    .iter()
                    .map(|&c| self.nodes[c].num_tips)
                    .sum()
            };
            self.nodes[id].num_tips = tips;
        }
    }

    /// Serializes the reachable tree as a newick string with branch lengths,
    /// as consumed by the external time-tree estimator.
    pub fn to_newick(&self) -> String {
        enum Step {
            Enter(NodeId),
            Close(NodeId),
            Sibling,
        }

        let mut out = String::new();
        let mut stack = vec![Step::Enter(self.root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    let node = &self.nodes[id];
                    if node.is_leaf() {
                        out.push_str(&node.label);
                        out.push(':');
                        out.push_str(&node.branch_length.to_string());
                    } else {
                        out.push('(');
                        stack.push(Step::Close(id));
                        for (i, &child) in node.children.iter().enumerate().rev() {
                            stack.push(Step::Enter(child));
                            if i > 0 {
                                stack.push(Step::Sibling);
                            }
                        }
                    }
                }
                Step::Close(id) => {
                    let node = &self.nodes[id];
                    out.push(')');
                    out.push_str(&node.label);
                    out.push(':');
                    out.push_str(&node.branch_length.to_string());
                }
                Step::Sibling => out.push(','),
            }
        }
        out.push(';');
        out
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root -> (a -> (a1, a2), b)
    fn sample_tree() -> (Tree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let a = tree.add_child(tree.root());
        let a1 = tree.add_child(a);
        let a2 = tree.add_child(a);
        let b = tree.add_child(tree.root());
        (tree, a, a1, a2, b)
    }

    #[test]
    fn preorder_is_parent_first_left_to_right() {
        let (tree, a, a1, a2, b) = sample_tree();
        assert_eq!(tree.preorder(), vec![tree.root(), a, a1, a2, b]);
    }

    #[test]
    fn postorder_is_children_first() {
        let (tree, a, a1, a2, b) = sample_tree();
        assert_eq!(tree.postorder(), vec![a1, a2, a, b, tree.root()]);
    }

    #[test]
    fn num_tips_counts_leaves() {
        let (mut tree, a, a1, a2, b) = sample_tree();
        tree.assign_num_tips();
        assert_eq!(tree[tree.root()].num_tips, 3);
        assert_eq!(tree[a].num_tips, 2);
        assert_eq!(tree[a1].num_tips, 1);
        assert_eq!(tree[a2].num_tips, 1);
        assert_eq!(tree[b].num_tips, 1);
    }

    #[test]
    fn detach_hides_subtree() {
        let (mut tree, a, _a1, _a2, b) = sample_tree();
        tree.detach(tree.root(), a);
        tree.assign_num_tips();
        assert_eq!(tree.preorder(), vec![tree.root(), b]);
        assert_eq!(tree[tree.root()].num_tips, 1);
    }

    #[test]
    fn newick_writer_emits_lengths_and_labels() {
        let (mut tree, a, a1, a2, b) = sample_tree();
        tree[a].label = "A".into();
        tree[a1].label = "A1".into();
        tree[a2].label = "A2".into();
        tree[b].label = "B".into();
        tree[a1].branch_length = 2.0;
        assert_eq!(tree.to_newick(), "((A1:2,A2:0)A:0,B:0):0;");
    }
}
