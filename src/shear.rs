//! Prunes branches that are vanishingly small next to a sibling.
//!
//! A leaf (or tiny clade) sitting beside a sibling with a thousand times the
//! descendants is overwhelmingly likely to be a sequencing artifact. Shearing
//! removes such branches and then repairs the topology: parents emptied by a
//! prune are pruned in turn, and a parent left with a single child is merged
//! into that child and spliced out.

use std::collections::HashSet;

use anyhow::Result;

use crate::tree::{NodeId, Tree};
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Prunes every child whose largest sibling has more than `threshold` times
/// its tip count. Requires `num_tips` to be current on entry; recomputes it
/// for the whole tree before returning. Returns the number of pruned
/// children.
pub fn shear(tree: &mut Tree, threshold: f64) -> Result<usize> {
    let progress = ProgressBarBuilder::new("Shearing small branches")
        .with_tick()
        .build()?;

    let mut pruned = 0;
    for id in tree.postorder() {
        if tree[id].children.len() < 2 {
            continue;
        }
        let biggest = tree[id]
            .children
            .iter()
            .map(|&c| tree[c].num_tips)
            .max()
            .unwrap_or(0) as f64;

        let to_prune: Vec<NodeId> = tree[id]
            .children
            .iter()
            .copied()
            .filter(|&c| biggest / tree[c].num_tips as f64 > threshold)
            .collect();
        if to_prune.is_empty() {
            continue;
        }

        for child in to_prune {
            tree.detach(id, child);
            pruned += 1;
        }
        repair_upwards(tree, id);
    }

    tree.assign_num_tips();
    progress.finish_with_message(format!("Sheared {pruned} branches"));
    Ok(pruned)
}

/// Repairs the ancestor chain after pruning children of `node`: removes
/// emptied nodes and splices out single-child nodes, merging their private
/// mutations and clade annotations into the surviving child. Each step
/// removes a node, so the walk terminates on any finite tree.
fn repair_upwards(tree: &mut Tree, mut node: NodeId) {
    loop {
        if node == tree.root() {
            return;
        }
        let Some(parent) = tree[node].parent else {
            // Already detached along with a pruned subtree.
            return;
        };
        match tree[node].children.len() {
            0 => {
                tree.detach(parent, node);
                node = parent;
            }
            1 => {
                let child = tree[node].children[0];
                merge_into(tree, node, child);

                // Splice the child into the grandparent at the node's slot.
                if let Some(slot) = tree[parent].children.iter().position(|&c| c == node) {
                    tree[parent].children[slot] = child;
                }
                tree[child].parent = Some(parent);
                tree[node].parent = None;
                tree[node].children.clear();
                node = parent;
            }
            _ => return,
        }
    }
}

/// Folds a spliced-out node's own mutations and clade annotations into its
/// sole surviving child, without overriding the child's private state.
fn merge_into(tree: &mut Tree, node: NodeId, child: NodeId) {
    let existing: HashSet<u32> = tree[child]
        .nuc_mutations
        .iter()
        .map(|m| m.position)
        .collect();
    let inherited: Vec<_> = tree[node]
        .nuc_mutations
        .iter()
        .copied()
        .filter(|m| !existing.contains(&m.position))
        .collect();
    tree[child].nuc_mutations.extend(inherited);
    tree[child].branch_length = tree[child].nuc_mutations.len() as f64;

    let clades = std::mem::take(&mut tree[node].clades);
    for (key, value) in clades {
        tree[child].clades.entry(key).or_insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::NucMutation;

    fn nuc(position: u32, par: u8, mutated: u8) -> NucMutation {
        NucMutation { chrom: 0, position, par_nuc: par, mut_nuc: mutated }
    }

    /// root -> (big with n leaves, small leaf)
    fn lopsided_tree(n: usize) -> (Tree, NodeId, NodeId) {
        let mut tree = Tree::new();
        let big = tree.add_child(tree.root());
        for i in 0..n {
            let leaf = tree.add_child(big);
            tree[leaf].label = format!("b{i}");
        }
        let small = tree.add_child(tree.root());
        tree[small].label = "tiny".into();
        tree.assign_num_tips();
        (tree, big, small)
    }

    #[test]
    fn ratio_at_or_below_threshold_is_kept() {
        let (mut tree, _, small) = lopsided_tree(5);
        let pruned = shear(&mut tree, 5.0).unwrap();
        assert_eq!(pruned, 0);
        assert!(tree.preorder().contains(&small));
    }

    #[test]
    fn ratio_above_threshold_is_pruned_and_parent_spliced() {
        let (mut tree, big, small) = lopsided_tree(5);
        tree[big].nuc_mutations = vec![nuc(3, b'G', b'C')];
        let pruned = shear(&mut tree, 4.0).unwrap();
        assert_eq!(pruned, 1);
        let order = tree.preorder();
        assert!(!order.contains(&small));
        // The root was left with only `big`; big's children were spliced up
        // is not expected here: root keeps its single child untouched.
        assert_eq!(tree[tree.root()].num_tips, 5);
        assert!(order.contains(&big));
    }

    #[test]
    fn emptied_parents_are_pruned_recursively() {
        // root -> (wide with 3 leaves, chain -> chain2 -> leaf)
        let mut tree = Tree::new();
        let wide = tree.add_child(tree.root());
        for _ in 0..3 {
            tree.add_child(wide);
        }
        let chain = tree.add_child(tree.root());
        let chain2 = tree.add_child(chain);
        let leaf = tree.add_child(chain2);
        tree.assign_num_tips();

        // With threshold 2, the lone leaf (ratio 3/1) goes; its emptied
        // ancestors chain2 and chain must go with it.
        let pruned = shear(&mut tree, 2.0).unwrap();
        assert_eq!(pruned, 1);
        let order = tree.preorder();
        assert!(!order.contains(&leaf));
        assert!(!order.contains(&chain2));
        assert!(!order.contains(&chain));
        assert_eq!(tree[tree.root()].num_tips, 3);
    }

    #[test]
    fn splice_merges_private_mutations_without_overriding() {
        // root -> (wide with 3 leaves, mid -> (survivor, doomed))
        let mut tree = Tree::new();
        let wide = tree.add_child(tree.root());
        for _ in 0..3 {
            tree.add_child(wide);
        }
        let mid = tree.add_child(tree.root());
        tree[mid].nuc_mutations = vec![nuc(5, b'A', b'G'), nuc(9, b'C', b'T')];
        let survivor = tree.add_child(mid);
        let s1 = tree.add_child(survivor);
        let s2 = tree.add_child(survivor);
        tree[s1].label = "s1".into();
        tree[s2].label = "s2".into();
        tree[survivor].nuc_mutations = vec![nuc(5, b'A', b'T')];
        let doomed = tree.add_child(mid);
        tree[doomed].label = "doomed".into();
        tree.assign_num_tips();

        // survivor has 2 tips vs doomed's 1; with threshold 1.5 doomed goes,
        // then mid (single child) merges into survivor and is spliced out.
        let pruned = shear(&mut tree, 1.5).unwrap();
        assert_eq!(pruned, 1);
        let order = tree.preorder();
        assert!(!order.contains(&mid));
        assert!(!order.contains(&doomed));
        assert_eq!(tree[survivor].parent, Some(tree.root()));
        // Position 5 keeps the survivor's own value; position 9 is merged in.
        let muts = &tree[survivor].nuc_mutations;
        assert_eq!(muts.len(), 2);
        assert!(muts.contains(&nuc(5, b'A', b'T')));
        assert!(muts.contains(&nuc(9, b'C', b'T')));
        assert_eq!(tree[survivor].branch_length, 2.0);
    }

    #[test]
    fn pruned_count_is_exact_across_cascading_prunes() {
        // root -> (wide with 9 leaves, mid -> (sub with 4 leaves, tiny)).
        // Visiting mid prunes tiny and splices mid out; visiting root then
        // prunes sub (9/4 > 2). Exactly two prunes, each on a branch that is
        // still attached when its parent is processed.
        let mut tree = Tree::new();
        let wide = tree.add_child(tree.root());
        for i in 0..9 {
            let leaf = tree.add_child(wide);
            tree[leaf].label = format!("w{i}");
        }
        let mid = tree.add_child(tree.root());
        let sub = tree.add_child(mid);
        for i in 0..4 {
            let leaf = tree.add_child(sub);
            tree[leaf].label = format!("v{i}");
        }
        let tiny = tree.add_child(mid);
        tree[tiny].label = "tiny".into();
        tree.assign_num_tips();

        let pruned = shear(&mut tree, 2.0).unwrap();
        assert_eq!(pruned, 2);
        let order = tree.preorder();
        assert!(!order.contains(&tiny));
        assert!(!order.contains(&sub));
        assert!(!order.contains(&mid));
        assert_eq!(tree[tree.root()].num_tips, 9);
    }

    #[test]
    fn degenerate_threshold_terminates() {
        // threshold 1 prunes aggressively but must not loop forever.
        let mut tree = Tree::new();
        let mut cur = tree.root();
        for depth in 0..6 {
            let inner = tree.add_child(cur);
            for i in 0..3 {
                let leaf = tree.add_child(cur);
                tree[leaf].label = format!("d{depth}_{i}");
            }
            cur = inner;
        }
        tree.add_child(cur);
        tree.assign_num_tips();
        shear(&mut tree, 1.0).unwrap();
        tree.assign_num_tips();
        assert!(tree.node_count() >= 1);
    }
}
