//! Reconstitutes condensed leaves.
//!
//! UShER collapses leaves that are mutation-identical to a representative
//! into a single node plus a side list of the represented labels. Expansion
//! gives each represented sample back its own leaf: the new leaves take the
//! representative's mutation list and clade annotations, attach to the
//! representative's former parent, and the representative itself is removed.

use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::tree::Tree;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Expands every leaf whose label appears in `groups`. Returns the number of
/// representatives expanded.
///
/// By construction a representative carries no mutations of its own (they
/// live on its branch's ancestry). Production trees occasionally violate
/// this; that is a warning unless `validate` is set, in which case it is
/// treated as corrupt input.
pub fn expand_condensed_nodes(
    tree: &mut Tree,
    groups: &HashMap<String, Vec<String>>,
    validate: bool,
) -> Result<usize> {
    let progress = ProgressBarBuilder::new("Expanding condensed nodes")
        .with_tick()
        .build()?;

    let mut expanded = 0;
    for id in tree.preorder() {
        if !tree[id].is_leaf() || tree[id].label.is_empty() {
            continue;
        }
        let Some(labels) = groups.get(&tree[id].label) else {
            continue;
        };

        if !tree[id].nuc_mutations.is_empty() {
            let message = format!(
                "condensed representative {} carries {} of its own mutations",
                tree[id].label,
                tree[id].nuc_mutations.len()
            );
            if validate {
                bail!("{message}");
            }
            progress.println(format!("Warning: {message}"));
        }

        let Some(parent) = tree[id].parent else {
            // A condensed root has nowhere to attach siblings; leave it be.
            progress.println(format!(
                "Warning: condensed representative {} is the root; skipping",
                tree[id].label
            ));
            continue;
        };

        let inherited_muts = tree[id].nuc_mutations.clone();
        let inherited_clades = tree[id].clades.clone();
        for label in labels {
            let leaf = tree.add_child(parent);
            tree[leaf].label = label.clone();
            tree[leaf].nuc_mutations = inherited_muts.clone();
            tree[leaf].clades = inherited_clades.clone();
            tree[leaf].branch_length = inherited_muts.len() as f64;
        }
        tree.detach(parent, id);
        expanded += 1;
    }

    progress.finish_with_message(format!("Expanded {expanded} condensed nodes"));
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::NucMutation;

    fn leaf_count(tree: &Tree) -> usize {
        tree.preorder()
            .into_iter()
            .filter(|&id| tree[id].is_leaf())
            .count()
    }

    #[test]
    fn expansion_conserves_mass() {
        let mut tree = Tree::new();
        let rep = tree.add_child(tree.root());
        tree[rep].label = "node_1_condensed_3_leaves".into();
        let other = tree.add_child(tree.root());
        tree[other].label = "plain".into();

        let groups = HashMap::from([(
            "node_1_condensed_3_leaves".to_string(),
            vec!["s1".to_string(), "s2".to_string(), "s3".to_string()],
        )]);

        let before = leaf_count(&tree);
        let expanded = expand_condensed_nodes(&mut tree, &groups, false).unwrap();
        assert_eq!(expanded, 1);
        // before - representatives + total condensed labels
        assert_eq!(leaf_count(&tree), before - 1 + 3);

        let labels: Vec<String> = tree
            .preorder()
            .into_iter()
            .filter(|&id| tree[id].is_leaf())
            .map(|id| tree[id].label.clone())
            .collect();
        assert_eq!(labels, vec!["plain", "s1", "s2", "s3"]);
    }

    #[test]
    fn new_leaves_inherit_mutations_and_clades() {
        let mut tree = Tree::new();
        let rep = tree.add_child(tree.root());
        tree[rep].label = "rep".into();
        tree[rep].nuc_mutations =
            vec![NucMutation { chrom: 0, position: 7, par_nuc: b'A', mut_nuc: b'G' }];
        tree[rep].clades.insert("pango".into(), "BA.2".into());

        let groups = HashMap::from([("rep".to_string(), vec!["s1".to_string()])]);
        expand_condensed_nodes(&mut tree, &groups, false).unwrap();

        let leaf = tree
            .preorder()
            .into_iter()
            .find(|&id| tree[id].label == "s1")
            .unwrap();
        assert_eq!(tree[leaf].nuc_mutations.len(), 1);
        assert_eq!(tree[leaf].branch_length, 1.0);
        assert_eq!(tree[leaf].clades.get("pango").unwrap(), "BA.2");
    }

    #[test]
    fn validate_mode_rejects_mutated_representative() {
        let mut tree = Tree::new();
        let rep = tree.add_child(tree.root());
        tree[rep].label = "rep".into();
        tree[rep].nuc_mutations =
            vec![NucMutation { chrom: 0, position: 7, par_nuc: b'A', mut_nuc: b'G' }];
        tree.add_child(tree.root());

        let groups = HashMap::from([("rep".to_string(), vec!["s1".to_string()])]);
        assert!(expand_condensed_nodes(&mut tree, &groups, true).is_err());
        assert!(expand_condensed_nodes(&mut tree, &groups, false).is_ok());
    }
}
