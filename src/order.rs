//! Deterministic node ordering and the global mutation registry.
//!
//! Everything here exists to make the output byte-reproducible: ladderization
//! and the export order use fully specified composite keys, and the registry
//! is built in two phases (collect everything, then sort once) so no index
//! ever depends on insertion or hash-iteration order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::genes::GeneModel;
use crate::mutation::{AaMutation, ChromTable, NucMutation};
use crate::tree::{NodeId, Tree};
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Direction for [`ladderize`]. Descending puts heavier subtrees first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    Ascending,
    Descending,
}

fn ladder_key(tree: &Tree, id: NodeId) -> (usize, f64, bool, &str) {
    let node = &tree[id];
    (
        node.num_tips,
        node.branch_length,
        !node.label.is_empty(),
        node.label.as_str(),
    )
}

fn compare_children(tree: &Tree, a: NodeId, b: NodeId) -> Ordering {
    let (tips_a, length_a, labelled_a, label_a) = ladder_key(tree, a);
    let (tips_b, length_b, labelled_b, label_b) = ladder_key(tree, b);
    tips_a
        .cmp(&tips_b)
        .then_with(|| length_a.total_cmp(&length_b))
        .then_with(|| labelled_a.cmp(&labelled_b))
        .then_with(|| label_a.cmp(label_b))
}

/// Sorts every node's children by (num_tips, branch_length, has-label,
/// label), bottom-up. `num_tips` must be current. The composite key leaves
/// no ties to break arbitrarily, so independent runs order identically.
pub fn ladderize(tree: &mut Tree, direction: Ladder) {
    for id in tree.postorder() {
        let mut children = std::mem::take(&mut tree[id].children);
        children.sort_by(|&a, &b| {
            let ordering = compare_children(tree, a, b);
            match direction {
                Ladder::Ascending => ordering,
                Ladder::Descending => ordering.reverse(),
            }
        });
        tree[id].children = children;
    }
}

/// The global node order for export: preorder after ladderization, stably
/// sorted by (y, x_dist, label). The sort key only matters when layout was
/// skipped or nodes share coordinates; otherwise y already agrees with it.
pub fn nodes_for_export(tree: &Tree) -> Vec<NodeId> {
    let mut order = tree.preorder();
    order.sort_by(|&a, &b| {
        tree[a]
            .y
            .total_cmp(&tree[b].y)
            .then_with(|| tree[a].x_dist.total_cmp(&tree[b].x_dist))
            .then_with(|| tree[a].label.cmp(&tree[b].label))
    });
    order
}

/// Globally deduplicated mutation catalog with stable integer indices:
/// amino-acid mutations first, nucleotide mutations after, each block in its
/// deterministic sort order.
#[derive(Debug, Default)]
pub struct MutationRegistry {
    pub aa: Vec<AaMutation>,
    pub nuc: Vec<NucMutation>,
    aa_index: HashMap<AaMutation, usize>,
    nuc_index: HashMap<NucMutation, usize>,
}

impl MutationRegistry {
    /// Collects every distinct mutation in the tree, then sorts once and
    /// assigns indices.
    pub fn build(
        tree: &Tree,
        genes: Option<&GeneModel>,
        chroms: &ChromTable,
    ) -> Result<Self> {
        let progress = ProgressBarBuilder::new("Collecting mutations")
            .with_tick()
            .build()?;

        let mut aa_set: HashSet<AaMutation> = HashSet::new();
        let mut nuc_set: HashSet<NucMutation> = HashSet::new();
        for id in tree.preorder() {
            aa_set.extend(tree[id].aa_mutations.iter().copied());
            nuc_set.extend(tree[id].nuc_mutations.iter().copied());
        }

        let mut aa: Vec<AaMutation> = aa_set.into_iter().collect();
        aa.sort_by(|a, b| {
            let name = |m: &AaMutation| match genes {
                Some(model) => model.cdses[m.gene as usize].name.as_str(),
                None => "",
            };
            name(a)
                .cmp(name(b))
                .then_with(|| a.codon.cmp(&b.codon))
                .then_with(|| a.par_aa.cmp(&b.par_aa))
                .then_with(|| a.mut_aa.cmp(&b.mut_aa))
        });

        let mut nuc: Vec<NucMutation> = nuc_set.into_iter().collect();
        nuc.sort_by(|a, b| {
            chroms
                .name(a.chrom)
                .cmp(chroms.name(b.chrom))
                .then_with(|| a.position.cmp(&b.position))
                .then_with(|| a.par_nuc.cmp(&b.par_nuc))
                .then_with(|| a.mut_nuc.cmp(&b.mut_nuc))
        });

        let aa_index = aa.iter().enumerate().map(|(i, &m)| (m, i)).collect();
        let offset = aa.len();
        let nuc_index = nuc
            .iter()
            .enumerate()
            .map(|(i, &m)| (m, offset + i))
            .collect();

        progress.finish_with_message(format!(
            "Collected {} amino-acid and {} nucleotide mutations",
            aa.len(),
            nuc.len()
        ));
        Ok(Self { aa, nuc, aa_index, nuc_index })
    }

    pub fn len(&self) -> usize {
        self.aa.len() + self.nuc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aa.is_empty() && self.nuc.is_empty()
    }

    pub fn aa_index(&self, mutation: &AaMutation) -> Option<usize> {
        self.aa_index.get(mutation).copied()
    }

    pub fn nuc_index(&self, mutation: &NucMutation) -> Option<usize> {
        self.nuc_index.get(mutation).copied()
    }
}
