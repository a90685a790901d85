//! Derives amino-acid mutations from each branch's nucleotide mutations.
//!
//! Walking from the root, every branch sees the nucleotide state accumulated
//! along its own ancestry and nothing else. Rather than copying a
//! position-to-base snapshot per branch, the walk keeps one mutable map plus
//! an undo log: entering a node applies its mutations and records what they
//! replaced, leaving the subtree reverts them. Siblings therefore never
//! observe each other's history, and the cost per branch is proportional to
//! its own mutation count.

use std::collections::{BTreeMap, HashMap, HashSet};

use indicatif::ProgressBar;

use crate::genes::GeneModel;
use crate::mutation::{AaMutation, NucMutation};
use crate::tree::{NodeId, Tree};
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Amino-acid consequences of `own` mutations, given the inherited
/// position-to-base state `state` (one-indexed positions).
///
/// Mutations landing in the same codon are resolved together: the initial
/// codon is the reference overridden by inherited state, the final codon
/// additionally overridden by this branch's own mutations, and the two are
/// translated as wholes. With `check_differences` a record is emitted only
/// when the residues differ; the synthetic root-reference pass disables the
/// check so that every reference codon is recorded.
pub fn aa_mutations_for_branch(
    state: &HashMap<u32, u8>,
    own: &[NucMutation],
    genes: &GeneModel,
    check_differences: bool,
) -> Vec<AaMutation> {
    // Key on (CDS, codon start) so the grouping order is deterministic.
    let mut by_codon: BTreeMap<(usize, usize), Vec<&NucMutation>> = BTreeMap::new();
    for mutation in own {
        let position = (mutation.position - 1) as usize;
        if let Some(cds_index) = genes.find_cds(position) {
            let codon = genes.codon_for_position(position, &genes.cdses[cds_index]);
            by_codon
                .entry((cds_index, codon.start))
                .or_default()
                .push(mutation);
        }
    }

    let mut result = Vec::new();
    for ((cds_index, _), mutations) in by_codon {
        let cds = &genes.cdses[cds_index];
        let codon =
            genes.codon_for_position((mutations[0].position - 1) as usize, cds);

        let mut initial: [u8; 3] = [0; 3];
        initial.copy_from_slice(&genes.reference[codon.start..codon.end]);
        for (offset, position) in (codon.start..codon.end).enumerate() {
            if let Some(&base) = state.get(&(position as u32 + 1)) {
                initial[offset] = base;
            }
        }

        let mut final_codon = initial;
        for mutation in &mutations {
            final_codon[mutation.position as usize - 1 - codon.start] = mutation.mut_nuc;
        }

        let par_aa = genes.translate(&initial, cds.strand);
        let mut_aa = genes.translate(&final_codon, cds.strand);
        if par_aa != mut_aa || !check_differences {
            result.push(AaMutation {
                gene: cds_index as u32,
                codon: codon.number as u32 + 1,
                par_aa,
                mut_aa,
                nuc_for_codon: codon.start as u32 + 1,
            });
        }
    }
    result
}

/// Annotates every branch of the tree with its amino-acid mutations.
pub fn annotate_aa_mutations(tree: &mut Tree, genes: &GeneModel) -> anyhow::Result<()> {
    let progress: ProgressBar = ProgressBarBuilder::new("Annotating amino acids")
        .with_total(tree.node_count() as u64)
        .build()?;

    enum Step {
        Enter(NodeId),
        Revert(usize),
    }

    let mut state: HashMap<u32, u8> = HashMap::new();
    let mut undo: Vec<(u32, Option<u8>)> = Vec::new();
    let mut stack = vec![Step::Enter(tree.root())];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                let aa =
                    aa_mutations_for_branch(&state, &tree[id].nuc_mutations, genes, true);

                let mark = undo.len();
                for mutation in &tree[id].nuc_mutations {
                    let previous = state.insert(mutation.position, mutation.mut_nuc);
                    undo.push((mutation.position, previous));
                }

                tree[id].aa_mutations = aa;
                stack.push(Step::Revert(mark));
                for &child in tree[id].children.iter().rev() {
                    stack.push(Step::Enter(child));
                }
                progress.inc(1);
            }
            Step::Revert(mark) => {
                for (position, previous) in undo.drain(mark..).rev() {
                    match previous {
                        Some(base) => state.insert(position, base),
                        None => state.remove(&position),
                    };
                }
            }
        }
    }

    progress.finish_with_message("Amino acids annotated");
    Ok(())
}

/// Replaces the root's mutation lists with synthetic records encoding the
/// whole reference: one pseudo nucleotide mutation per position (ancestral
/// base `X`) and one amino-acid record per CDS codon, emitted with
/// difference checking disabled. Consumers reconstruct the full ancestral
/// sequence from these without a separate reference channel.
///
/// With `only_variable_sites`, the records are restricted to positions that
/// vary somewhere in the tree (and, for the amino-acid records, to codons
/// containing such a position).
pub fn record_reference_on_root(
    tree: &mut Tree,
    genes: &GeneModel,
    chrom: u32,
    only_variable_sites: bool,
) {
    let variable: Option<HashSet<u32>> = if only_variable_sites {
        let mut positions = HashSet::new();
        for id in tree.preorder() {
            positions.extend(tree[id].nuc_mutations.iter().map(|m| m.position));
        }
        Some(positions)
    } else {
        None
    };

    let mut reference_muts = Vec::with_capacity(genes.reference.len());
    for (index, &base) in genes.reference.iter().enumerate() {
        let position = index as u32 + 1;
        if variable
            .as_ref()
            .map_or(true, |positions| positions.contains(&position))
        {
            reference_muts.push(NucMutation {
                chrom,
                position,
                par_nuc: b'X',
                mut_nuc: base,
            });
        }
    }

    let root = tree.root();
    tree[root].aa_mutations =
        aa_mutations_for_branch(&HashMap::new(), &reference_muts, genes, false);
    tree[root].nuc_mutations = reference_muts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::{Cds, Strand};

    fn toy_model() -> GeneModel {
        // Three codons: ATG ACC GGG -> M T G
        GeneModel::load(
            b"ATGACCGGG".to_vec(),
            vec![Cds { name: "toy".into(), start: 0, end: 9, strand: Strand::Forward }],
        )
        .unwrap()
    }

    fn nuc(position: u32, par: u8, mutated: u8) -> NucMutation {
        NucMutation { chrom: 0, position, par_nuc: par, mut_nuc: mutated }
    }

    #[test]
    fn two_mutations_in_one_codon_resolve_together() {
        let genes = toy_model();
        // ATG with A1T and G3C is TTC -> F, a single combined change.
        let own = vec![nuc(1, b'A', b'T'), nuc(3, b'G', b'C')];
        let aa = aa_mutations_for_branch(&HashMap::new(), &own, &genes, true);
        assert_eq!(aa.len(), 1);
        assert_eq!(aa[0].codon, 1);
        assert_eq!(aa[0].par_aa, b'M');
        assert_eq!(aa[0].mut_aa, b'F');
        assert_eq!(aa[0].nuc_for_codon, 1);
    }

    #[test]
    fn synonymous_change_is_suppressed() {
        let genes = toy_model();
        // GGG -> GGA is still glycine.
        let own = vec![nuc(9, b'G', b'A')];
        let aa = aa_mutations_for_branch(&HashMap::new(), &own, &genes, true);
        assert!(aa.is_empty());
    }

    #[test]
    fn inherited_state_shapes_initial_codon() {
        let genes = toy_model();
        // Ancestor already changed position 1 to T: initial codon is TTG (L).
        let state = HashMap::from([(1u32, b'T')]);
        let own = vec![nuc(2, b'T', b'A')];
        let aa = aa_mutations_for_branch(&state, &own, &genes, true);
        assert_eq!(aa.len(), 1);
        assert_eq!(aa[0].par_aa, b'L');
        assert_eq!(aa[0].mut_aa, b'*'); // TAG
    }

    #[test]
    fn mutations_outside_any_cds_yield_nothing() {
        let genes = GeneModel::load(
            b"ATGACCGGG".to_vec(),
            vec![Cds { name: "toy".into(), start: 0, end: 3, strand: Strand::Forward }],
        )
        .unwrap();
        let own = vec![nuc(5, b'C', b'T')];
        assert!(aa_mutations_for_branch(&HashMap::new(), &own, &genes, true).is_empty());
    }

    #[test]
    fn siblings_do_not_see_each_others_history() {
        let genes = toy_model();
        let mut tree = Tree::new();
        let left = tree.add_child(tree.root());
        let right = tree.add_child(tree.root());
        // Left changes codon 1; right makes a change that is only
        // non-synonymous if it wrongly inherits left's state.
        tree[left].nuc_mutations = vec![nuc(1, b'A', b'T')];
        tree[right].nuc_mutations = vec![nuc(9, b'G', b'A')];
        annotate_aa_mutations(&mut tree, &genes).unwrap();
        assert_eq!(tree[left].aa_mutations.len(), 1);
        assert!(tree[right].aa_mutations.is_empty());
    }

    #[test]
    fn lineage_state_accumulates_down_paths() {
        let genes = toy_model();
        let mut tree = Tree::new();
        let mid = tree.add_child(tree.root());
        let leaf = tree.add_child(mid);
        tree[mid].nuc_mutations = vec![nuc(1, b'A', b'T')]; // ATG -> TTG (M -> L)
        tree[leaf].nuc_mutations = vec![nuc(2, b'T', b'A')]; // TTG -> TAG (L -> *)
        annotate_aa_mutations(&mut tree, &genes).unwrap();
        assert_eq!(tree[mid].aa_mutations[0].par_aa, b'M');
        assert_eq!(tree[mid].aa_mutations[0].mut_aa, b'L');
        assert_eq!(tree[leaf].aa_mutations[0].par_aa, b'L');
        assert_eq!(tree[leaf].aa_mutations[0].mut_aa, b'*');
    }

    #[test]
    fn root_reference_records_every_codon() {
        let genes = toy_model();
        let mut tree = Tree::new();
        tree.add_child(tree.root());
        record_reference_on_root(&mut tree, &genes, 0, false);
        let root = tree.root();
        assert_eq!(tree[root].nuc_mutations.len(), 9);
        assert!(tree[root].nuc_mutations.iter().all(|m| m.par_nuc == b'X'));
        // One record per codon, identical residues on both sides.
        assert_eq!(tree[root].aa_mutations.len(), 3);
        assert!(tree[root].aa_mutations.iter().all(|m| m.par_aa == m.mut_aa));
    }

    #[test]
    fn only_variable_sites_restricts_reference_records() {
        let genes = toy_model();
        let mut tree = Tree::new();
        let leaf = tree.add_child(tree.root());
        tree[leaf].nuc_mutations = vec![nuc(4, b'A', b'G')];
        record_reference_on_root(&mut tree, &genes, 0, true);
        let root = tree.root();
        assert_eq!(tree[root].nuc_mutations.len(), 1);
        assert_eq!(tree[root].nuc_mutations[0].position, 4);
        // Only codon 2 contains a variable site.
        assert_eq!(tree[root].aa_mutations.len(), 1);
        assert_eq!(tree[root].aa_mutations[0].codon, 2);
    }
}
