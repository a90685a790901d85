//! Decodes a mutation-annotated tree protobuf into the arena tree.
//!
//! The file carries a newick string for topology plus a flat array of
//! per-branch mutation lists. The array is aligned with the newick by
//! preorder position, so the decode is a single zip of the parsed tree's
//! preorder against `node_mutations`; any length mismatch means the file is
//! corrupt and is rejected outright.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use protobuf::Message;

use crate::generated::parsimony::Data;
use crate::mutation::{ChromTable, NucMutation};
use crate::newick;
use crate::tree::Tree;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Nucleotide alphabet indexed by the protobuf's integer codes.
const NUC_ENUM: &[u8] = b"ACGT";

/// Chromosome name used when the file does not record one.
pub const DEFAULT_CHROM: &str = "chrom";

/// A fully decoded tree plus the side tables that travel with it.
pub struct DecodedTree {
    pub tree: Tree,
    pub chroms: ChromTable,
    /// Condensed-node label -> the sample names it stands for.
    pub condensed: HashMap<String, Vec<String>>,
}

/// Reads a (possibly gzip-compressed) mutation-annotated tree file.
pub fn load(path: &Path, clade_types: &[String]) -> Result<DecodedTree> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open tree file: {}", path.display()))?;
    let (reader, _format) = niffler::get_reader(Box::new(BufReader::new(file)))
        .with_context(|| format!("Failed to read tree file: {}", path.display()))?;
    let mut reader = BufReader::new(reader);
    let data = Data::parse_from_reader(&mut reader)
        .with_context(|| format!("Failed to parse tree file: {}", path.display()))?;
    decode(data, clade_types)
}

fn nuc_from_code(code: i32) -> Result<u8> {
    NUC_ENUM
        .get(code as usize)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("nucleotide code {code} out of range"))
}

/// Turns the decoded protobuf into a [`DecodedTree`].
pub fn decode(data: Data, clade_types: &[String]) -> Result<DecodedTree> {
    let mut tree = newick::parse(data.newick())?;
    let order = tree.preorder();

    if order.len() != data.node_mutations.len() {
        bail!(
            "tree has {} nodes but the file carries {} mutation lists",
            order.len(),
            data.node_mutations.len()
        );
    }

    let progress = ProgressBarBuilder::new("Decoding mutations")
        .with_total(order.len() as u64)
        .build()?;

    let mut chroms = ChromTable::new();
    for (&id, list) in order.iter().zip(&data.node_mutations) {
        let mut muts = Vec::with_capacity(list.mutation.len());
        for m in &list.mutation {
            let chrom_name = if m.chromosome().is_empty() {
                DEFAULT_CHROM
            } else {
                m.chromosome()
            };
            let par_nuc = nuc_from_code(m.par_nuc())?;
            // Most branches record exactly one alternate; a missing one means
            // the site reverted, which we model as par -> par.
            let mut_nuc = match m.mut_nuc.first() {
                Some(&code) => nuc_from_code(code)?,
                None => par_nuc,
            };
            muts.push(NucMutation {
                chrom: chroms.intern(chrom_name),
                position: m.position() as u32,
                par_nuc,
                mut_nuc,
            });
        }
        tree[id].branch_length = muts.len() as f64;
        tree[id].nuc_mutations = muts;
        progress.inc(1);
    }

    if !clade_types.is_empty() {
        if data.metadata.len() == order.len() {
            for (&id, meta) in order.iter().zip(&data.metadata) {
                for (kind, value) in clade_types.iter().zip(&meta.clade_annotations) {
                    if !value.is_empty() {
                        tree[id].clades.insert(kind.clone(), value.clone());
                    }
                }
            }
        } else {
            progress.println(format!(
                "Warning: requested clade annotations but the file has {} \
                 metadata entries for {} nodes; skipping",
                data.metadata.len(),
                order.len()
            ));
        }
    }

    let mut condensed = HashMap::with_capacity(data.condensed_nodes.len());
    for group in &data.condensed_nodes {
        condensed.insert(
            group.node_name().to_string(),
            group.condensed_leaves.clone(),
        );
    }

    progress.finish_with_message(format!("Decoded {} nodes", order.len()));
    Ok(DecodedTree { tree, chroms, condensed })
}
