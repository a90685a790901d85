//! Mutation value types.
//!
//! Both types are plain `Copy` records with structural equality and hashing:
//! two mutations with identical fields are the same mutation. That property
//! is what lets the export stage deduplicate mutations across the whole tree
//! and reference them by a single registry index.

use std::collections::HashMap;

/// A single nucleotide substitution carried by a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucMutation {
    /// Index into the run's [`ChromTable`].
    pub chrom: u32,
    /// One-indexed genomic position.
    pub position: u32,
    /// Ancestral base (ASCII). The synthetic root-reference records use `X`.
    pub par_nuc: u8,
    /// Derived base (ASCII).
    pub mut_nuc: u8,
}

/// An amino-acid substitution derived from the nucleotide changes that land
/// in one codon on one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AaMutation {
    /// Index into the gene model's CDS list.
    pub gene: u32,
    /// One-indexed codon number within the gene.
    pub codon: u32,
    /// Ancestral residue (ASCII).
    pub par_aa: u8,
    /// Derived residue (ASCII).
    pub mut_aa: u8,
    /// One-indexed genomic position of the codon's first nucleotide.
    pub nuc_for_codon: u32,
}

/// Interner for chromosome/segment names so [`NucMutation`] stays `Copy`.
///
/// Trees converted from UShER protobufs usually carry a single segment, but
/// the name still has to round-trip into the registry sort and the output.
#[derive(Debug, Default)]
pub struct ChromTable {
    names: Vec<String>,
    index: HashMap<String, u32>,
}

impl ChromTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
