//! Minimal gene/CDS model: position-to-codon lookup and translation.
//!
//! Deliberately not a general annotation framework. The model supports only
//! simple CDS features — one contiguous interval on one segment, length a
//! multiple of three — which is all the amino-acid annotator needs to map a
//! genomic position to a codon.

use anyhow::{bail, Result};
use bio::alphabets::dna;

/// Strand orientation of a CDS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }
}

/// A coding region. Coordinates are 0-indexed, end exclusive.
#[derive(Debug, Clone)]
pub struct Cds {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

/// A codon located within a CDS. `number` is 0-indexed; `start`/`end` are
/// 0-indexed genomic coordinates, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codon {
    pub number: usize,
    pub start: usize,
    pub end: usize,
}

// Standard genetic code, indexed by first*16 + second*4 + third
// with A=0, C=1, G=2, T=3.
#[rustfmt::skip]
const CODON_TABLE: [u8; 64] = [
    b'K', b'N', b'K', b'N',  // AA*
    b'T', b'T', b'T', b'T',  // AC*
    b'R', b'S', b'R', b'S',  // AG*
    b'I', b'I', b'M', b'I',  // AT*
    b'Q', b'H', b'Q', b'H',  // CA*
    b'P', b'P', b'P', b'P',  // CC*
    b'R', b'R', b'R', b'R',  // CG*
    b'L', b'L', b'L', b'L',  // CT*
    b'E', b'D', b'E', b'D',  // GA*
    b'A', b'A', b'A', b'A',  // GC*
    b'G', b'G', b'G', b'G',  // GG*
    b'V', b'V', b'V', b'V',  // GT*
    b'*', b'Y', b'*', b'Y',  // TA*
    b'S', b'S', b'S', b'S',  // TC*
    b'*', b'C', b'W', b'C',  // TG*
    b'L', b'F', b'L', b'F',  // TT*
];

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' | b'U' | b'u' => Some(3),
        _ => None,
    }
}

/// Reference sequence plus the validated CDS list.
#[derive(Debug)]
pub struct GeneModel {
    pub reference: Vec<u8>,
    pub cdses: Vec<Cds>,
}

impl GeneModel {
    /// Validates CDS geometry at load time. Violations are fatal: a CDS that
    /// is empty, runs past the reference, or is not a whole number of codons
    /// cannot be annotated correctly, and skipping it would silently drop
    /// amino-acid calls.
    pub fn load(reference: Vec<u8>, cdses: Vec<Cds>) -> Result<Self> {
        for cds in &cdses {
            if cds.start >= cds.end {
                bail!("CDS {} has an empty or inverted interval", cds.name);
            }
            if cds.end > reference.len() {
                bail!(
                    "CDS {} ends at {} but the reference is only {} bases long",
                    cds.name,
                    cds.end,
                    reference.len()
                );
            }
            if (cds.end - cds.start) % 3 != 0 {
                bail!(
                    "CDS {} has length {} which is not a multiple of 3",
                    cds.name,
                    cds.end - cds.start
                );
            }
        }
        Ok(Self { reference, cdses })
    }

    /// First CDS containing the 0-indexed position, if any. Gene counts are
    /// small enough that a linear scan is fine.
    pub fn find_cds(&self, position: usize) -> Option<usize> {
        self.cdses
            .iter()
            .position(|cds| cds.start <= position && position < cds.end)
    }

    /// The codon containing a 0-indexed position within `cds`.
    pub fn codon_for_position(&self, position: usize, cds: &Cds) -> Codon {
        if cds.strand.is_reverse() {
            let number = (cds.end - position - 1) / 3;
            let end = cds.end - 3 * number;
            Codon { number, start: end - 3, end }
        } else {
            let number = (position - cds.start) / 3;
            let start = cds.start + 3 * number;
            Codon { number, start, end: start + 3 }
        }
    }

    /// Translates a codon triplet, reverse-complementing first on the
    /// reverse strand. Unknown bases translate to `X`.
    pub fn translate(&self, triplet: &[u8; 3], strand: Strand) -> u8 {
        let codon: [u8; 3] = if strand.is_reverse() {
            let rc = dna::revcomp(triplet);
            [rc[0], rc[1], rc[2]]
        } else {
            *triplet
        };
        match (base_index(codon[0]), base_index(codon[1]), base_index(codon[2])) {
            (Some(a), Some(b), Some(c)) => CODON_TABLE[a * 16 + b * 4 + c],
            _ => b'X',
        }
    }
}
