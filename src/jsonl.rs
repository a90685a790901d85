//! Streaming JSONL output: one header line, then one line per node.
//!
//! Field order inside each line is fixed by the struct definitions and the
//! use of ordered maps, so identical inputs produce byte-identical files.
//! Coordinates are rounded to five decimals before serialization; this caps
//! line length and makes the rounding part of the format rather than an
//! accident of float printing.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::genes::GeneModel;
use crate::order::MutationRegistry;

/// Output format version, bumped when the line schema changes.
pub const FORMAT_VERSION: &str = "2.0";

/// One entry in the header's global mutation table. Amino-acid entries name
/// their gene; nucleotide entries use the pseudo-gene `nt` and a genomic
/// position instead of a codon number.
#[derive(Debug, Serialize)]
pub struct MutationEntry {
    pub gene: String,
    pub previous_residue: char,
    pub residue_pos: u32,
    pub new_residue: char,
    pub mutation_id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nuc_for_codon: Option<u32>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// The file's first line.
#[derive(Debug, Serialize)]
pub struct Header {
    pub version: &'static str,
    pub mutations: Vec<MutationEntry>,
    pub total_nodes: usize,
    pub config: serde_json::Value,
}

/// One node line. `meta` fields are flattened in with a `meta_` prefix
/// already applied to the keys; a `BTreeMap` keeps them in column order.
#[derive(Debug, Serialize)]
pub struct NodeRecord {
    pub name: String,
    pub x_dist: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_time: Option<f64>,
    pub y: f64,
    pub mutations: Vec<usize>,
    pub is_tip: bool,
    #[serde(flatten)]
    pub meta: BTreeMap<String, String>,
    pub parent_id: usize,
    pub node_id: usize,
    pub num_tips: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clades: Option<BTreeMap<String, String>>,
}

/// Rounds to five decimal places.
pub fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Flattens the registry into header entries, amino-acid block first. Entry
/// order equals index order, so `mutation_id` is always the entry's own
/// position in the list.
pub fn mutation_entries(
    registry: &MutationRegistry,
    genes: Option<&GeneModel>,
) -> Vec<MutationEntry> {
    let mut entries = Vec::with_capacity(registry.len());
    for (index, mutation) in registry.aa.iter().enumerate() {
        let gene = match genes {
            Some(model) => model.cdses[mutation.gene as usize].name.clone(),
            None => String::new(),
        };
        entries.push(MutationEntry {
            gene,
            previous_residue: mutation.par_aa as char,
            residue_pos: mutation.codon,
            new_residue: mutation.mut_aa as char,
            mutation_id: index,
            nuc_for_codon: Some(mutation.nuc_for_codon),
            kind: "aa",
        });
    }
    let offset = registry.aa.len();
    for (index, mutation) in registry.nuc.iter().enumerate() {
        entries.push(MutationEntry {
            gene: "nt".to_string(),
            previous_residue: mutation.par_nuc as char,
            residue_pos: mutation.position,
            new_residue: mutation.mut_nuc as char,
            mutation_id: offset + index,
            nuc_for_codon: None,
            kind: "nt",
        });
    }
    entries
}

/// Line-oriented writer over a plain or gzip-compressed file, selected by
/// the output file name.
pub struct JsonlWriter {
    inner: Box<dyn Write>,
}

impl JsonlWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        let buffered = BufWriter::new(file);
        let inner: Box<dyn Write> = if path.to_string_lossy().ends_with(".gz") {
            niffler::get_writer(
                Box::new(buffered),
                niffler::compression::Format::Gzip,
                niffler::Level::Six,
            )
            .with_context(|| format!("Failed to open gzip writer: {}", path.display()))?
        } else {
            Box::new(buffered)
        };
        Ok(Self { inner })
    }

    pub fn write_header(&mut self, header: &Header) -> Result<()> {
        self.write_line(header)
    }

    pub fn write_node(&mut self, node: &NodeRecord) -> Result<()> {
        self.write_line(node)
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, value).context("Failed to serialize line")?;
        self.inner
            .write_all(b"\n")
            .context("Failed to write output")?;
        Ok(())
    }

    /// Flushes and finalizes the stream. Dropping without calling this can
    /// truncate a gzip trailer.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().context("Failed to flush output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::{Cds, Strand};
    use crate::mutation::{AaMutation, ChromTable, NucMutation};

    #[test]
    fn rounding_is_five_decimals() {
        assert_eq!(round5(123.4567891), 123.45679);
        assert_eq!(round5(0.000004), 0.0);
        assert_eq!(round5(600.0), 600.0);
    }

    #[test]
    fn entries_number_aa_then_nt() {
        let genes = GeneModel::load(
            b"ATGACC".to_vec(),
            vec![Cds { name: "S".into(), start: 0, end: 6, strand: Strand::Forward }],
        )
        .unwrap();
        let mut chroms = ChromTable::new();
        let chrom = chroms.intern("chrom");
        let mut tree = crate::tree::Tree::new();
        let leaf = tree.add_child(tree.root());
        tree[leaf].aa_mutations =
            vec![AaMutation { gene: 0, codon: 2, par_aa: b'T', mut_aa: b'I', nuc_for_codon: 4 }];
        tree[leaf].nuc_mutations =
            vec![NucMutation { chrom, position: 5, par_nuc: b'C', mut_nuc: b'T' }];
        let registry = MutationRegistry::build(&tree, Some(&genes), &chroms).unwrap();
        let entries = mutation_entries(&registry, Some(&genes));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].gene, "S");
        assert_eq!(entries[0].kind, "aa");
        assert_eq!(entries[0].mutation_id, 0);
        assert_eq!(entries[0].nuc_for_codon, Some(4));
        assert_eq!(entries[1].gene, "nt");
        assert_eq!(entries[1].kind, "nt");
        assert_eq!(entries[1].mutation_id, 1);
        assert_eq!(entries[1].residue_pos, 5);
    }

    #[test]
    fn node_line_field_order_is_stable() {
        let record = NodeRecord {
            name: "sample_a".into(),
            x_dist: 600.0,
            x_time: None,
            y: 2.0,
            mutations: vec![0, 3],
            is_tip: true,
            meta: BTreeMap::from([
                ("meta_country".to_string(), "UK".to_string()),
                ("meta_date".to_string(), "2021-01-04".to_string()),
            ]),
            parent_id: 1,
            node_id: 4,
            num_tips: 1,
            clades: None,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut writer = JsonlWriter::create(&path).unwrap();
        writer.write_node(&record).unwrap();
        writer.finish().unwrap();
        let line = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            line,
            "{\"name\":\"sample_a\",\"x_dist\":600.0,\"y\":2.0,\
             \"mutations\":[0,3],\"is_tip\":true,\
             \"meta_country\":\"UK\",\"meta_date\":\"2021-01-04\",\
             \"parent_id\":1,\"node_id\":4,\"num_tips\":1}\n"
        );
    }

    #[test]
    fn optional_fields_appear_when_set() {
        let record = NodeRecord {
            name: String::new(),
            x_dist: 0.0,
            x_time: Some(12.5),
            y: 0.0,
            mutations: vec![],
            is_tip: false,
            meta: BTreeMap::new(),
            parent_id: 0,
            node_id: 0,
            num_tips: 3,
            clades: Some(BTreeMap::from([("pango".to_string(), "B.1".to_string())])),
        };
        let line = serde_json::to_string(&record).unwrap();
        assert!(line.contains("\"x_time\":12.5"));
        assert!(line.contains("\"clades\":{\"pango\":\"B.1\"}"));
    }
}
