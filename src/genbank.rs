//! Minimal GenBank reader: the ORIGIN sequence and simple CDS features.
//!
//! This is intentionally not a full GenBank parser. It extracts exactly what
//! the gene model needs — the reference sequence and, per CDS feature, the
//! `/gene=` name, strand, and a single contiguous interval. Compound
//! locations (`join(...)`) are rejected rather than mis-annotated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::genes::{Cds, Strand};

/// Columns before qualifier text in a GenBank feature table.
const QUALIFIER_INDENT: usize = 21;

struct PendingCds {
    start: usize,
    end: usize,
    strand: Strand,
    gene: Option<String>,
}

/// Reads a GenBank file (optionally gzipped) into a reference sequence and
/// an ordered CDS list.
pub fn read_genbank(path: &Path) -> Result<(Vec<u8>, Vec<Cds>)> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open GenBank file: {}", path.display()))?;
    let (reader, _compression) = niffler::get_reader(Box::new(file))
        .with_context(|| format!("Failed to read GenBank file: {}", path.display()))?;
    parse_genbank(BufReader::new(reader))
        .with_context(|| format!("Failed to parse GenBank file: {}", path.display()))
}

fn parse_genbank<R: BufRead>(reader: R) -> Result<(Vec<u8>, Vec<Cds>)> {
    let mut sequence = Vec::new();
    let mut cdses = Vec::new();
    let mut pending: Option<PendingCds> = None;
    let mut in_origin = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();

        if in_origin {
            if line.starts_with("//") {
                break;
            }
            // "     1 gatttttaag ctt..." - keep letters only.
            sequence.extend(
                line.bytes()
                    .filter(u8::is_ascii_alphabetic)
                    .map(|b| b.to_ascii_uppercase()),
            );
            continue;
        }

        if line.starts_with("ORIGIN") {
            flush(&mut pending, &mut cdses)?;
            in_origin = true;
            continue;
        }

        // A non-blank character in column 6 starts a new feature.
        let bytes = line.as_bytes();
        if bytes.len() > 5 && bytes[5] != b' ' && line.starts_with("     ") {
            flush(&mut pending, &mut cdses)?;
            let mut parts = line.split_whitespace();
            let feature_type = parts.next().unwrap_or("");
            if feature_type == "CDS" {
                let location = parts
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("CDS feature with no location"))?;
                pending = Some(parse_location(location)?);
            }
        } else if bytes.len() > QUALIFIER_INDENT {
            if let Some(cds) = pending.as_mut() {
                let content = line[QUALIFIER_INDENT..].trim();
                if let Some(rest) = content.strip_prefix("/gene=") {
                    cds.gene = Some(rest.trim_matches('"').to_string());
                }
            }
        }
    }

    flush(&mut pending, &mut cdses)?;
    if sequence.is_empty() {
        bail!("no ORIGIN sequence found");
    }
    Ok((sequence, cdses))
}

fn flush(pending: &mut Option<PendingCds>, cdses: &mut Vec<Cds>) -> Result<()> {
    if let Some(cds) = pending.take() {
        let gene = match cds.gene {
            Some(gene) => gene,
            None => bail!(
                "CDS at {}..{} has no /gene qualifier",
                cds.start + 1,
                cds.end
            ),
        };
        cdses.push(Cds {
            name: gene,
            start: cds.start,
            end: cds.end,
            strand: cds.strand,
        });
    }
    Ok(())
}

/// Parses `start..end` or `complement(start..end)`. GenBank coordinates are
/// one-indexed with inclusive ends; the result is 0-indexed, end exclusive.
fn parse_location(location: &str) -> Result<PendingCds> {
    if location.contains("join") || location.contains(',') {
        bail!("compound CDS location {location:?} is not supported");
    }
    let (span, strand) = match location
        .strip_prefix("complement(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => (inner, Strand::Reverse),
        None => (location, Strand::Forward),
    };
    let (start, end) = span
        .split_once("..")
        .ok_or_else(|| anyhow::anyhow!("unparseable CDS location {location:?}"))?;
    // '<' and '>' mark partial features; the interval itself is still usable.
    let start: usize = start
        .trim_start_matches('<')
        .parse()
        .with_context(|| format!("bad CDS location {location:?}"))?;
    let end: usize = end
        .trim_start_matches('>')
        .parse()
        .with_context(|| format!("bad CDS location {location:?}"))?;
    if start == 0 || end < start {
        bail!("bad CDS location {location:?}");
    }
    Ok(PendingCds {
        start: start - 1,
        end,
        strand,
        gene: None,
    })
}
