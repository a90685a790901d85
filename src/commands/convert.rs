//! The conversion pipeline, end to end.
//!
//! Stage order matters: condensed nodes are expanded before anything counts
//! tips, shearing and chronumental run on the final topology, amino-acid
//! annotation needs the original root-to-leaf mutation layering, and
//! ladderization plus layout fix the geometry the export order depends on.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context, Result};

use crate::annotate::{annotate_aa_mutations, record_reference_on_root};
use crate::chronumental::{infer_time_tree, ChronumentalOptions};
use crate::cli::Args;
use crate::decode;
use crate::expand::expand_condensed_nodes;
use crate::genes::GeneModel;
use crate::jsonl::{
    mutation_entries, round5, Header, JsonlWriter, NodeRecord, FORMAT_VERSION,
};
use crate::layout::{
    set_internal_y_coords, set_terminal_y_coords, set_x_coords, LayoutOptions,
};
use crate::metadata::Metadata;
use crate::order::{ladderize, nodes_for_export, Ladder, MutationRegistry};
use crate::shear::shear;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

pub fn run(args: &Args) -> Result<()> {
    let chronumental_dates = match (args.chronumental, &args.metadata) {
        (true, Some(path)) => Some(path.clone()),
        (true, None) => bail!("--chronumental needs --metadata to supply sample dates"),
        (false, _) => None,
    };
    let metadata = match &args.metadata {
        Some(path) => Metadata::load(path, &args.key_column, &args.columns)?,
        None => Metadata::empty(),
    };
    let config = build_config(args)?;

    let decoded = decode::load(&args.input, &args.clade_types)?;
    let mut tree = decoded.tree;
    let mut chroms = decoded.chroms;

    expand_condensed_nodes(&mut tree, &decoded.condensed, args.validate)?;
    tree.assign_num_tips();

    if args.shear {
        shear(&mut tree, args.shear_threshold)?;
    }

    if let Some(dates_path) = &chronumental_dates {
        infer_time_tree(
            &mut tree,
            &ChronumentalOptions {
                dates_path,
                steps: args.chronumental_steps,
                date_output: args.chronumental_date_output.as_deref(),
            },
        )?;
    }

    let genes = match &args.genbank {
        Some(path) => {
            let (reference, cdses) = crate::genbank::read_genbank(path)?;
            let genes = GeneModel::load(reference, cdses)?;
            annotate_aa_mutations(&mut tree, &genes)?;
            let chrom = if chroms.is_empty() {
                chroms.intern(decode::DEFAULT_CHROM)
            } else {
                0
            };
            record_reference_on_root(&mut tree, &genes, chrom, args.only_variable_sites);
            Some(genes)
        }
        None => None,
    };

    ladderize(&mut tree, Ladder::Descending);
    set_x_coords(&mut tree, args.chronumental, LayoutOptions::default())?;
    set_terminal_y_coords(&mut tree);
    set_internal_y_coords(&mut tree);

    let export = nodes_for_export(&tree);
    let registry = MutationRegistry::build(&tree, genes.as_ref(), &chroms)?;

    let mut writer = JsonlWriter::create(&args.output)?;
    writer.write_header(&Header {
        version: FORMAT_VERSION,
        mutations: mutation_entries(&registry, genes.as_ref()),
        total_nodes: export.len(),
        config,
    })?;

    let progress = ProgressBarBuilder::new("Writing nodes")
        .with_total(export.len() as u64)
        .build()?;

    let mut node_to_index = vec![0usize; tree.arena_len()];
    for (index, &id) in export.iter().enumerate() {
        node_to_index[id] = index;
    }

    for &id in &export {
        let node = &tree[id];

        let mut mutations = Vec::with_capacity(
            node.aa_mutations.len() + node.nuc_mutations.len(),
        );
        for mutation in &node.aa_mutations {
            let index = registry
                .aa_index(mutation)
                .ok_or_else(|| anyhow!("amino-acid mutation missing from registry"))?;
            mutations.push(index);
        }
        for mutation in &node.nuc_mutations {
            let index = registry
                .nuc_index(mutation)
                .ok_or_else(|| anyhow!("nucleotide mutation missing from registry"))?;
            mutations.push(index);
        }

        // Every line carries every metadata column; samples without a row
        // (and internal nodes) get empty strings so the schema is uniform.
        let row = metadata.get(&node.label);
        let meta: BTreeMap<String, String> = metadata
            .columns
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let value = row
                    .and_then(|values| values.get(column))
                    .cloned()
                    .unwrap_or_default();
                (format!("meta_{name}"), value)
            })
            .collect();

        let parent_id = match node.parent {
            Some(parent) => node_to_index[parent],
            None => node_to_index[id],
        };

        writer.write_node(&NodeRecord {
            name: node.label.clone(),
            x_dist: round5(node.x_dist),
            x_time: args.chronumental.then(|| round5(node.x_time)),
            y: round5(node.y),
            mutations,
            is_tip: node.is_leaf(),
            meta,
            parent_id,
            node_id: node_to_index[id],
            num_tips: node.num_tips,
            clades: if node.clades.is_empty() {
                None
            } else {
                Some(node.clades.clone())
            },
        })?;
        progress.inc(1);
    }
    writer.finish()?;

    progress.finish_with_message(format!(
        "Wrote {} nodes to {}",
        export.len(),
        args.output.display()
    ));
    Ok(())
}

/// Builds the config object embedded in the header from `--config-json` and
/// `--title`.
fn build_config(args: &Args) -> Result<serde_json::Value> {
    let mut config = match &args.config_json {
        Some(text) => {
            serde_json::from_str(text).context("--config-json is not valid JSON")?
        }
        None => serde_json::json!({}),
    };
    let Some(object) = config.as_object_mut() else {
        bail!("--config-json must be a JSON object");
    };
    if let Some(title) = &args.title {
        object.insert(
            "title".to_string(),
            serde_json::Value::String(title.clone()),
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "usher_to_taxonium",
            "--input",
            "in.pb",
            "--output",
            "out.jsonl",
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn config_merges_title_into_json() {
        let config = build_config(&args(&[
            "--config-json",
            r#"{"num_tips_label": "samples"}"#,
            "--title",
            "Toy tree",
        ]))
        .unwrap();
        assert_eq!(config["num_tips_label"], "samples");
        assert_eq!(config["title"], "Toy tree");
    }

    #[test]
    fn config_rejects_non_object_json() {
        assert!(build_config(&args(&["--config-json", "[1,2]"])).is_err());
        assert!(build_config(&args(&["--config-json", "not json"])).is_err());
    }

    #[test]
    fn chronumental_without_metadata_is_rejected() {
        let result = run(&args(&["--chronumental"]));
        assert!(result.is_err());
    }
}
