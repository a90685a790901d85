//! Optional time-tree inference via the external `chronumental` tool.
//!
//! The distance tree is serialized to newick in a scratch directory,
//! chronumental infers branch durations from sample dates, and the resulting
//! time tree is parsed back. Chronumental preserves topology, so its newick
//! parses to the same preorder as ours and the durations transfer by a
//! straight zip; a node-count mismatch means the tool mangled the tree and
//! aborts the run.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::newick;
use crate::tree::Tree;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Knobs forwarded to the chronumental invocation.
pub struct ChronumentalOptions<'a> {
    /// Sample-dates file, handed to chronumental as-is.
    pub dates_path: &'a Path,
    /// Optimization steps; more steps, better fit, longer run.
    pub steps: u32,
    /// Where to keep chronumental's per-sample date estimates, if wanted.
    pub date_output: Option<&'a Path>,
}

/// Verifies the `chronumental` binary is runnable.
pub fn check_chronumental() -> Result<()> {
    Command::new("chronumental")
        .arg("--version")
        .output()
        .context(
            "chronumental is not installed or not in PATH. \
             Install it with: pip install chronumental",
        )?;
    Ok(())
}

/// Runs chronumental and writes the inferred branch durations into
/// `time_length` on every node.
pub fn infer_time_tree(tree: &mut Tree, options: &ChronumentalOptions) -> Result<()> {
    check_chronumental()?;

    let progress = ProgressBarBuilder::new("Running chronumental")
        .with_tick()
        .build()?;

    let scratch = tempfile::tempdir().context("Failed to create scratch directory")?;
    let distance_path = scratch.path().join("distance_tree.nwk");
    let time_path = scratch.path().join("timetree.nwk");
    fs::write(&distance_path, tree.to_newick())
        .context("Failed to write distance tree for chronumental")?;

    let mut command = Command::new("chronumental");
    command
        .arg("--tree")
        .arg(&distance_path)
        .arg("--dates")
        .arg(options.dates_path)
        .arg("--steps")
        .arg(options.steps.to_string())
        .arg("--tree_out")
        .arg(&time_path);
    if let Some(date_output) = options.date_output {
        command.arg("--dates_out").arg(date_output);
    }

    let status = command
        .status()
        .context("Failed to launch chronumental")?;
    if !status.success() {
        bail!("chronumental exited with {status}");
    }

    let time_newick = fs::read_to_string(&time_path)
        .context("chronumental did not produce a time tree")?;
    let time_tree = newick::parse(&time_newick)?;
    apply_time_lengths(tree, &time_tree)?;

    progress.finish_with_message("Time tree inferred");
    Ok(())
}

/// Copies the time tree's branch lengths onto the main tree as
/// `time_length`, matching nodes by preorder position. Counts compare
/// reachable nodes only: expansion and shearing leave detached slots in the
/// main tree's arena, while the re-parsed time tree allocates none.
fn apply_time_lengths(tree: &mut Tree, time_tree: &Tree) -> Result<()> {
    let order = tree.preorder();
    let time_order = time_tree.preorder();
    if time_order.len() != order.len() {
        bail!(
            "time tree has {} nodes, distance tree has {}",
            time_order.len(),
            order.len()
        );
    }

    for (&id, &time_id) in order.iter().zip(&time_order) {
        tree[id].time_length = time_tree[time_id].branch_length;
    }
    Ok(())
}
