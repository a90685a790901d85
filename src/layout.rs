//! Layout coordinates for rendering.
//!
//! x is cumulative divergence from the root, rescaled so the 95th-percentile
//! value lands on a fixed constant; without the rescale a handful of
//! outlier-long branches would compress the visible range. y spreads leaves
//! by preorder rank and centres internal nodes over their children.

use anyhow::Result;

use crate::tree::Tree;
use crate::utils::progress_bar_builder::ProgressBarBuilder;

/// Tuning constants for the visual layout. These are presentation defaults,
/// not semantic invariants.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Value the percentile point is rescaled to.
    pub fixed_x: f64,
    /// Percentile (0..1) of the x distribution pinned to `fixed_x`.
    pub percentile: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { fixed_x: 600.0, percentile: 0.95 }
    }
}

/// Sets `x_dist` (and `x_time` when a time tree was estimated) top-down and
/// normalizes each axis independently.
pub fn set_x_coords(tree: &mut Tree, time_axis: bool, options: LayoutOptions) -> Result<()> {
    let progress = ProgressBarBuilder::new("Setting x coordinates")
        .with_tick()
        .build()?;

    let order = tree.preorder();
    for &id in &order {
        match tree[id].parent {
            Some(parent) => {
                let x_dist = tree[parent].x_dist + tree[id].branch_length;
                tree[id].x_dist = x_dist;
                if time_axis {
                    let x_time = tree[parent].x_time + tree[id].time_length;
                    tree[id].x_time = x_time;
                }
            }
            None => {
                tree[id].x_dist = 0.0;
                tree[id].x_time = 0.0;
            }
        }
    }

    normalize(tree, &order, options, |tree, id| tree[id].x_dist, |tree, id, v| {
        tree[id].x_dist = v
    });
    if time_axis {
        normalize(tree, &order, options, |tree, id| tree[id].x_time, |tree, id, v| {
            tree[id].x_time = v
        });
    }

    progress.finish_with_message("x coordinates set");
    Ok(())
}

fn normalize(
    tree: &mut Tree,
    order: &[usize],
    options: LayoutOptions,
    get: impl Fn(&Tree, usize) -> f64,
    set: impl Fn(&mut Tree, usize, f64),
) {
    let mut values: Vec<f64> = order.iter().map(|&id| get(tree, id)).collect();
    values.sort_by(f64::total_cmp);
    let index = ((values.len() as f64 * options.percentile) as usize).min(values.len() - 1);
    let percentile_value = values[index];
    if percentile_value <= 0.0 {
        // A degenerate tree (all zero-length paths) has nothing to rescale.
        return;
    }
    for &id in order {
        let scaled = options.fixed_x * (get(tree, id) / percentile_value);
        set(tree, id, scaled);
    }
}

/// Assigns each leaf its 0-based rank in a single left-to-right preorder
/// walk. Rank by traversal, not by leaf-iteration order: the two differ once
/// the tree has been reordered.
pub fn set_terminal_y_coords(tree: &mut Tree) {
    let mut rank = 0usize;
    for id in tree.preorder() {
        if tree[id].is_leaf() {
            tree[id].y = rank as f64;
            rank += 1;
        }
    }
}

/// Centres every internal node midway between the lowest and highest y of
/// its children, bottom-up.
pub fn set_internal_y_coords(tree: &mut Tree) {
    for id in tree.postorder() {
        if tree[id].is_leaf() {
            continue;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &child in &tree[id].children {
            min = min.min(tree[child].y);
            max = max.max(tree[child].y);
        }
        tree[id].y = (min + max) / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newick::parse;

    #[test]
    fn x_is_cumulative_then_rescaled() {
        // (A:0,(D:1,C:1)B:2)root branch lengths via newick.
        let mut tree = parse("(A:0,(D:1,C:1)B:2)root:0;").unwrap();
        set_x_coords(&mut tree, false, LayoutOptions::default()).unwrap();
        let order = tree.preorder();
        let by_label = |label: &str| {
            let id = order.iter().find(|&&id| tree[id].label == label).unwrap();
            tree[*id].x_dist
        };
        // Raw x: root 0, A 0, B 2, D 3, C 3. Sorted: [0,0,2,3,3],
        // index int(5*0.95)=4 -> percentile value 3 -> scale 200 per unit.
        assert_eq!(by_label("root"), 0.0);
        assert_eq!(by_label("A"), 0.0);
        assert_eq!(by_label("B"), 400.0);
        assert_eq!(by_label("D"), 600.0);
        assert_eq!(by_label("C"), 600.0);
    }

    #[test]
    fn y_leaf_ranks_follow_preorder() {
        let mut tree = parse("(A,(D,C)B)root;").unwrap();
        set_terminal_y_coords(&mut tree);
        set_internal_y_coords(&mut tree);
        let order = tree.preorder();
        let by_label = |label: &str| {
            let id = order.iter().find(|&&id| tree[id].label == label).unwrap();
            tree[*id].y
        };
        assert_eq!(by_label("A"), 0.0);
        assert_eq!(by_label("D"), 1.0);
        assert_eq!(by_label("C"), 2.0);
        assert_eq!(by_label("B"), 1.5);
        assert_eq!(by_label("root"), 0.75);
    }

    #[test]
    fn time_axis_normalizes_independently_of_distance() {
        let mut tree = parse("(A:0,(D:1,C:1)B:2)root:0;").unwrap();
        // Time lengths deliberately disagree with the branch lengths so the
        // two axes get different scale factors.
        let order = tree.preorder();
        for &id in &order {
            tree[id].time_length = match tree[id].label.as_str() {
                "A" => 10.0,
                "B" => 1.0,
                "D" => 1.0,
                "C" => 3.0,
                _ => 0.0,
            };
        }
        set_x_coords(&mut tree, true, LayoutOptions::default()).unwrap();
        let by_label = |label: &str| {
            let id = order.iter().find(|&&id| tree[id].label == label).unwrap();
            (tree[*id].x_dist, tree[*id].x_time)
        };
        // Distance axis is unchanged from the divergence-only case.
        assert_eq!(by_label("B").0, 400.0);
        assert_eq!(by_label("D").0, 600.0);
        assert_eq!(by_label("A").0, 0.0);
        // Raw time: root 0, A 10, B 1, D 2, C 4. Sorted [0,1,2,4,10],
        // index int(5*0.95)=4 -> percentile value 10 -> scale 60 per unit.
        assert_eq!(by_label("root").1, 0.0);
        assert_eq!(by_label("A").1, 600.0);
        assert_eq!(by_label("B").1, 60.0);
        assert_eq!(by_label("D").1, 120.0);
        assert_eq!(by_label("C").1, 240.0);
    }

    #[test]
    fn distance_only_layout_leaves_time_axis_alone() {
        let mut tree = parse("(A:1,B:2)root:0;").unwrap();
        let order = tree.preorder();
        for &id in &order {
            tree[id].time_length = 5.0;
        }
        set_x_coords(&mut tree, false, LayoutOptions::default()).unwrap();
        for &id in &order {
            assert_eq!(tree[id].x_time, 0.0);
        }
    }

    #[test]
    fn all_zero_lengths_skip_normalization() {
        let mut tree = parse("(A:0,B:0)root:0;").unwrap();
        set_x_coords(&mut tree, false, LayoutOptions::default()).unwrap();
        for id in tree.preorder() {
            assert_eq!(tree[id].x_dist, 0.0);
        }
    }
}
