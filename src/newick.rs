//! Single-pass newick topology parser.
//!
//! Parses the topology string embedded in an UShER protobuf, and reads back
//! the time tree written by chronumental. The parser is iterative (depth is
//! bounded only by the input) and creates nodes in the exact order a preorder
//! traversal visits them: parents before children, siblings left to right.
//! The decoder relies on that invariant to line nodes up with the per-node
//! mutation arrays.

use anyhow::{bail, Result};

use crate::tree::{NodeId, Tree};

const DELIMITERS: &[u8] = b"(),:;";

/// Parses a single newick tree. Labels end at any structural character or
/// whitespace; branch lengths follow `:` as decimal numbers.
pub fn parse(text: &str) -> Result<Tree> {
    let bytes = text.as_bytes();
    let mut tree = Tree::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut cur = tree.root();
    let mut i = 0;
    let mut terminated = false;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                stack.push(cur);
                cur = tree.add_child(cur);
                i += 1;
            }
            b',' => {
                let parent = match stack.last() {
                    Some(&p) => p,
                    None => bail!("malformed newick: ',' outside any group at byte {i}"),
                };
                cur = tree.add_child(parent);
                i += 1;
            }
            b')' => {
                cur = match stack.pop() {
                    Some(p) => p,
                    None => bail!("malformed newick: unbalanced ')' at byte {i}"),
                };
                i += 1;
            }
            b':' => {
                i += 1;
                let start = i;
                while i < bytes.len() && !DELIMITERS.contains(&bytes[i]) {
                    i += 1;
                }
                let raw = text[start..i].trim();
                let length: f64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("malformed newick: bad branch length {raw:?}"))?;
                tree[cur].branch_length = length;
            }
            b';' => {
                terminated = true;
                i += 1;
                break;
            }
            c if c.is_ascii_whitespace() => i += 1,
            _ => {
                let start = i;
                while i < bytes.len()
                    && !DELIMITERS.contains(&bytes[i])
                    && !bytes[i].is_ascii_whitespace()
                {
                    i += 1;
                }
                tree[cur].label = text[start..i].to_string();
            }
        }
    }

    if !stack.is_empty() {
        bail!("malformed newick: {} unclosed group(s)", stack.len());
    }
    if !terminated {
        bail!("malformed newick: missing terminating ';'");
    }
    if text[i..].bytes().any(|b| !b.is_ascii_whitespace()) {
        bail!("malformed newick: trailing content after ';'");
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_lengths() {
        let tree = parse("(A:1,(B:2,C:3)D:4)root:0;\n").unwrap();
        let order = tree.preorder();
        let labels: Vec<&str> = order.iter().map(|&id| tree[id].label.as_str()).collect();
        assert_eq!(labels, vec!["root", "A", "D", "B", "C"]);
        let lengths: Vec<f64> = order.iter().map(|&id| tree[id].branch_length).collect();
        assert_eq!(lengths, vec![0.0, 1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn creation_order_equals_preorder() {
        // The decoder indexes mutation lists by this correspondence.
        let tree = parse("((A,B)C,(D,(E,F)G)H)R;").unwrap();
        let order = tree.preorder();
        assert_eq!(order, (0..tree.arena_len()).collect::<Vec<_>>());
    }

    #[test]
    fn single_leaf_tree() {
        let tree = parse("only;").unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree[tree.root()].label, "only");
    }

    #[test]
    fn rejects_unbalanced_input() {
        assert!(parse("((A,B);").is_err());
        assert!(parse("(A,B));").is_err());
        assert!(parse("(A,B)").is_err());
        assert!(parse("(A,B); extra").is_err());
        assert!(parse("(A:x,B);").is_err());
    }

    #[test]
    fn round_trips_through_writer() {
        let text = "((A1:2,A2:0)A:0,B:5)R:0;";
        let tree = parse(text).unwrap();
        assert_eq!(tree.to_newick(), text);
    }
}
