//! Deletion with upward pruning and coalescing.
//!
//! Recursion depth is bounded by the number of Unicode scalar values in the
//! deleted key, not by the number of keys in the trie, so a plain recursive
//! walk is simple and safe here even though it wouldn't be for something
//! sized by the whole tree. Each frame deletes in its child first, then —
//! using only the child's post-deletion `terminal`/`degree()` state —
//! decides whether to leave it alone, prune it, or coalesce it into its own
//! edge.

use super::node::Node;
use crate::compressed::TrieConfig;

/// Delete `remaining` from the subtree rooted at `node`. Returns whether a
/// key was actually removed.
pub(crate) fn delete_rec(node: &mut Node, remaining: &str, config: &TrieConfig) -> bool {
    if remaining.is_empty() {
        if !node.terminal {
            return false;
        }
        node.terminal = false;
        return true;
    }

    let ch = super::node::first_char(remaining);
    let label_len = match node.edges.lookup(ch) {
        Some((label, _)) => {
            let matched = super::node::common_prefix_len(remaining, label);
            if matched != label.len() {
                return false;
            }
            label.len()
        }
        None => return false,
    };

    let suffix = &remaining[label_len..];
    let deleted = {
        let (_, child) = node.edges.lookup_mut(ch).unwrap();
        delete_rec(child.as_mut(), suffix, config)
    };
    if !deleted {
        return false;
    }

    let (_, child) = node.edges.lookup(ch).unwrap();
    if child.terminal {
        // Still a stored key in its own right: leave the edge as-is.
        return true;
    }

    match child.edges.degree() {
        0 => {
            // Dead end: the edge led nowhere useful anymore.
            node.edges.remove(ch, config.fanout_switch);
        }
        1 => {
            // Unary passthrough: merge the edge into its sole child's edge
            // so no node is left with exactly one outgoing edge.
            let (in_label, mut child) = node.edges.remove(ch, config.fanout_switch).unwrap();
            let (sole_label, grandchild) = child.edges.take_only().unwrap();
            let mut merged = String::with_capacity(in_label.len() + sole_label.len());
            merged.push_str(&in_label);
            merged.push_str(&sole_label);
            node.edges
                .set(merged.into_boxed_str(), grandchild, config.fanout_switch);
        }
        _ => {
            // Still branches two or more ways: nothing to coalesce.
        }
    }

    true
}
