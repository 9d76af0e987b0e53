//! Node substrate for the standard (character-per-edge) trie. Unlike the
//! compressed variant, every edge carries exactly one `char`, so there is no
//! edge-splitting to do on insert and no adaptive container: a
//! lazily-created `HashMap` is enough, leaving `children` as `None` until a
//! node's first child is added.

use std::collections::HashMap;

/// A single-character-edge trie node. `children` stays `None` until the
/// first child is attached, keeping leaf nodes cheap.
#[derive(Debug, Default)]
pub(crate) struct StdNode {
    pub(crate) terminal: bool,
    pub(crate) children: Option<HashMap<char, Box<StdNode>>>,
}

impl StdNode {
    pub(crate) fn child(&self, ch: char) -> Option<&StdNode> {
        self.children.as_ref()?.get(&ch).map(|b| b.as_ref())
    }

    pub(crate) fn child_mut(&mut self, ch: char) -> Option<&mut StdNode> {
        self.children.as_mut()?.get_mut(&ch).map(|b| b.as_mut())
    }

    /// Get the child for `ch`, creating it (and the `children` map, if this
    /// is the node's first child) if it doesn't already exist.
    pub(crate) fn child_or_insert(&mut self, ch: char) -> &mut StdNode {
        self.children
            .get_or_insert_with(HashMap::new)
            .entry(ch)
            .or_insert_with(|| Box::new(StdNode::default()))
            .as_mut()
    }

    pub(crate) fn degree(&self) -> usize {
        self.children.as_ref().map_or(0, |c| c.len())
    }

    pub(crate) fn remove_child(&mut self, ch: char) {
        if let Some(children) = self.children.as_mut() {
            children.remove(&ch);
            if children.is_empty() {
                self.children = None;
            }
        }
    }

    pub(crate) fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|c| c.values())
            .map(|child| child.count_nodes())
            .sum::<usize>()
    }

    pub(crate) fn branching_stats(&self, acc: &mut (usize, usize)) {
        if let Some(children) = &self.children {
            if !children.is_empty() {
                acc.0 += 1;
                acc.1 += children.len();
            }
            for child in children.values() {
                child.branching_stats(acc);
            }
        }
    }
}
