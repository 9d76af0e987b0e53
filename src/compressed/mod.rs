//! Public compressed-trie type.
//!
//! Ties together the node/edge substrate (`node`), the prefix-locating walk
//! shared by `search`/`prefix_locate`/`enumerate_prefix` (`traverse`), the
//! loop-based edge-splitting insert defined on `Node` itself, the recursive
//! delete with upward coalescing (`delete`), and the streaming enumeration
//! iterator (`iter`).

mod delete;
mod iter;
mod node;
mod traverse;

pub use iter::EnumeratePrefix;

use node::Node;
use traverse::Landing;

use crate::dictionary::{PrefixLocation, PrefixTrie};
use crate::error::TrieError;
use crate::normalize::Normalizer;
use crate::prepare::{prepare, prepare_checked};

/// Tunable structural parameters. The only knob is the
/// fanout threshold at which an edge container promotes from a sparse `Vec`
/// to a dense `HashMap`; demotion happens two entries below that threshold,
/// so a container sitting right at the boundary doesn't flip shape on every
/// insert/delete pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieConfig {
    pub fanout_switch: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig { fanout_switch: 8 }
    }
}

/// In-memory compressed (radix/Patricia) trie over Unicode string keys:
/// each edge is labeled with a whole substring rather
/// than a single character, so a chain of nodes each with exactly one child
/// never arises — insert splits an edge where two keys diverge, delete
/// merges one back where a branch disappears.
#[derive(Debug)]
pub struct CompressedTrie {
    root: Node,
    len: usize,
    config: TrieConfig,
    normalizer: Normalizer,
}

impl CompressedTrie {
    /// A new, empty trie using the default fanout threshold and the default
    /// (case-folding) normalizer.
    pub fn new() -> Self {
        CompressedTrie {
            root: Node::default(),
            len: 0,
            config: TrieConfig::default(),
            normalizer: Normalizer::default(),
        }
    }

    /// A new, empty trie with a caller-chosen fanout threshold.
    pub fn with_config(config: TrieConfig) -> Self {
        CompressedTrie {
            config,
            ..CompressedTrie::new()
        }
    }

    /// A new, empty trie with a caller-chosen normalizer, chosen once at
    /// construction rather than per call.
    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        CompressedTrie {
            normalizer,
            ..CompressedTrie::new()
        }
    }

    /// Stream every stored key beginning with `prefix`, in the edge
    /// container's internal order — no lexicographic guarantee. `limit`
    /// caps the number of keys produced; `Some(0)` yields nothing without
    /// even walking to the prefix.
    pub fn enumerate_prefix(&self, prefix: &str, limit: Option<usize>) -> EnumeratePrefix<'_> {
        if limit == Some(0) {
            return EnumeratePrefix::empty(limit);
        }
        let normalized = self.normalizer.apply(prefix);
        match traverse::locate(&self.root, &normalized) {
            Landing::Absent => EnumeratePrefix::empty(limit),
            Landing::Boundary(node) => EnumeratePrefix::starting_at(node, normalized, limit),
            Landing::MidEdge { child, pending } => {
                let mut buf = normalized;
                buf.push_str(pending);
                EnumeratePrefix::starting_at(child, buf, limit)
            }
        }
    }

    /// Insert every word in `words` after running it through the batch
    /// preparator. `presorted` is a caller-asserted
    /// precondition, not verified here; violating it yields an unspecified
    /// but non-corrupting result. See [`CompressedTrie::batch_insert_checked`]
    /// to have the violation reported as an error instead.
    pub fn batch_insert(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        dedup: bool,
        presorted: bool,
    ) {
        for w in prepare(words, &self.normalizer, dedup, presorted) {
            if self.root.insert(&w, self.config.fanout_switch) {
                self.len += 1;
            }
        }
    }

    /// Same contract as [`CompressedTrie::batch_insert`], but a
    /// `presorted: true` claim over genuinely unsorted input is reported as
    /// [`TrieError::InvalidArgument`] instead of silently tolerated.
    pub fn batch_insert_checked(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        dedup: bool,
        presorted: bool,
    ) -> Result<(), TrieError> {
        for w in prepare_checked(words, &self.normalizer, dedup, presorted)? {
            if self.root.insert(&w, self.config.fanout_switch) {
                self.len += 1;
            }
        }
        Ok(())
    }

    /// Delete every word in `words`, returning `(deleted, missing)`: how
    /// many were actually present and removed, and how many were not found.
    pub fn batch_delete(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        dedup: bool,
        presorted: bool,
    ) -> (usize, usize) {
        let mut deleted = 0;
        let mut missing = 0;
        for w in prepare(words, &self.normalizer, dedup, presorted) {
            if self.delete(&w) {
                deleted += 1;
            } else {
                missing += 1;
            }
        }
        (deleted, missing)
    }
}

impl Default for CompressedTrie {
    fn default() -> Self {
        CompressedTrie::new()
    }
}

impl PrefixTrie for CompressedTrie {
    fn insert(&mut self, word: &str) {
        let normalized = self.normalizer.apply(word);
        if self.root.insert(&normalized, self.config.fanout_switch) {
            self.len += 1;
        }
    }

    fn delete(&mut self, word: &str) -> bool {
        let normalized = self.normalizer.apply(word);
        let removed = delete::delete_rec(&mut self.root, &normalized, &self.config);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn search(&self, word: &str) -> bool {
        let normalized = self.normalizer.apply(word);
        matches!(
            traverse::locate(&self.root, &normalized),
            Landing::Boundary(node) if node.terminal
        )
    }

    fn prefix_locate(&self, prefix: &str) -> Option<PrefixLocation> {
        let normalized = self.normalizer.apply(prefix);
        match traverse::locate(&self.root, &normalized) {
            Landing::Absent => None,
            Landing::Boundary(node) => Some(PrefixLocation::boundary(node.terminal)),
            Landing::MidEdge { child, pending } => {
                Some(PrefixLocation::mid_edge(child.terminal, pending.to_string()))
            }
        }
    }

    fn count_nodes(&self) -> usize {
        self.root.count_nodes()
    }

    fn avg_branching(&self) -> f64 {
        let mut acc = (0usize, 0usize);
        self.root.branching_stats(&mut acc);
        let (internal, total_degree) = acc;
        if internal == 0 {
            0.0
        } else {
            total_degree as f64 / internal as f64
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
