//! Public standard-trie type: one edge per Unicode scalar value, no label
//! splitting or coalescing. A tempting optimization would cache the node
//! path across adjacent, sorted batch words to reuse their longest common
//! prefix without re-walking from the root, but doing that safely in Rust
//! needs an arena of nodes addressed by index rather than a tree of owned
//! `Box`es: retaining a live `&mut` into one word's path while starting the
//! next word's descent from partway down it doesn't satisfy the borrow
//! checker. `batch_insert`/`batch_delete` here instead call the single-word
//! operation once per prepared word — same result, same asymptotic work in
//! total characters touched, just without the adjacent-word path cache.

mod iter;
mod node;

pub use iter::EnumeratePrefix;

use node::StdNode;

use crate::dictionary::{PrefixLocation, PrefixTrie};
use crate::error::TrieError;
use crate::normalize::Normalizer;
use crate::prepare::{prepare, prepare_checked};

/// In-memory standard (character-per-edge) trie over Unicode string keys.
#[derive(Debug)]
pub struct StandardTrie {
    root: StdNode,
    len: usize,
    normalizer: Normalizer,
}

impl StandardTrie {
    pub fn new() -> Self {
        StandardTrie {
            root: StdNode::default(),
            len: 0,
            normalizer: Normalizer::default(),
        }
    }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        StandardTrie {
            normalizer,
            ..StandardTrie::new()
        }
    }

    fn locate<'a>(&'a self, query: &str) -> Option<&'a StdNode> {
        let mut node = &self.root;
        for ch in query.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Stream every stored key beginning with `prefix`, in the child map's
    /// internal order.
    pub fn enumerate_prefix(&self, prefix: &str, limit: Option<usize>) -> EnumeratePrefix<'_> {
        if limit == Some(0) {
            return EnumeratePrefix::empty(limit);
        }
        let normalized = self.normalizer.apply(prefix);
        match self.locate(&normalized) {
            None => EnumeratePrefix::empty(limit),
            Some(node) => EnumeratePrefix::starting_at(node, normalized, limit),
        }
    }

    /// Insert every word in `words` after running it through the batch
    /// preparator.
    pub fn batch_insert(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        dedup: bool,
        presorted: bool,
    ) {
        for w in prepare(words, &self.normalizer, dedup, presorted) {
            self.insert_normalized(&w);
        }
    }

    /// Same contract as [`StandardTrie::batch_insert`], but reports a
    /// `presorted: true` claim over genuinely unsorted input as
    /// [`TrieError::InvalidArgument`].
    pub fn batch_insert_checked(
        &mut self,
        words: impl IntoIterator<Item = impl AsRef<str>>,
        dedup: bool,
        presorted: bool,
    ) -> Result<(), TrieError> {
        for w in prepare_checked(words, &self.normalizer, dedup, presorted)? {
            self.insert_normalized(&w);
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
            if self.delete_normalized(&w) {
                deleted += 1;
            } else {
                missing += 1;
            }
        }
        (deleted, missing)
    }

    fn insert_normalized(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        let was_new = !node.terminal;
        node.terminal = true;
        if was_new {
            self.len += 1;
        }
        was_new
    }

    fn delete_normalized(&mut self, word: &str) -> bool {
        // Collect the path of characters first so the removal/pruning pass
        // doesn't need to re-walk from the root; pruning only ever walks
        // strictly upward once the key itself is confirmed present.
        let mut path_chars: Vec<char> = Vec::with_capacity(word.chars().count());
        {
            let mut node = &self.root;
            for ch in word.chars() {
                match node.child(ch) {
                    Some(child) => {
                        path_chars.push(ch);
                        node = child;
                    }
                    None => return false,
                }
            }
            if !node.terminal {
                return false;
            }
        }

        // Re-descend mutably to unset the terminal flag, then prune
        // upward via a second, root-to-leaf mutable pass per level.
        {
            let mut node = &mut self.root;
            for &ch in &path_chars {
                node = node.child_mut(ch).expect("path was just verified to exist");
            }
            node.terminal = false;
        }
        self.len -= 1;

        prune_path(&mut self.root, &path_chars);
        true
    }
}

/// Walk `path` from the root, pruning any trailing run of non-terminal,
/// childless nodes. Recursion depth is bounded by `path.len()`.
fn prune_path(node: &mut StdNode, path: &[char]) -> bool {
    let Some((&ch, rest)) = path.split_first() else {
        // `node` is the word's own terminal node; the caller already
        // cleared its flag. Report whether it's now safe to prune.
        return !node.terminal && node.degree() == 0;
    };

    let child_prunable = {
        let child = node.child_mut(ch).expect("path element must exist");
        prune_path(child, rest)
    };

    if child_prunable {
        node.remove_child(ch);
    }

    !node.terminal && node.degree() == 0
}

impl Default for StandardTrie {
    fn default() -> Self {
        StandardTrie::new()
    }
}

impl PrefixTrie for StandardTrie {
    fn insert(&mut self, word: &str) {
        let normalized = self.normalizer.apply(word);
        self.insert_normalized(&normalized);
    }

    fn delete(&mut self, word: &str) -> bool {
        let normalized = self.normalizer.apply(word);
        self.delete_normalized(&normalized)
    }

    fn search(&self, word: &str) -> bool {
        let normalized = self.normalizer.apply(word);
        matches!(self.locate(&normalized), Some(node) if node.terminal)
    }

    fn prefix_locate(&self, prefix: &str) -> Option<PrefixLocation> {
        let normalized = self.normalizer.apply(prefix);
        self.locate(&normalized)
            .map(|node| PrefixLocation::boundary(node.terminal))
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
