//! Batch preparation: normalizes, optionally sorts, and optionally
//! deduplicates a batch of strings before it is threaded through a bulk
//! mutator. Sorting once lets `batch_insert`/`batch_delete` reuse
//! longest-common-prefix work across adjacent keys instead of re-walking the
//! trie from the root for every key.

use crate::error::TrieError;
use crate::normalize::Normalizer;

/// Normalize, optionally sort, and optionally dedup a batch of words.
///
/// Never fails: if `presorted` is asserted over unsorted input, behavior is
/// the documented precondition violation (undefined downstream shape, not a
/// panic or a corrupted trie) — use [`prepare_checked`] if you want that
/// caught instead of silently tolerated.
pub fn prepare(
    words: impl IntoIterator<Item = impl AsRef<str>>,
    normalize: &Normalizer,
    dedup: bool,
    presorted: bool,
) -> Vec<String> {
    let items = words.into_iter().map(|w| normalize.apply(w.as_ref()));

    if !presorted {
        let mut v: Vec<String> = items.collect();
        v.sort_unstable();
        if dedup {
            v.dedup();
        }
        return v;
    }

    if dedup {
        let mut out: Vec<String> = Vec::new();
        for w in items {
            if out.last().map(|last| last != &w).unwrap_or(true) {
                out.push(w);
            }
        }
        out
    } else {
        items.collect()
    }
}

/// Same contract as [`prepare`], but when `presorted` is asserted the single
/// linear pass that would otherwise just dedup also checks order, returning
/// [`TrieError::InvalidArgument`] at the first inversion instead of silently
/// processing a malformed batch.
pub fn prepare_checked(
    words: impl IntoIterator<Item = impl AsRef<str>>,
    normalize: &Normalizer,
    dedup: bool,
    presorted: bool,
) -> Result<Vec<String>, TrieError> {
    let items: Vec<String> = words.into_iter().map(|w| normalize.apply(w.as_ref())).collect();

    if !presorted {
        let mut v = items;
        v.sort_unstable();
        if dedup {
            v.dedup();
        }
        return Ok(v);
    }

    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for (i, w) in items.into_iter().enumerate() {
        if let Some(last) = out.last() {
            if *last > w {
                return Err(TrieError::InvalidArgument { index: i });
            }
            if dedup && *last == w {
                continue;
            }
        }
        out.push(w);
    }
    Ok(out)
}
