//! The normalizer contract: a pure, idempotent function from keys to keys,
//! applied once per key (single operations) or once per batch (bulk
//! operations via [`crate::prepare`]).

use std::fmt;

use caseless::default_case_fold_str;
use unicode_normalization::UnicodeNormalization;

/// A boxed normalizer function. Stored at trie construction time rather than
/// threaded through every call, so internal helpers that already hold a
/// normalized key never re-normalize it.
pub struct Normalizer(Box<dyn Fn(&str) -> String + Send + Sync>);

impl Normalizer {
    /// Wrap an arbitrary normalization function. Callers are responsible for
    /// idempotence: `f(f(x)) == f(x)` for all `x`.
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Normalizer(Box::new(f))
    }

    /// Unicode case folding (the default normalizer). Composes to NFC after
    /// folding so that repeated application is stable for the inputs this
    /// crate is expected to see.
    pub fn case_fold() -> Self {
        Normalizer::new(case_fold)
    }

    /// The identity normalizer, useful for callers who pre-normalize their
    /// own corpus and don't want case folding applied at all.
    pub fn identity() -> Self {
        Normalizer::new(|s: &str| s.to_owned())
    }

    #[inline]
    pub fn apply(&self, s: &str) -> String {
        (self.0)(s)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::case_fold()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Normalizer(..)")
    }
}

fn case_fold(input: &str) -> String {
    let folded = default_case_fold_str(input);
    folded.nfc().collect()
}
