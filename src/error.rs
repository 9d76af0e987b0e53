use thiserror::Error;

/// Errors raised by the batch preparator and other caller-facing validation.
///
/// The dictionary core itself never raises these: empty keys and very long
/// keys are valid, and "not found" is always signaled through a return
/// value, never an error. The one real precondition a caller can violate is
/// claiming `presorted: true` over input that is not in fact sorted under
/// the active normalizer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// `presorted: true` was asserted but the input was not sorted under the
    /// normalizer in effect. Carries the index of the first out-of-order
    /// element for diagnostics.
    #[error("batch claimed presorted=true but input is unsorted at index {index}")]
    InvalidArgument {
        /// Index into the normalized input where ordering first broke.
        index: usize,
    },
}
