//! Letter-frequency scoring.
//!
//! The search ranks candidate decryptions by their index of coincidence
//! (IoC): the probability that two letters drawn without replacement from the
//! text are equal. English plaintext sits around 0.066, uniformly random
//! letters around 1/26 ≈ 0.038.

use crate::alphabet::Letter;
use crate::consts::ALPHABET_LEN;
use crate::error::{SteckerError, StResult};

/// Histogram of the letters `A`..=`Z` in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u64; ALPHABET_LEN],
    len: u64,
}

impl LetterCounts {
    /// Counts every character of `text`. Anything outside `A`..=`Z` is
    /// rejected, not skipped; cleaning the text is the caller's job.
    pub fn from_text(text: &str) -> StResult<Self> {
        let mut counts = [0u64; ALPHABET_LEN];
        let mut len = 0u64;
        for (offset, c) in text.char_indices() {
            let letter = Letter::from_char(c).ok_or_else(|| {
                SteckerError::InvalidInput(format!(
                    "character {:?} at offset {} is not a letter A-Z",
                    c, offset
                ))
            })?;
            counts[letter.index()] += 1;
            len += 1;
        }
        Ok(Self { counts, len })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn count(&self, letter: Letter) -> u64 {
        self.counts[letter.index()]
    }

    /// Σ f·(f−1) / (L·(L−1)). Texts shorter than two letters have no defined
    /// IoC and yield `InvalidInput`.
    pub fn index_of_coincidence(&self) -> StResult<f64> {
        if self.len < 2 {
            return Err(SteckerError::InvalidInput(format!(
                "index of coincidence needs at least 2 letters, got {}",
                self.len
            )));
        }
        let coincidences: u64 = self.counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
        let pairs = self.len * (self.len - 1);
        Ok(coincidences as f64 / pairs as f64)
    }
}

/// Index of coincidence of an uppercase A-Z string.
///
/// Fails with `InvalidInput` when the text holds fewer than two letters or any
/// character outside `A`..=`Z`.
pub fn index_of_coincidence(text: &str) -> StResult<f64> {
    LetterCounts::from_text(text)?.index_of_coincidence()
}
