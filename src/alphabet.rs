use crate::consts::ALPHABET_LEN;
use crate::error::{SteckerError, StResult};
use crate::plugboard::PlugPair;
use std::fmt;

/// One of the 26 letters `A`..=`Z`, stored as its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Wraps a value read from a 26-entry substitution table.
    #[inline(always)]
    pub(crate) fn from_table(index: u8) -> Self {
        debug_assert!((index as usize) < ALPHABET_LEN);
        Letter(index)
    }

    /// Only uppercase ASCII letters are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).filter_map(Letter::from_index)
    }
}

impl TryFrom<char> for Letter {
    type Error = SteckerError;

    fn try_from(c: char) -> StResult<Self> {
        Letter::from_char(c)
            .ok_or_else(|| SteckerError::InvalidInput(format!("'{}' is not a letter A-Z", c)))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The letters not yet committed to a plugboard pair, kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<Letter>,
}

impl Alphabet {
    pub fn full() -> Self {
        Self {
            letters: Letter::all().collect(),
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    /// Every unordered pair of remaining letters, `m` before `n`, ascending.
    /// This order is the tie-break order of a search round.
    pub fn pairs(&self) -> Vec<PlugPair> {
        let n = self.letters.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for (i, &m) in self.letters.iter().enumerate() {
            for &other in &self.letters[i + 1..] {
                pairs.push(PlugPair::ordered(m, other));
            }
        }
        pairs
    }

    /// Removes both letters of a committed pair. Fails if either letter was
    /// already taken.
    pub fn remove_pair(&mut self, pair: PlugPair) -> StResult<()> {
        let (a, b) = pair.letters();
        if !self.contains(a) || !self.contains(b) {
            return Err(SteckerError::InvalidConfig(format!(
                "pair {} uses a letter that is already plugged",
                pair
            )));
        }
        self.letters.retain(|&l| l != a && l != b);
        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::full()
    }
}
