use crate::alphabet::Letter;
use crate::consts::{ALPHABET_LEN, MAX_PLUG_PAIRS};
use crate::error::{SteckerError, StResult};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A plugboard cable joining two distinct letters. Unordered: the lower letter
/// is always stored first, so `BA` and `AB` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlugPair {
    lo: Letter,
    hi: Letter,
}

impl PlugPair {
    pub fn new(a: Letter, b: Letter) -> StResult<Self> {
        if a == b {
            return Err(SteckerError::InvalidConfig(format!(
                "cannot plug {} to itself",
                a
            )));
        }
        Ok(Self::ordered(a, b))
    }

    // Callers guarantee a != b.
    pub(crate) fn ordered(a: Letter, b: Letter) -> Self {
        debug_assert_ne!(a, b);
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn letters(self) -> (Letter, Letter) {
        (self.lo, self.hi)
    }

    pub fn contains(self, letter: Letter) -> bool {
        self.lo == letter || self.hi == letter
    }

    pub fn shares_letter(self, other: PlugPair) -> bool {
        self.contains(other.lo) || self.contains(other.hi)
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lo, self.hi)
    }
}

impl FromStr for PlugPair {
    type Err = SteckerError;

    fn from_str(s: &str) -> StResult<Self> {
        let token = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != 2 {
            return Err(SteckerError::InvalidConfig(format!(
                "plugboard pair '{}' must be exactly two letters",
                s
            )));
        }
        let a = Letter::from_char(chars[0]);
        let b = Letter::from_char(chars[1]);
        match (a, b) {
            (Some(a), Some(b)) => PlugPair::new(a, b),
            _ => Err(SteckerError::InvalidConfig(format!(
                "plugboard pair '{}' contains a non-letter",
                s
            ))),
        }
    }
}

impl Serialize for PlugPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered list of committed plugboard pairs. No letter appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Plugboard {
    pairs: Vec<PlugPair>,
}

impl Plugboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses tokens such as `["AB", "CD"]`. A single token may also hold
    /// several space-separated pairs.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> StResult<Self> {
        let mut board = Plugboard::new();
        for token in tokens {
            for part in token.as_ref().split_whitespace() {
                board.try_push(part.parse()?)?;
            }
        }
        Ok(board)
    }

    pub fn pairs(&self) -> &[PlugPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pairs.len() >= MAX_PLUG_PAIRS
    }

    pub fn contains_letter(&self, letter: Letter) -> bool {
        self.pairs.iter().any(|p| p.contains(letter))
    }

    pub fn try_push(&mut self, pair: PlugPair) -> StResult<()> {
        if let Some(clash) = self.pairs.iter().find(|p| p.shares_letter(pair)) {
            return Err(SteckerError::InvalidConfig(format!(
                "pair {} reuses a letter already plugged by {}",
                pair, clash
            )));
        }
        self.pairs.push(pair);
        Ok(())
    }

    /// Copy of this board with one more pair, used to build trial boards.
    pub fn with_pair(&self, pair: PlugPair) -> StResult<Self> {
        let mut trial = self.clone();
        trial.try_push(pair)?;
        Ok(trial)
    }

    /// Involutive substitution table; unplugged letters map to themselves.
    pub fn wiring(&self) -> [u8; ALPHABET_LEN] {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for pair in &self.pairs {
            let (a, b) = pair.letters();
            table[a.index()] = b.index() as u8;
            table[b.index()] = a.index() as u8;
        }
        table
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}

impl From<Plugboard> for Vec<String> {
    fn from(board: Plugboard) -> Self {
        board.pairs.iter().map(|p| p.to_string()).collect()
    }
}

impl TryFrom<Vec<String>> for Plugboard {
    type Error = SteckerError;

    fn try_from(tokens: Vec<String>) -> StResult<Self> {
        Plugboard::parse(&tokens)
    }
}
