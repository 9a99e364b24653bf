/// Number of letters on the keyboard, lampboard and plugboard.
pub const ALPHABET_LEN: usize = 26;

/// A plugboard can hold at most one cable per two letters.
pub const MAX_PLUG_PAIRS: usize = ALPHABET_LEN / 2;

/// Default number of hill-climbing rounds (one committed pair per round).
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Scores at or below this are too close to random text (~0.038) to be worth
/// surfacing to the user.
pub const DEFAULT_IMPROVEMENT_THRESHOLD: f64 = 0.05;

/// Expected index of coincidence of uniformly random letters (1/26).
pub const RANDOM_TEXT_IOC: f64 = 1.0 / ALPHABET_LEN as f64;

/// Valid ring setting range (Ringstellung), inclusive.
pub const RING_MIN: u8 = 1;
pub const RING_MAX: u8 = 26;
