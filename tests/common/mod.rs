#![allow(dead_code)]

use stecker::alphabet::Letter;
use stecker::error::{SteckerError, StResult};
use stecker::machine::{MachineConfig, RotorSetting};
use stecker::plugboard::{PlugPair, Plugboard};
use stecker::text::sanitize;

/// Opening of A Tale of Two Cities, 319 letters once sanitized. IoC ≈ 0.0738.
pub const TWO_CITIES: &str = "It was the best of times, it was the worst of times, it was the age \
    of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
    incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
    of hope, it was the winter of despair, we had everything before us, we had nothing before \
    us, we were all going direct to Heaven, we were all going direct the other way";

pub fn plaintext() -> String {
    sanitize(TWO_CITIES)
}

pub fn pair(token: &str) -> PlugPair {
    token.parse().unwrap()
}

pub fn board(tokens: &[&str]) -> Plugboard {
    Plugboard::parse(tokens).unwrap()
}

pub fn letter(c: char) -> Letter {
    Letter::from_char(c).unwrap()
}

/// Enigma I with rotors I II III, reflector B.
pub fn enigma_i(rings: [u8; 3], positions: &str) -> MachineConfig {
    let names = ["I", "II", "III"];
    MachineConfig {
        rotors: names
            .iter()
            .zip(rings)
            .zip(positions.chars())
            .map(|((name, ring), pos)| RotorSetting::new(name, ring, pos))
            .collect(),
        reflector: "B".to_string(),
    }
}

/// A text of `len` letters in which `A` occurs `a_count` times and every
/// other letter at most once, so its IoC is a(a-1) / (len(len-1)).
pub fn text_with_repeats(a_count: usize, len: usize) -> String {
    assert!(a_count >= 1 && len - a_count <= 25);
    let mut text = "A".repeat(a_count);
    text.extend(('B'..='Z').take(len - a_count));
    text
}

/// Oracle output depends only on how long a prefix of `script` the plugboard
/// matches: k matched pairs yield `text_with_repeats(repeats[k], len)`.
pub fn scripted_oracle(
    script: Vec<PlugPair>,
    repeats: Vec<usize>,
    len: usize,
) -> impl Fn(&str, &MachineConfig, &Plugboard) -> StResult<String> + Sync {
    move |_text: &str, _machine: &MachineConfig, board: &Plugboard| {
        let matched = board
            .pairs()
            .iter()
            .zip(&script)
            .take_while(|(a, b)| a == b)
            .count();
        let matched = if matched == board.len() { matched } else { 0 };
        Ok(text_with_repeats(repeats[matched], len))
    }
}

pub fn failing_oracle(_text: &str, _machine: &MachineConfig, _board: &Plugboard) -> StResult<String> {
    Err(SteckerError::InvalidConfig("oracle offline".into()))
}
