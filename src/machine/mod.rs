//! Machine configuration and the cipher oracle the search drives.

pub mod enigma;
pub mod wiring;

pub use self::enigma::Enigma;

use crate::error::StResult;
use crate::plugboard::Plugboard;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One rotor slot: which rotor, its ring setting (1-26) and the letter
/// showing in the window at the start of the message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RotorSetting {
    pub rotor: String,
    pub ring: u8,
    pub position: char,
}

impl RotorSetting {
    pub fn new(rotor: &str, ring: u8, position: char) -> Self {
        Self {
            rotor: rotor.to_string(),
            ring,
            position,
        }
    }
}

/// Everything about the machine except the plugboard. Rotors are listed left
/// to right; the rightmost rotor steps fastest.
///
/// Identifiers are kept as strings and checked when an oracle builds a
/// machine from them, so a bad configuration surfaces as `InvalidConfig` from
/// the oracle call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub rotors: Vec<RotorSetting>,
    pub reflector: String,
}

impl Default for MachineConfig {
    /// Four-rotor naval setting used when no machine is given.
    fn default() -> Self {
        Self {
            rotors: vec![
                RotorSetting::new("Gamma", 1, 'D'),
                RotorSetting::new("VI", 1, 'A'),
                RotorSetting::new("IV", 1, 'B'),
                RotorSetting::new("III", 16, 'Q'),
            ],
            reflector: "C-Thin".to_string(),
        }
    }
}

impl MachineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> StResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Encodes text on a fixed machine with a given plugboard.
///
/// Implementations must be deterministic and free of shared mutable state:
/// the search calls them once per candidate pair, possibly from several
/// threads. Rotor machines of this family are self-inverse, so `encode` also
/// decodes.
pub trait CipherOracle: Sync {
    fn encode(&self, text: &str, machine: &MachineConfig, plugboard: &Plugboard)
        -> StResult<String>;
}

/// Oracle backed by the built-in Enigma simulator. A fresh machine is built
/// for each call, so every call starts from the configured positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnigmaOracle;

impl CipherOracle for EnigmaOracle {
    fn encode(
        &self,
        text: &str,
        machine: &MachineConfig,
        plugboard: &Plugboard,
    ) -> StResult<String> {
        Enigma::new(machine, plugboard)?.encode(text)
    }
}

impl<F> CipherOracle for F
where
    F: Fn(&str, &MachineConfig, &Plugboard) -> StResult<String> + Sync,
{
    fn encode(
        &self,
        text: &str,
        machine: &MachineConfig,
        plugboard: &Plugboard,
    ) -> StResult<String> {
        self(text, machine, plugboard)
    }
}
