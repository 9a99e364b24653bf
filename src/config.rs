use crate::consts::{DEFAULT_IMPROVEMENT_THRESHOLD, DEFAULT_MAX_ROUNDS};
use crate::error::{SteckerError, StResult};
use crate::machine::{MachineConfig, RotorSetting};
use clap::Args;
use std::path::PathBuf;

/// Machine settings as given on the command line. Anything left out falls
/// back to the machine file (if any) and then to the built-in defaults.
///
/// List flags take one quoted value (`--rotors "I II III"`) or repeat
/// (`--rotors I --rotors II`), so they never swallow the message text.
#[derive(Args, Debug, Clone, Default)]
pub struct MachineArgs {
    /// Rotors, left to right. Supported: I-VIII, Beta, Gamma.
    #[arg(long, num_args = 1, value_delimiter = ' ')]
    pub rotors: Vec<String>,

    /// Ring settings (1-26), one per rotor.
    #[arg(long, num_args = 1, value_delimiter = ' ')]
    pub rings: Vec<u8>,

    /// Starting window letters (A-Z), one per rotor.
    #[arg(long, num_args = 1, value_delimiter = ' ')]
    pub position: Vec<String>,

    /// Reflector. Supported: A, B, C, B-Thin, C-Thin.
    #[arg(long)]
    pub reflector: Option<String>,

    /// JSON machine definition used as the base for the flags above.
    #[arg(long)]
    pub machine: Option<PathBuf>,
}

impl MachineArgs {
    pub fn resolve(&self) -> StResult<MachineConfig> {
        let base = match &self.machine {
            Some(path) => MachineConfig::load_from_file(path)?,
            None => MachineConfig::default(),
        };

        // New rotors without rings/positions get neutral settings; the base
        // settings only apply to the base rotors.
        let rotors_given = !self.rotors.is_empty();
        let names: Vec<String> = if rotors_given {
            self.rotors.clone()
        } else {
            base.rotors.iter().map(|r| r.rotor.clone()).collect()
        };
        let count = names.len();

        let rings: Vec<u8> = if !self.rings.is_empty() {
            self.rings.clone()
        } else if rotors_given {
            vec![1; count]
        } else {
            base.rotors.iter().map(|r| r.ring).collect()
        };

        let positions: Vec<char> = if !self.position.is_empty() {
            self.position
                .iter()
                .map(|p| parse_position(p))
                .collect::<StResult<_>>()?
        } else if rotors_given {
            vec!['A'; count]
        } else {
            base.rotors.iter().map(|r| r.position).collect()
        };

        if rings.len() != count || positions.len() != count {
            return Err(SteckerError::InvalidConfig(format!(
                "{} rotors need {} ring settings and {} positions, got {} and {}",
                count,
                count,
                count,
                rings.len(),
                positions.len()
            )));
        }

        let rotors = names
            .iter()
            .zip(rings)
            .zip(positions)
            .map(|((name, ring), position)| RotorSetting::new(name, ring, position))
            .collect();

        Ok(MachineConfig {
            rotors,
            reflector: self.reflector.clone().unwrap_or(base.reflector),
        })
    }
}

fn parse_position(raw: &str) -> StResult<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_ascii_uppercase()),
        _ => Err(SteckerError::InvalidConfig(format!(
            "rotor position '{}' must be a single letter",
            raw
        ))),
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Maximum number of rounds; each round commits at most one pair.
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub rounds: usize,

    /// Only results scoring above this index of coincidence are reported.
    #[arg(long, default_value_t = DEFAULT_IMPROVEMENT_THRESHOLD)]
    pub threshold: f64,

    /// Score the pairs of each round on all cores.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Stop starting new rounds after this many seconds.
    #[arg(short = 'T', long)]
    pub time: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_MAX_ROUNDS,
            threshold: DEFAULT_IMPROVEMENT_THRESHOLD,
            parallel: false,
            time: None,
        }
    }
}
