use super::wiring::{self, ReflectorKind, RotorKind};
use super::MachineConfig;
use crate::alphabet::Letter;
use crate::consts::{ALPHABET_LEN, RING_MAX, RING_MIN};
use crate::error::{SteckerError, StResult};
use crate::plugboard::Plugboard;
use std::str::FromStr;

const N: u8 = ALPHABET_LEN as u8;

#[derive(Debug, Clone)]
struct Wheel {
    kind: RotorKind,
    forward: [u8; ALPHABET_LEN],
    backward: [u8; ALPHABET_LEN],
    notches: [bool; ALPHABET_LEN],
    ring: u8,
    position: u8,
}

impl Wheel {
    fn new(kind: RotorKind, ring: u8, position: Letter) -> Self {
        let forward = wiring::to_table(kind.wiring());
        let backward = wiring::invert(&forward);
        let mut notches = [false; ALPHABET_LEN];
        for b in kind.notches().bytes() {
            notches[(b - b'A') as usize] = true;
        }
        Self {
            kind,
            forward,
            backward,
            notches,
            ring: ring - 1,
            position: position.index() as u8,
        }
    }

    #[inline(always)]
    fn at_notch(&self) -> bool {
        self.notches[self.position as usize]
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.position = (self.position + 1) % N;
    }

    #[inline(always)]
    fn offset(&self) -> u8 {
        (N + self.position - self.ring) % N
    }

    #[inline(always)]
    fn map_forward(&self, c: u8) -> u8 {
        let shift = self.offset();
        (self.forward[((c + shift) % N) as usize] + N - shift) % N
    }

    #[inline(always)]
    fn map_backward(&self, c: u8) -> u8 {
        let shift = self.offset();
        (self.backward[((c + shift) % N) as usize] + N - shift) % N
    }
}

/// A rotor machine in the Enigma I / M3 / M4 family.
///
/// Three-rotor machines take a thick reflector (A, B, C). Four-rotor machines
/// take a thin reflector and a Greek wheel (Beta, Gamma) in the leftmost
/// slot, which never steps.
#[derive(Debug, Clone)]
pub struct Enigma {
    // Left to right.
    wheels: Vec<Wheel>,
    reflector: [u8; ALPHABET_LEN],
    plugboard: [u8; ALPHABET_LEN],
}

impl Enigma {
    pub fn new(machine: &MachineConfig, plugboard: &Plugboard) -> StResult<Self> {
        let reflector = ReflectorKind::from_str(&machine.reflector).map_err(|_| {
            SteckerError::InvalidConfig(format!(
                "unknown reflector '{}' (supported: {})",
                machine.reflector,
                wiring::reflector_names().join(", ")
            ))
        })?;

        let count = machine.rotors.len();
        if count != 3 && count != 4 {
            return Err(SteckerError::InvalidConfig(format!(
                "expected 3 or 4 rotors, got {}",
                count
            )));
        }

        let mut wheels: Vec<Wheel> = Vec::with_capacity(count);
        for (slot, setting) in machine.rotors.iter().enumerate() {
            let kind = RotorKind::from_str(&setting.rotor).map_err(|_| {
                SteckerError::InvalidConfig(format!(
                    "unknown rotor '{}' (supported: {})",
                    setting.rotor,
                    wiring::rotor_names().join(", ")
                ))
            })?;
            if !(RING_MIN..=RING_MAX).contains(&setting.ring) {
                return Err(SteckerError::InvalidConfig(format!(
                    "ring setting {} of rotor {} is outside {}-{}",
                    setting.ring, kind, RING_MIN, RING_MAX
                )));
            }
            let position = Letter::from_char(setting.position.to_ascii_uppercase()).ok_or_else(
                || {
                    SteckerError::InvalidConfig(format!(
                        "start position {:?} of rotor {} is not a letter A-Z",
                        setting.position, kind
                    ))
                },
            )?;
            if wheels.iter().any(|w| w.kind == kind) {
                return Err(SteckerError::InvalidConfig(format!(
                    "rotor {} is used more than once",
                    kind
                )));
            }
            let greek_slot = count == 4 && slot == 0;
            if kind.is_greek() != greek_slot {
                return Err(SteckerError::InvalidConfig(if greek_slot {
                    format!("the leftmost rotor of a 4-rotor machine must be Beta or Gamma, got {}", kind)
                } else {
                    format!("rotor {} only fits the leftmost slot of a 4-rotor machine", kind)
                }));
            }
            wheels.push(Wheel::new(kind, setting.ring, position));
        }

        if reflector.is_thin() != (count == 4) {
            return Err(SteckerError::InvalidConfig(format!(
                "reflector {} does not fit a {}-rotor machine",
                reflector, count
            )));
        }

        Ok(Self {
            wheels,
            reflector: wiring::to_table(reflector.wiring()),
            plugboard: plugboard.wiring(),
        })
    }

    /// Letters currently showing in the rotor windows, left to right.
    pub fn positions(&self) -> String {
        self.wheels
            .iter()
            .map(|w| (b'A' + w.position) as char)
            .collect()
    }

    /// Steps the three rightmost rotors, including the middle rotor's double
    /// step.
    fn step(&mut self) {
        let n = self.wheels.len();
        let (left, middle, right) = (n - 3, n - 2, n - 1);
        if self.wheels[middle].at_notch() {
            self.wheels[middle].advance();
            self.wheels[left].advance();
        } else if self.wheels[right].at_notch() {
            self.wheels[middle].advance();
        }
        self.wheels[right].advance();
    }

    /// Presses one key: rotors step first, then the signal runs through
    /// plugboard, rotors, reflector and back.
    pub fn press(&mut self, key: Letter) -> Letter {
        self.step();
        let mut c = self.plugboard[key.index()];
        for wheel in self.wheels.iter().rev() {
            c = wheel.map_forward(c);
        }
        c = self.reflector[c as usize];
        for wheel in &self.wheels {
            c = wheel.map_backward(c);
        }
        Letter::from_table(self.plugboard[c as usize])
    }

    /// Encodes (or, equivalently, decodes) an uppercase A-Z message.
    pub fn encode(&mut self, text: &str) -> StResult<String> {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            let key = Letter::try_from(c)?;
            out.push(self.press(key).to_char());
        }
        Ok(out)
    }
}
