use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Rotors of the Enigma I, M3 and M4 (Kriegsmarine) machines.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, AsRefStr, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum RotorKind {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorKind {
    /// Entry contacts A..Z map to these exit contacts.
    pub fn wiring(&self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            Self::VI => "JPGVOUMFYQBENHZRDKASXLICTW",
            Self::VII => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            Self::VIII => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
            Self::Beta => "LEYJVCNIXWPBQMDRTAKZGFUHOS",
            Self::Gamma => "FSOKANUERHMBTZYCJQDPGXIVLW",
        }
    }

    /// Window letters at which this rotor carries its left neighbour along.
    pub fn notches(&self) -> &'static str {
        match self {
            Self::I => "Q",
            Self::II => "E",
            Self::III => "V",
            Self::IV => "J",
            Self::V => "Z",
            // Naval rotors have two notches
            Self::VI | Self::VII | Self::VIII => "ZM",
            Self::Beta | Self::Gamma => "",
        }
    }

    /// Greek wheels only fit the fourth (leftmost) slot of an M4 and never step.
    pub fn is_greek(&self) -> bool {
        matches!(self, Self::Beta | Self::Gamma)
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, AsRefStr, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum ReflectorKind {
    A,
    B,
    C,
    #[strum(to_string = "B-Thin", serialize = "BThin")]
    BThin,
    #[strum(to_string = "C-Thin", serialize = "CThin")]
    CThin,
}

impl ReflectorKind {
    pub fn wiring(&self) -> &'static str {
        match self {
            Self::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            Self::BThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            Self::CThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }

    /// Thin reflectors make room for the M4's Greek wheel.
    pub fn is_thin(&self) -> bool {
        matches!(self, Self::BThin | Self::CThin)
    }
}

/// Identifiers accepted for `--rotors`, for help and error messages.
pub fn rotor_names() -> Vec<String> {
    RotorKind::iter().map(|r| r.to_string()).collect()
}

pub fn reflector_names() -> Vec<String> {
    ReflectorKind::iter().map(|r| r.to_string()).collect()
}

/// Converts a 26-letter wiring string to contact indices.
pub(crate) fn to_table(wiring: &str) -> [u8; 26] {
    let mut table = [0u8; 26];
    for (slot, b) in table.iter_mut().zip(wiring.bytes()) {
        *slot = b - b'A';
    }
    table
}

pub(crate) fn invert(table: &[u8; 26]) -> [u8; 26] {
    let mut inverse = [0u8; 26];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}
