pub mod alphabet;
pub mod config;
pub mod consts;
pub mod error;
pub mod machine;
pub mod optimizer;
pub mod plugboard;
pub mod scorer;
pub mod text;
// cmd and reports belong to the binary (src/main.rs).

pub use error::{SteckerError, StResult};
