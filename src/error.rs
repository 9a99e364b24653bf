use crate::optimizer::BestSoFar;
use crate::plugboard::PlugPair;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteckerError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    #[error("Invalid Machine Configuration: {0}")]
    InvalidConfig(String),

    /// A trial in `round` failed. `partial` is the best result committed
    /// before that round started; it is not a finished search result.
    #[error("Search aborted in round {round} while trying pair {pair}: {source}")]
    SearchAborted {
        round: usize,
        pair: PlugPair,
        #[source]
        source: Box<SteckerError>,
        partial: Box<BestSoFar>,
    },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type StResult<T> = Result<T, SteckerError>;
