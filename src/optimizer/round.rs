use super::BestSoFar;
use crate::error::SteckerError;
use crate::machine::{CipherOracle, MachineConfig};
use crate::plugboard::{PlugPair, Plugboard};
use crate::scorer::index_of_coincidence;
use rayon::prelude::*;

/// Outcome of decoding the ciphertext with one candidate pair added.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub pair: PlugPair,
    pub score: f64,
    pub text: String,
}

/// A trial that could not be scored, with the pair that caused it.
#[derive(Debug)]
pub(crate) struct TrialFailure {
    pair: PlugPair,
    error: SteckerError,
}

impl TrialFailure {
    pub(crate) fn new(pair: PlugPair, error: SteckerError) -> Self {
        Self { pair, error }
    }

    pub(crate) fn abort(self, round: usize, best: &BestSoFar) -> SteckerError {
        SteckerError::SearchAborted {
            round,
            pair: self.pair,
            source: Box::new(self.error),
            partial: Box::new(best.clone()),
        }
    }
}

fn run_trial<O: CipherOracle>(
    oracle: &O,
    machine: &MachineConfig,
    committed: &Plugboard,
    ciphertext: &str,
    pair: PlugPair,
) -> Result<TrialResult, TrialFailure> {
    let fail = move |error: SteckerError| TrialFailure::new(pair, error);

    let board = committed.with_pair(pair).map_err(fail)?;
    let text = oracle.encode(ciphertext, machine, &board).map_err(fail)?;
    let score = index_of_coincidence(&text).map_err(fail)?;
    Ok(TrialResult { pair, score, text })
}

/// Scores every candidate pair on top of `committed` and returns the round's
/// champion. Parallel evaluation collects all trials before reducing them in
/// candidate order, so both modes pick the same pair.
pub(crate) fn best_trial<O: CipherOracle>(
    oracle: &O,
    machine: &MachineConfig,
    committed: &Plugboard,
    ciphertext: &str,
    candidates: &[PlugPair],
    parallel: bool,
) -> Result<Option<TrialResult>, TrialFailure> {
    let trial = |&pair: &PlugPair| run_trial(oracle, machine, committed, ciphertext, pair);

    if parallel {
        let trials: Vec<_> = candidates.par_iter().map(trial).collect();
        pick_champion(trials)
    } else {
        pick_champion(candidates.iter().map(trial))
    }
}

/// Highest score wins; on ties the earlier trial is kept. The first failure
/// in candidate order aborts the reduction.
fn pick_champion<I>(trials: I) -> Result<Option<TrialResult>, TrialFailure>
where
    I: IntoIterator<Item = Result<TrialResult, TrialFailure>>,
{
    let mut champion: Option<TrialResult> = None;
    for trial in trials {
        let trial = trial?;
        if champion.as_ref().map_or(true, |c| trial.score > c.score) {
            champion = Some(trial);
        }
    }
    Ok(champion)
}
