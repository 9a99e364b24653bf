//! Greedy hill-climbing over plugboard pairs.
//!
//! Each round tries every unordered pair of still-unplugged letters on top of
//! the pairs committed so far, decodes the ciphertext with each trial board
//! and scores the result by index of coincidence. The round's best pair is
//! committed only if it strictly beats the best score so far; otherwise the
//! search has reached a local optimum and stops. Committed pairs are never
//! revisited.

pub mod round;

pub use self::round::TrialResult;

use self::round::TrialFailure;

use crate::alphabet::Alphabet;
use crate::config::SearchParams;
use crate::consts::{DEFAULT_IMPROVEMENT_THRESHOLD, DEFAULT_MAX_ROUNDS};
use crate::error::StResult;
use crate::machine::{CipherOracle, MachineConfig};
use crate::plugboard::{PlugPair, Plugboard};
use crate::scorer::LetterCounts;
use serde::Serialize;
use std::time::{Duration, Instant};
use strum_macros::Display;
use tracing::{debug, info, warn};

/// The running champion of one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestSoFar {
    pub score: f64,
    pub plugboard: Plugboard,
    pub text: String,
    /// Round that produced this result; 0 before any pair is committed.
    pub round: usize,
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self {
            score: 0.0,
            plugboard: Plugboard::new(),
            text: String::new(),
            round: 0,
        }
    }
}

/// One committed round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    pub round: usize,
    pub pair: PlugPair,
    pub score: f64,
    pub plugboard: Plugboard,
    pub trials: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StopReason {
    /// No pair of the last round beat the best score.
    #[strum(to_string = "no improvement")]
    NoImprovement,
    /// Fewer than two unplugged letters remain.
    #[strum(to_string = "alphabet exhausted")]
    AlphabetExhausted,
    #[strum(to_string = "round limit reached")]
    MaxRounds,
    #[strum(to_string = "time limit reached")]
    TimeLimit,
    /// The reporter asked to stop.
    #[strum(to_string = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub best: BestSoFar,
    pub rounds: Vec<RoundRecord>,
    pub stop: StopReason,
    /// Oracle calls made across all rounds.
    pub trials: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_rounds: usize,
    /// Committed results are reported only when their score is above this.
    pub improvement_threshold: f64,
    /// Evaluate the pairs of a round on the rayon thread pool.
    pub parallel: bool,
    /// Wall-clock budget, checked between rounds.
    pub max_time: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            improvement_threshold: DEFAULT_IMPROVEMENT_THRESHOLD,
            parallel: false,
            max_time: None,
        }
    }
}

impl From<&SearchParams> for SearchOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            max_rounds: params.rounds,
            improvement_threshold: params.threshold,
            parallel: params.parallel,
            max_time: params.time.map(Duration::from_secs),
        }
    }
}

/// Receives results worth showing to the user.
pub trait SearchReporter {
    /// Called once for every committed round whose score exceeds the
    /// improvement threshold. Returning `false` stops the search before the
    /// next round starts.
    fn on_improvement(&mut self, round: usize, best: &BestSoFar) -> bool;
}

/// Reporter that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl SearchReporter for SilentReporter {
    fn on_improvement(&mut self, _round: usize, _best: &BestSoFar) -> bool {
        true
    }
}

impl<F> SearchReporter for F
where
    F: FnMut(usize, &BestSoFar) -> bool,
{
    fn on_improvement(&mut self, round: usize, best: &BestSoFar) -> bool {
        self(round, best)
    }
}

pub struct PlugboardSearch<'a, O: CipherOracle> {
    oracle: &'a O,
    machine: &'a MachineConfig,
    options: SearchOptions,
}

impl<'a, O: CipherOracle> PlugboardSearch<'a, O> {
    pub fn new(oracle: &'a O, machine: &'a MachineConfig, options: SearchOptions) -> Self {
        Self {
            oracle,
            machine,
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Runs the hill-climb on `ciphertext` (uppercase A-Z, at least two
    /// letters).
    ///
    /// A failing oracle call or an unscorable decryption aborts the search
    /// with `SearchAborted`, carrying the round and pair that failed and the
    /// best result committed before that round.
    pub fn run<R: SearchReporter + ?Sized>(
        &self,
        ciphertext: &str,
        reporter: &mut R,
    ) -> StResult<SearchOutcome> {
        let opts = &self.options;
        let baseline = LetterCounts::from_text(ciphertext)?.index_of_coincidence()?;

        info!(
            "Plugboard search: {} letters (IoC {:.5}), up to {} rounds, reporting above {:.3}{}",
            ciphertext.len(),
            baseline,
            opts.max_rounds,
            opts.improvement_threshold,
            if opts.parallel { ", parallel" } else { "" }
        );

        let start = Instant::now();
        let mut alphabet = Alphabet::full();
        let mut best = BestSoFar::default();
        let mut rounds: Vec<RoundRecord> = Vec::new();
        let mut trials = 0;

        let stop = loop {
            let round = rounds.len() + 1;
            if round > opts.max_rounds {
                break StopReason::MaxRounds;
            }
            if alphabet.len() < 2 {
                break StopReason::AlphabetExhausted;
            }
            if let Some(limit) = opts.max_time {
                if start.elapsed() >= limit {
                    warn!("Time limit of {:?} reached before round {}", limit, round);
                    break StopReason::TimeLimit;
                }
            }

            let round_start = Instant::now();
            let candidates = alphabet.pairs();
            let champion = round::best_trial(
                self.oracle,
                self.machine,
                &best.plugboard,
                ciphertext,
                &candidates,
                opts.parallel,
            )
            .map_err(|failure| failure.abort(round, &best))?;
            trials += candidates.len();

            let champion = match champion {
                Some(c) if c.score > best.score => c,
                other => {
                    debug!(
                        "Round {:2} | best {} | IoC {:.5} does not beat {:.5}",
                        round,
                        other.as_ref().map_or("-".to_string(), |c| c.pair.to_string()),
                        other.as_ref().map_or(0.0, |c| c.score),
                        best.score
                    );
                    break StopReason::NoImprovement;
                }
            };

            let pair = champion.pair;
            commit(&mut best, &mut alphabet, champion, round)?;

            debug!(
                "Round {:2} | commit {} | IoC {:.5} | {} trials in {:.2?}",
                round,
                pair,
                best.score,
                candidates.len(),
                round_start.elapsed()
            );

            rounds.push(RoundRecord {
                round,
                pair,
                score: best.score,
                plugboard: best.plugboard.clone(),
                trials: candidates.len(),
            });

            if best.score > opts.improvement_threshold && !reporter.on_improvement(round, &best)
            {
                info!("Search stopped by reporter after round {}", round);
                break StopReason::Cancelled;
            }
        };

        let elapsed = start.elapsed();
        let rate = trials as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
        info!(
            "Search finished ({}): {} pair(s) [{}], IoC {:.5}, {} trials, {:.0} trials/s",
            stop,
            best.plugboard.len(),
            best.plugboard,
            best.score,
            trials,
            rate
        );

        Ok(SearchOutcome {
            best,
            rounds,
            stop,
            trials,
            elapsed,
        })
    }
}

/// Moves the round's champion into `best`. The board and the alphabet are
/// only updated if both accept the pair; otherwise the round aborts with
/// `best` as it stood before.
fn commit(
    best: &mut BestSoFar,
    alphabet: &mut Alphabet,
    champion: TrialResult,
    round: usize,
) -> StResult<()> {
    let pair = champion.pair;
    let board = best
        .plugboard
        .with_pair(pair)
        .and_then(|board| alphabet.remove_pair(pair).map(|_| board))
        .map_err(|error| TrialFailure::new(pair, error).abort(round, best))?;

    best.plugboard = board;
    best.score = champion.score;
    best.text = champion.text;
    best.round = round;
    Ok(())
}

/// Runs a search with default options apart from the round limit and the
/// reporting threshold, returning only the best result.
pub fn search<O, R>(
    ciphertext: &str,
    machine: &MachineConfig,
    oracle: &O,
    max_rounds: usize,
    improvement_threshold: f64,
    reporter: &mut R,
) -> StResult<BestSoFar>
where
    O: CipherOracle,
    R: SearchReporter + ?Sized,
{
    let options = SearchOptions {
        max_rounds,
        improvement_threshold,
        ..SearchOptions::default()
    };
    PlugboardSearch::new(oracle, machine, options)
        .run(ciphertext, reporter)
        .map(|outcome| outcome.best)
}
