use crate::reports::{self, ConsoleReporter};
use clap::Args;
use stecker::config::{MachineArgs, SearchParams};
use stecker::error::{SteckerError, StResult};
use stecker::machine::EnigmaOracle;
use stecker::optimizer::{PlugboardSearch, SearchOptions, SearchOutcome};
use stecker::text::sanitize_words;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    #[command(flatten)]
    pub search: SearchParams,

    /// Print only the best decryption.
    #[arg(short, long, default_value_t = false)]
    pub condensed: bool,

    /// Print the final result as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the committed rounds to this CSV file.
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Ciphertext. Anything but ASCII letters is dropped.
    #[arg(required = true)]
    pub text: Vec<String>,
}

pub fn run(args: SearchArgs) -> StResult<()> {
    let machine = args.machine.resolve()?;
    let ciphertext = sanitize_words(&args.text);
    if ciphertext.is_empty() {
        return Err(SteckerError::InvalidInput(
            "ciphertext contains no letters".into(),
        ));
    }

    let quiet = args.condensed || args.json;
    if !quiet {
        println!("\n🔎 === PLUGBOARD SEARCH === 🔎");
        reports::print_machine(&machine, None);
    }

    let oracle = EnigmaOracle;
    let search = PlugboardSearch::new(&oracle, &machine, SearchOptions::from(&args.search));
    let mut reporter = ConsoleReporter::new(quiet);
    let outcome = search.run(&ciphertext, &mut reporter)?;
    info!(
        "📣 {} improvement(s) above {:.3} reported",
        reporter.reported,
        search.options().improvement_threshold
    );

    if let Some(path) = &args.trace {
        write_trace(path, &outcome)?;
        info!("💾 Round trace written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.best)?);
    } else if args.condensed {
        println!("{}", outcome.best.text);
    } else {
        reports::print_search_summary(&outcome);
    }
    Ok(())
}

pub fn write_trace(path: &Path, outcome: &SearchOutcome) -> StResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["round", "pair", "score", "plugboard", "trials"])?;
    for record in &outcome.rounds {
        writer.write_record([
            record.round.to_string(),
            record.pair.to_string(),
            format!("{:.6}", record.score),
            record.plugboard.to_string(),
            record.trials.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
