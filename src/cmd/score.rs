use clap::Args;
use stecker::consts::RANDOM_TEXT_IOC;
use stecker::error::StResult;
use stecker::scorer::LetterCounts;
use stecker::text::sanitize_words;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[arg(required = true)]
    pub text: Vec<String>,
}

pub fn run(args: ScoreArgs) -> StResult<()> {
    let text = sanitize_words(&args.text);
    let counts = LetterCounts::from_text(&text)?;
    let ioc = counts.index_of_coincidence()?;
    println!(
        "IoC: {:.5} ({} letters, {:.2}x random)",
        ioc,
        counts.len(),
        ioc / RANDOM_TEXT_IOC
    );
    Ok(())
}
