use crate::reports;
use clap::Args;
use stecker::config::MachineArgs;
use stecker::error::StResult;
use stecker::machine::Enigma;
use stecker::plugboard::Plugboard;
use stecker::text::sanitize_words;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub machine: MachineArgs,

    /// Plugboard pairs, e.g. "AB CD".
    #[arg(short, long, num_args = 1, value_delimiter = ' ')]
    pub plugboard: Vec<String>,

    /// Print only the output text.
    #[arg(short, long, default_value_t = false)]
    pub condensed: bool,

    #[arg(required = true)]
    pub text: Vec<String>,
}

pub fn run(args: EncodeArgs) -> StResult<()> {
    let machine = args.machine.resolve()?;
    let plugboard = Plugboard::parse(&args.plugboard)?;
    let plain = sanitize_words(&args.text);

    let mut enigma = Enigma::new(&machine, &plugboard)?;
    let encoded = enigma.encode(&plain)?;

    if args.condensed {
        println!("{}", encoded);
    } else {
        reports::print_machine(&machine, Some(&plugboard));
        reports::print_encoding(&args.text.join(" "), &plain, &encoded);
        println!("Final positions: {}", enigma.positions());
    }
    Ok(())
}
