use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stecker::consts::RANDOM_TEXT_IOC;
use stecker::machine::MachineConfig;
use stecker::optimizer::{BestSoFar, SearchOutcome, SearchReporter};
use stecker::plugboard::Plugboard;

/// Prints every reported improvement as it happens, unless condensed.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    condensed: bool,
    pub reported: usize,
}

impl ConsoleReporter {
    pub fn new(condensed: bool) -> Self {
        Self {
            condensed,
            reported: 0,
        }
    }
}

impl SearchReporter for ConsoleReporter {
    fn on_improvement(&mut self, round: usize, best: &BestSoFar) -> bool {
        self.reported += 1;
        if !self.condensed {
            print_improvement(round, best);
        }
        true
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn score_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{:.5}", score)).set_alignment(CellAlignment::Right);
    // Within 25% of random text is noise
    if score > RANDOM_TEXT_IOC * 1.25 {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}

pub fn print_improvement(round: usize, best: &BestSoFar) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Round").add_attribute(Attribute::Bold),
        Cell::new("IoC").add_attribute(Attribute::Bold),
        Cell::new("Plugboard").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(round).set_alignment(CellAlignment::Right),
        score_cell(best.score),
        Cell::new(best.plugboard.to_string()),
    ]);
    println!("\n{}", table);
    println!("{}", best.text);
}

pub fn print_machine(machine: &MachineConfig, plugboard: Option<&Plugboard>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Rotor").add_attribute(Attribute::Bold),
        Cell::new("Ring").add_attribute(Attribute::Bold),
        Cell::new("Position").add_attribute(Attribute::Bold),
    ]);
    for (i, r) in machine.rotors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.rotor),
            Cell::new(r.ring).set_alignment(CellAlignment::Right),
            Cell::new(r.position).set_alignment(CellAlignment::Center),
        ]);
    }
    println!("\n{}", table);
    println!("Reflector: {}", machine.reflector);
    if let Some(board) = plugboard {
        let shown = if board.is_empty() {
            "(none)".to_string()
        } else {
            board.to_string()
        };
        println!("Plugboard: {}", shown);
    }
}

pub fn print_search_summary(outcome: &SearchOutcome) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Round").add_attribute(Attribute::Bold),
        Cell::new("Pair").add_attribute(Attribute::Bold),
        Cell::new("IoC").fg(Color::Cyan),
        Cell::new("Trials"),
        Cell::new("Plugboard"),
    ]);
    for record in &outcome.rounds {
        table.add_row(vec![
            Cell::new(record.round).set_alignment(CellAlignment::Right),
            Cell::new(record.pair.to_string()).add_attribute(Attribute::Bold),
            score_cell(record.score),
            Cell::new(record.trials).set_alignment(CellAlignment::Right),
            Cell::new(record.plugboard.to_string()),
        ]);
    }

    println!("\n=== FINAL RESULT ===");
    if outcome.rounds.is_empty() {
        println!("No plugboard pair improved the score.");
    } else {
        println!("{}", table);
    }
    println!("Stopped:   {}", outcome.stop);
    println!("Score:     {:.5}", outcome.best.score);
    println!("Plugboard: {}", outcome.best.plugboard);
    println!(
        "Trials:    {} in {:.2?}",
        outcome.trials, outcome.elapsed
    );
    println!("Text:      {}", outcome.best.text);
}

pub fn print_encoding(original: &str, plain: &str, encoded: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Original").add_attribute(Attribute::Bold),
        Cell::new(original),
    ]);
    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new(plain),
    ]);
    table.add_row(vec![
        Cell::new("Output").add_attribute(Attribute::Bold),
        Cell::new(encoded).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}
