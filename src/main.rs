use std::path::Path;

use clap::Parser;

use stresscheck::cli::Cli;
use stresscheck::dataset;
use stresscheck::state::AppState;
use stresscheck::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let dataset = dataset::load_dataset(Path::new(&cli.dataset))?;

    if cli.check {
        print!("{}", dataset::dataset_summary(&dataset));
        return Ok(());
    }

    if dataset.questions.is_empty() {
        return Err("Dataset has no questions".to_string());
    }

    let state = AppState::new(dataset);
    tui::run_tui(state)
}
