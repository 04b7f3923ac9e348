use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stresscheck", version, about = "Terminal self-assessment questionnaire")]
pub struct Cli {
    /// Path to the assessment dataset (YAML)
    #[arg(default_value = "assessment.yaml")]
    pub dataset: String,

    /// Print a dataset summary and exit without starting the TUI
    #[arg(long)]
    pub check: bool,
}
