use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "recall-reporter",
    version,
    about = "AI-powered FDA device recall reporting pipeline"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch recalls, generate the AI report, and write it to disk
    Run(RunArgs),
    /// Fetch and aggregate only; print the data summary without calling
    /// the generation service
    Summary(RunArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Calendar year to report on
    #[arg(short, long, default_value_t = 2024)]
    pub year: i32,

    /// Maximum records to fetch (the FDA caps a single query at 1000)
    #[arg(short, long, default_value_t = 1000)]
    pub limit: usize,

    /// OpenAI model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Output path for the generated report
    #[arg(short, long, default_value = "report.md")]
    pub output: String,

    /// FDA API key (or set FDA_API_KEY)
    #[arg(long)]
    pub fda_api_key: Option<String>,

    /// OpenAI API key (or set OPENAI_API_KEY)
    #[arg(long)]
    pub openai_api_key: Option<String>,

    /// FDA endpoint override
    #[arg(long)]
    pub fda_base_url: Option<String>,

    /// OpenAI endpoint override
    #[arg(long)]
    pub openai_base_url: Option<String>,
}
