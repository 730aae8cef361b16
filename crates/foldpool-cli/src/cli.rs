use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "foldpool - distributes protein inference jobs (sequence design and structure prediction) across a local worker pool.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate candidate sequences for every structure under the input directory.
    Design(DesignArgs),
    /// Predict a structure for every sequence record under the input directory.
    Predict(PredictArgs),
}

/// Arguments for the `design` subcommand.
#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Directory scanned recursively for input structures (*.pdb).
    #[arg(short, long, required = true, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory for generated sequence files and the run summary.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// External sequence-design program invoked once per structure.
    #[arg(long, required = true, value_name = "PROGRAM")]
    pub designer_cmd: PathBuf,

    /// Number of sequences to generate per structure.
    #[arg(short = 'n', long, default_value_t = 50, value_name = "INT")]
    pub num_sequences: usize,

    /// Sampling temperature.
    #[arg(short, long, default_value_t = 0.1, value_name = "FLOAT")]
    pub temperature: f64,

    /// Random seed passed to the design model.
    #[arg(short, long, default_value_t = 42, value_name = "INT")]
    pub seed: u64,

    /// Number of concurrent worker slots.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub workers: Option<usize>,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Directory scanned recursively for sequence-collection files (*.fasta).
    #[arg(short, long, required = true, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory for predicted structure files and the run summary.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// External structure-prediction program invoked once per sequence.
    #[arg(long, required = true, value_name = "PROGRAM")]
    pub folder_cmd: PathBuf,

    /// Number of sequences grouped into one accelerator-exclusive unit.
    #[arg(short, long, default_value_t = 4, value_name = "INT")]
    pub batch_size: usize,

    /// Maximum sequence length to predict; longer records are skipped.
    #[arg(short, long, default_value_t = 500, value_name = "INT")]
    pub max_length: usize,

    /// Number of accelerator slots available to prediction units.
    #[arg(short, long, default_value_t = 1, value_name = "NUM")]
    pub gpus: usize,

    /// Number of concurrent worker slots.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub workers: Option<usize>,
}
