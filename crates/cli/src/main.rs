use anyhow::Result;
use binary_analyzer::commands::{analyze_command, generate_command, run_command};
use binary_analyzer::RunOverrides;
use clap::{Args, Parser, Subcommand};

/// Generate, persist, reload and analyze arrays of bounded random integers.
///
/// This CLI is a thin wrapper around `analyzer-core` (exposed in code as
/// `analyzer_core`). All substantive logic lives in the library.
#[derive(Parser, Debug)]
#[command(
    name = "binary-analyzer",
    version,
    about = "Generate, persist and analyze bounded random integer arrays",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct DataArgs {
    /// Binary data file. Defaults to `binary.dat` in the current directory.
    #[arg(long)]
    path: Option<String>,

    /// Seed for the random source. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Optional run config file (.json, .yaml or .yml). Flags override its values.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset, write it, read it back and print all four reports.
    ///
    /// This is the default when no subcommand is given. Reports are printed in
    /// order: statistics, duplicates, missing, search.
    Run {
        #[command(flatten)]
        data: DataArgs,

        /// Number of values to generate.
        #[arg(long)]
        length: Option<usize>,

        /// Random probes issued by the search analyzer.
        #[arg(long)]
        probes: Option<usize>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate a dataset and write it to the data file without analyzing it.
    Generate {
        #[command(flatten)]
        data: DataArgs,

        /// Number of values to generate.
        #[arg(long)]
        length: Option<usize>,
    },

    /// Run analyzers over an existing data file.
    Analyze {
        #[command(flatten)]
        data: DataArgs,

        /// Comma-separated subset of analyzers: statistics, duplicates, missing, search.
        #[arg(long)]
        only: Option<String>,

        /// Random probes issued by the search analyzer.
        #[arg(long)]
        probes: Option<usize>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn overrides(data: DataArgs, length: Option<usize>, probes: Option<usize>) -> RunOverrides {
    RunOverrides { config: data.config, path: data.path, length, probes, seed: data.seed }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to a full run if no subcommand is provided.
    let command = cli.command.unwrap_or(Command::Run {
        data: DataArgs::default(),
        length: None,
        probes: None,
        json: false,
    });

    match command {
        Command::Run { data, length, probes, json } => {
            run_command(&overrides(data, length, probes), json)?
        }
        Command::Generate { data, length } => generate_command(&overrides(data, length, None))?,
        Command::Analyze { data, only, probes, json } => {
            analyze_command(&overrides(data, None, probes), only.as_deref(), json)?
        }
    }

    Ok(())
}
