use clap::{Parser, Subcommand};
use syncscope_core::cli;
use syncscope_core::logging::{LogMode, default_log_mode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "syncscope",
    version,
    about = "syncscope: live timestamp and clock-sync quality analyzer"
)]
struct Cli {
    /// Log format on stderr; JSON when stderr is not a terminal
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a sync daemon and analyze its output live
    Run(cli::run::RunArgs),

    /// Analyze a captured daemon log
    Analyze(cli::analyze::AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_mode));

    let (name, result) = match cli.command {
        Command::Run(args) => ("run", cli::run::run(args)),
        Command::Analyze(args) => ("analyze", cli::analyze::analyze(args)),
        Command::Config { cmd } => ("config", cli::conf::run(cmd)),
    };

    if let Err(e) = result {
        tracing::error!(command = name, error = %e, "command failed");
        eprintln!("{name} error: {e:#}");
        std::process::exit(1);
    }
}
