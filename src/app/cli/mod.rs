//! CLI Adapter.

mod init;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use owo_colors::{OwoColorize, Stream::Stderr, Stream::Stdout};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "zj")]
#[command(version, disable_version_flag = true)]
#[command(about = "Scaffold Vue or React projects from bundled templates", long_about = None)]
#[command(override_usage = "zj <command> [options]")]
struct Cli {
    /// Display the current version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Vue or React project
    #[clap(visible_alias = "i")]
    Init(init::InitArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Some(Commands::Init(args)) => init::run_init(args),
        None => print_welcome().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            let line = format!("❌ {}", e);
            eprintln!("{}", line.if_supports_color(Stderr, |t| t.red()));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_welcome() -> Result<(), AppError> {
    println!("\n {}\n", "🚀 Welcome to use ZJ-CLI".if_supports_color(Stdout, |t| t.bold()));
    Cli::command().print_help()?;
    println!(
        "\n run {}{}\n",
        "zj init".if_supports_color(Stdout, |t| t.green()),
        " - Initialize a new project".if_supports_color(Stdout, |t| t.dimmed())
    );
    Ok(())
}
