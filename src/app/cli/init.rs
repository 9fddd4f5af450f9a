//! Init command implementation.

use std::path::PathBuf;

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::app::api::{self, InitOutcome, InitRequest, ScaffoldReport};
use crate::domain::{AppError, Framework};

#[derive(Args)]
pub struct InitArgs {
    /// Project name or path of the directory to create
    pub name: Option<String>,
    /// Overwrite the target directory without asking
    #[arg(short, long)]
    pub force: bool,
    /// Framework template: vue or react
    #[arg(long)]
    pub framework: Option<Framework>,
    /// Keep i18n support without asking
    #[arg(long, conflicts_with = "no_i18n")]
    pub i18n: bool,
    /// Remove i18n support without asking
    #[arg(long)]
    pub no_i18n: bool,
    /// Read templates from DIR/vue and DIR/react instead of the bundled ones
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,
}

pub fn run_init(args: InitArgs) -> Result<i32, AppError> {
    let need_i18n = match (args.i18n, args.no_i18n) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let request = InitRequest {
        target: args.name,
        force: args.force,
        framework: args.framework,
        need_i18n,
        cwd: std::env::current_dir()?,
    };

    match api::init_with_templates(&request, args.template_dir)? {
        InitOutcome::Created(report) => print_success(&report, request.target.as_deref()),
        InitOutcome::Cancelled => println!("Operation cancelled"),
    }
    Ok(0)
}

fn print_success(report: &ScaffoldReport, typed_target: Option<&str>) {
    let cd_target = typed_target
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(report.answers.project_name.as_str());

    println!("\n✅ Successfully initialized the project!");
    println!("👉 Please execute the following command:\n");
    let cd = format!("cd {}", shell_quoted(cd_target));
    for command in [cd.as_str(), "npm install", "npm run dev"] {
        println!("    {}", command.if_supports_color(Stdout, |t| t.cyan()));
    }
    println!();
}

/// Quote `path` for a POSIX shell when it contains whitespace or quotes.
fn shell_quoted(path: &str) -> String {
    if path.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", path.replace('\'', "'\\''"))
    } else {
        path.to_string()
    }
}
