use crate::demo::{run_demo, DemoArgs};
use crate::render::render_results;
use crate::terminal::run_interactive;
use career_fit::config::{AppConfig, OutputFormat};
use career_fit::error::AppError;
use career_fit::telemetry;
use clap::{Args, Parser, Subcommand};
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Career Fit Assessment",
    about = "Find out whether a Power BI & Tableau career is the right fit for you",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the assessment interactively (default command)
    Take(OutputArgs),
    /// Run a scripted answer profile through the assessment
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Print the results summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl OutputArgs {
    pub(crate) fn format(&self, config: &AppConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.presentation.output
        }
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Take(OutputArgs::default()));

    info!(?config.environment, "career fit assessment ready");

    match command {
        Command::Take(args) => {
            let format = args.format(&config);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let result = run_interactive(stdin.lock(), &mut stdout)?;
            render_results(&mut stdout, &result, format)
        }
        Command::Demo(args) => run_demo(args, &config),
    }
}
