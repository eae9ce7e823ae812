mod config;
mod tasks;

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

use config::TaskConfig;
use tasks::TaskError;

const DEFAULT_CONFIG_PATH: &str = "tasks.toml";

struct Args {
    pub task: Option<String>,
    pub config: String,
    pub trace: bool,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            init_logging(false);
            error!("{}", TaskError::from(err));
            return ExitCode::FAILURE;
        }
    };
    init_logging(args.trace);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let args = Args {
        trace: pargs.contains(["--trace", "-t"]),
        config: pargs
            .opt_value_from_str("--config")?
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
        task: pargs.opt_free_from_str()?,
    };
    Ok(args)
}

fn init_logging(trace: bool) {
    let level = if trace { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt::fmt()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish()
        .init();
}

fn run(args: Args) -> Result<(), TaskError> {
    config::set_config(TaskConfig::from_file(&args.config));
    tasks::dispatch(args.task.as_deref(), config::config())
}
