use anyhow::Result;
use clap::Parser;
use wordgrams::cli::Cli;
use wordgrams::config::CounterConfig;
use wordgrams::runner::{self, RunConfig};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Flags override the config file, which overrides built-in defaults
    let base = match &args.config {
        Some(path) => CounterConfig::from_file(path)?,
        None => CounterConfig::default(),
    };
    let counter = base.with_overrides(args.limit, args.size);
    counter.validate()?;

    tracing::debug!(
        result_limit = counter.result_limit,
        sequence_size = counter.sequence_size,
        files = args.files.len(),
        "starting run"
    );

    let config = RunConfig {
        files: args.files,
        reset_each: args.reset_each,
        format: args.format,
        counter,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    runner::run(&config, &mut stdout.lock(), &mut stderr.lock())
}
