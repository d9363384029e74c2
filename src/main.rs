use std::io;
use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wordcase::cli::{parse_args, run};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args);

    let ok = run(&command, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
