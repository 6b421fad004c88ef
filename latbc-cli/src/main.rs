//! `latbc-dis`: print the instruction listing of a compiled Latitude file

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use latbc_disassembler::{disassemble, BoundaryMode, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "latbc-dis", version, about = "Disassemble compiled Latitude bytecode")]
struct Args {
    /// Compiled bytecode file
    file: Option<PathBuf>,

    /// Reject blocks whose last instruction runs past the declared length
    #[arg(long)]
    strict_blocks: bool,

    /// Header version the file must carry
    #[arg(long, value_name = "N", default_value_t = latbc_spec::VERSION)]
    expect_version: i64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Config {
        let boundary = if self.strict_blocks {
            BoundaryMode::Strict
        } else {
            BoundaryMode::Lax
        };
        Config::DEFAULT
            .with_expected_version(self.expect_version)
            .with_boundary(boundary)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(path: PathBuf, config: Config) -> Result<()> {
    let name = path.display().to_string();
    let file = File::open(&path).with_context(|| format!("failed to open `{}`", name))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = disassemble(BufReader::new(file), &name, &config, &mut out)
        .with_context(|| format!("failed to disassemble `{}`", name))?;

    tracing::info!(
        blocks = summary.blocks,
        instructions = summary.instructions,
        bytes = summary.bytes,
        "Disassembly complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let Some(path) = args.file else {
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match run(path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
