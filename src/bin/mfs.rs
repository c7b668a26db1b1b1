//! mfs Shell Binary
//!
//! Interactive prompt over an in-memory file store.

use std::io::{self, BufRead, Write};

use clap::Parser;
use mfs::shell::{Outcome, Shell};
use mfs::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// mfs shell
#[derive(Parser, Debug)]
#[command(name = "mfs")]
#[command(about = "Volatile in-memory block file store")]
#[command(version)]
struct Args {
    /// Host directory that put/get resolve file names against
    #[arg(short, long, default_value = ".")]
    dir: String,

    /// Number of blocks in the store
    #[arg(short = 'n', long, default_value = "1280")]
    blocks: usize,

    /// Block size in bytes
    #[arg(short = 'b', long, default_value = "4096")]
    block_size: usize,

    /// Maximum number of stored files
    #[arg(short = 'f', long, default_value = "128")]
    max_files: usize,

    /// Maximum number of blocks per file
    #[arg(long, default_value = "32")]
    max_blocks_per_file: usize,

    /// Maximum file name length in bytes
    #[arg(long, default_value = "255")]
    max_name_len: usize,
}

fn main() {
    // Initialize tracing/logging; stderr keeps it out of command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mfs=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .num_blocks(args.blocks)
        .block_size(args.block_size)
        .max_files(args.max_files)
        .max_blocks_per_file(args.max_blocks_per_file)
        .max_name_len(args.max_name_len)
        .build();

    let engine = match Engine::new(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to create engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "mfs v{}: {} bytes in {} blocks, host dir {}",
        mfs::VERSION,
        engine.capacity(),
        engine.config().num_blocks,
        args.dir
    );

    let mut shell = Shell::new(engine, &args.dir);
    if let Err(e) = run(&mut shell) {
        tracing::error!("Shell error: {}", e);
        std::process::exit(1);
    }
}

/// Prompt, read and dispatch until `quit` or end of input
fn run(shell: &mut Shell) -> mfs::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", Shell::PROMPT)?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        if shell.run_line(&line, &mut stdout)? == Outcome::Quit {
            return Ok(());
        }
    }
}
