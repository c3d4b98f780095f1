//! Terminal minesweeper.
//!
//! # Usage
//!
//! ```bash
//! # Play a board, one `ROW COL R|F` command per line
//! mineterm boards/simple.cfg
//!
//! # Show the mines/moves header and use the colored display
//! mineterm --status --theme fancy.toml boards/simple.cfg < moves.txt
//! ```

use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use clap_verbosity_flag::Verbosity;
use mineterm_core::{Session, SessionEnd, SessionOptions};
use tracing::level_filters::LevelFilter;

mod board_file;
mod theme_file;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_MISSING_CONFIG: u8 = 1;
pub(crate) const EXIT_INVALID_CONFIG: u8 = 2;
pub(crate) const EXIT_IO_FAILURE: u8 = 1;

/// Play minesweeper on a board read from a `.cfg` file
#[derive(Parser, Debug)]
#[command(name = "mineterm")]
#[command(version)]
struct Args {
    /// Board configuration: rows of `.` and `*`, each terminated by a newline
    board: Option<PathBuf>,

    /// Print the remaining mines and move count above the board
    #[arg(long)]
    status: bool,

    /// TOML file selecting the display plugin
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity,
}

fn init_logging(verbose: &Verbosity) {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    // stdout carries the frames
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn run(args: Args) -> u8 {
    let layout = match board_file::load(args.board.as_deref()) {
        Ok(layout) => layout,
        Err(err) => {
            let code = err.exit_code();
            log::error!("{:#}", anyhow::Error::from(err));
            return code;
        }
    };

    let theme = match args.theme.as_deref().map(theme_file::load).transpose() {
        Ok(theme) => theme.unwrap_or_default(),
        Err(err) => {
            log::error!("{:#}", err);
            return EXIT_MISSING_CONFIG;
        }
    };

    let options = SessionOptions {
        show_status: args.status,
        theme,
    };
    let stdout = io::stdout();
    session_exit_code(
        Session::new(layout, options).run(io::stdin().lock(), BufWriter::new(stdout.lock())),
    )
}

/// Every way a session can end is a success; only terminal I/O failures are not.
fn session_exit_code(result: io::Result<SessionEnd>) -> u8 {
    match result {
        Ok(end) => {
            log::info!("session ended: {:?}", end);
            EXIT_SUCCESS
        }
        Err(err) => {
            log::error!("terminal I/O failed: {}", err);
            EXIT_IO_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.verbose);
    ExitCode::from(run(args))
}
