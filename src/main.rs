use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use bezier_sketch::{logging, Session};
use tracing::error;

const USAGE: &str = "usage: bezier-sketch <session.json> [output_dir]";

fn run() -> bezier_sketch::Result<()> {
    let mut args = env::args().skip(1);
    let session_path = match args.next() {
        Some(path) if path != "-h" && path != "--help" => PathBuf::from(path),
        _ => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut session = Session::load(&session_path)?;
    if let Some(output_dir) = args.next() {
        session.config.output_dir = PathBuf::from(output_dir);
    }
    session.export()
}

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
