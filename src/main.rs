use std::path::{Path, PathBuf};

use clap::Parser;
use exam_portal::Portal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding the question bank (subject -> questions)
    #[arg(short, long)]
    questions: PathBuf,

    /// Directory for local portal data (user, results, log)
    #[arg(short, long, default_value = ".exam-portal")]
    data_dir: PathBuf,
}

fn main() {
    let args = Args::parse();
    let _guard = init_logging(&args.data_dir);

    let portal = match Portal::open(&args.questions, &args.data_dir) {
        Ok(portal) => portal,
        Err(e) => {
            eprintln!("Failed to open portal: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = portal.run() {
        eprintln!("Error running portal: {}", e);
        std::process::exit(1);
    }
}

/// Log to a file inside the data directory; the TUI owns stdout.
fn init_logging(data_dir: &Path) -> Option<WorkerGuard> {
    std::fs::create_dir_all(data_dir).ok()?;
    let appender = tracing_appender::rolling::never(data_dir, "portal.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
