use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scheduler-driver", version, about = "Gang scheduling decision engine driver")]
pub struct Cli {
    /// Path to a JSON snapshot file (demo `StateSource`/`CommandSink`). When
    /// absent, the snapshot path is read from `SCHEDULER_SNAPSHOT_PATH`.
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Run exactly one cycle and exit, instead of looping until interrupted.
    #[arg(long)]
    pub once: bool,
}
