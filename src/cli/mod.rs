pub mod commands;
pub mod confirm;
pub mod output;
pub mod presenter;

use crate::config::SyncSettings;
use crate::errors::Result;
use clap::Parser;
use commands::sync::SyncArgs;

#[derive(Parser)]
#[command(name = "stack-sync")]
#[command(about = "Point each {base}-N branch at its [N/n] commit and push the stack with a lease")]
#[command(version)]
pub struct Cli {
    /// Stack prefix: commits come from {base}-MASTER, branches are {base}-<N>[-suffix]
    pub branch_base: String,

    /// Remote to push to [default: origin]
    #[arg(long)]
    pub remote: Option<String>,

    /// Revision whose history is excluded from the commit scan [default: main]
    #[arg(long)]
    pub trunk: Option<String>,

    /// Print the plan and exit without prompting or changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.setup_logging();

        let settings = SyncSettings::new(self.remote, self.trunk)?;
        commands::sync::run(SyncArgs {
            branch_base: self.branch_base,
            settings,
            dry_run: self.dry_run,
            json: self.json,
            verbose: self.verbose,
        })
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .without_time();

        if self.no_color {
            console::set_colors_enabled(false);
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
