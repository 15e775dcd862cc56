use crate::cli::confirm::TerminalConfirm;
use crate::cli::output::Output;
use crate::cli::presenter::ConsoleReporter;
use crate::config::settings::validate_branch_base;
use crate::config::SyncSettings;
use crate::errors::Result;
use crate::git::get_current_repository;
use crate::stack::{plan_sync, run_sync, Reporter, SyncOutcome, SyncPlan};
use serde::Serialize;
use tracing::debug;

pub struct SyncArgs {
    pub branch_base: String,
    pub settings: SyncSettings,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: bool,
}

#[derive(Serialize)]
struct DryRun<'a> {
    settings: &'a SyncSettings,
    plan: &'a SyncPlan,
    push_refs: Vec<String>,
}

/// Reconcile the stack in the current repository and sync it
pub fn run(args: SyncArgs) -> Result<()> {
    validate_branch_base(&args.branch_base)?;
    let repo = get_current_repository()?;
    debug!("Using repository at {}", repo.path().display());

    let reporter = ConsoleReporter::new(args.verbose);

    if args.dry_run {
        let plan = plan_sync(&repo, &args.branch_base, &args.settings.trunk)?;
        if args.json {
            let dry_run = DryRun {
                settings: &args.settings,
                plan: &plan,
                push_refs: plan.push_refs(),
            };
            println!("{}", serde_json::to_string_pretty(&dry_run)?);
        } else {
            reporter.plan(&plan);
            Output::info(format!(
                "Dry run: would push {} to {}",
                plan.push_refs().join(" "),
                args.settings.remote
            ));
        }
        return Ok(());
    }

    match run_sync(
        &repo,
        &args.settings,
        &args.branch_base,
        &reporter,
        &TerminalConfirm,
    )? {
        SyncOutcome::Applied(report) => {
            Output::success(format!(
                "Pushed {} refs to {}",
                report.pushed.len(),
                report.remote
            ));
        }
        SyncOutcome::Declined => {}
    }

    Ok(())
}
