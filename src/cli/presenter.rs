use crate::cli::output::Output;
use crate::stack::{Reporter, SyncPlan};
use console::style;

/// Prints the plan and echoed commands to stdout
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn plan(&self, plan: &SyncPlan) {
        if plan.is_empty() {
            Output::warning(format!(
                "No stack positions found for '{}'; only {} will be pushed",
                plan.branch_base(),
                plan.sentinel()
            ));
            return;
        }

        for entry in plan.entries() {
            Output::plan_line(&entry.branch, &entry.message);
            if self.verbose {
                Output::sub_item(format!("target {}", style(&entry.target).dim()));
            }
        }
    }

    fn command(&self, line: &str) {
        Output::command(line);
    }
}
