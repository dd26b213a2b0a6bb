use crate::cli::Cli;
use crate::domain::models::CheckEntry;
use crate::services::firmware::FirmwareQuery;
use crate::services::output::{emit_json, print_rows};
use crate::services::runner;
use std::io::Write;

/// Run the full sweep. Text mode streams each expectation label before its
/// query executes, so a hung firmware call still shows which check it was.
pub fn handle_run(cli: &Cli, fw: &dyn FirmwareQuery, checks: &[CheckEntry]) -> anyhow::Result<()> {
    if cli.json {
        let outcomes = runner::run_sweep(fw, checks);
        return emit_json(&outcomes);
    }

    for check in checks {
        print!("{}", check.label);
        std::io::stdout().flush()?;
        let outcome = runner::run_check(fw, check);
        println!("{}", outcome.output);
    }
    Ok(())
}

pub fn handle_list(cli: &Cli, checks: &[CheckEntry]) -> anyhow::Result<()> {
    print_rows(cli.json, checks, |c| {
        format!("{}\t{}", c.name, c.args.join(" "))
    })
}
