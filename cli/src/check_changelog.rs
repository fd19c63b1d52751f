use changelog::{Placement, Section, ValidationReport, Violation};
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ui;

#[derive(Debug, Clone)]
pub struct CheckChangelogArgs {
    pub base: String,
    pub head: String,
    pub path: String,
    pub verbose: bool,
}

pub fn execute(args: CheckChangelogArgs) -> Result<()> {
    let config = Config::from_env()?;

    // Dependency-update bots rewrite lockfiles, not changelogs.
    if let Some(actor) = &config.actor {
        if is_dependency_bot(actor) {
            ui::info_message(&format!(
                "Skipping changelog check for automated actor '{actor}'"
            ));
            return Ok(());
        }
    }

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    rt.block_on(execute_async(args, config))
}

async fn execute_async(args: CheckChangelogArgs, config: Config) -> Result<()> {
    let client = config.client()?;

    if args.verbose {
        ui::info_message(&format!(
            "Comparing {} between {} and {} in {}",
            args.path, args.base, args.head, config.repository
        ));
    }

    let base = client
        .file_at_ref(&args.path, &args.base)
        .await
        .map_err(|e| CliError::Github(e).with_context("Failed to fetch base revision"))?;
    let head = client
        .file_at_ref(&args.path, &args.head)
        .await
        .map_err(|e| CliError::Github(e).with_context("Failed to fetch head revision"))?;

    let report = changelog::validate(&base, &head);
    render_report(&report, args.verbose);

    if report.passed() {
        ui::success_message(&format!("Changelog check passed ({})", report.summary()));
        Ok(())
    } else {
        ui::info_message(&report.summary());
        Err(CliError::ValidationFailed(report.violations.len()))
    }
}

fn render_report(report: &ValidationReport, verbose: bool) {
    for violation in &report.violations {
        ui::error_message(&violation.to_string());
        if let Violation::ReleasedSectionModified { lines } = violation {
            for line in lines {
                eprintln!("    {line}");
            }
        }
    }

    for advisory in &report.advisories {
        ui::warning_message(&advisory.to_string());
    }

    if verbose {
        for entry in &report.added {
            let placement = match entry.placement {
                Placement::CorrectlyPlaced => "correctly placed",
                Placement::Orphan => "orphan",
                Placement::WrongSection => "wrong section",
            };
            let location = describe_location(entry.section.as_ref(), entry.subsection.as_deref());
            println!(
                "  + line {}: {} ({location}, {placement})",
                entry.line, entry.content
            );
        }
        for removed in &report.removed {
            println!("  - {}", removed.content);
        }
    }
}

fn describe_location(section: Option<&Section>, subsection: Option<&str>) -> String {
    match (section, subsection) {
        (Some(section), Some(subsection)) => format!("{section} / {subsection}"),
        (Some(section), None) => section.to_string(),
        (None, _) => "outside any section".to_string(),
    }
}

fn is_dependency_bot(actor: &str) -> bool {
    actor.ends_with("[bot]") || actor.starts_with("dependabot") || actor.starts_with("renovate")
}
