//! Generate flow - Run every pass and produce the structure document

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::model::ProjectReport;
use crate::core::policy::ScanPolicy;
use crate::core::render::{render_report, strip_timestamp};
use crate::core::template::ReportTemplate;
use crate::core::util::{now_timestamp, write_atomic};
use crate::scan::counter::{count_entries, count_extensions};
use crate::scan::modules::locate_modules;
use crate::scan::tree::render_tree;

/// Name of the generated document, placed at the scan root
pub const OUTPUT_FILE: &str = "PROJECT_STRUCTURE_AUTO.md";

/// Path of the generated document for a root
pub fn output_path(root: &Path) -> PathBuf {
    root.join(OUTPUT_FILE)
}

/// Run all passes over `root`
pub fn collect_report(
    root: &Path,
    policy: &ScanPolicy,
    generated_at: impl Into<String>,
) -> Result<ProjectReport> {
    if !root.is_dir() {
        bail!("Root is not a directory: {:?}", root);
    }

    let totals = count_entries(root, &policy.filter).context("Failed to count entries")?;
    let extensions = count_extensions(root, policy).context("Failed to count extensions")?;
    let modules = locate_modules(root, &policy.filter).context("Failed to locate modules")?;
    let tree = render_tree(root, policy).context("Failed to render tree")?;

    Ok(ProjectReport {
        generated_at: generated_at.into(),
        max_depth: policy.max_depth,
        totals,
        extensions,
        modules,
        tree,
    })
}

/// Build the Markdown document for `root` stamped with the current time
pub fn generate_document(
    root: &Path,
    policy: &ScanPolicy,
    template: &ReportTemplate,
) -> Result<String> {
    let report = collect_report(root, policy, now_timestamp())?;
    Ok(render_report(&report, template))
}

/// Run the generate command
pub fn run_generate(root: &Path, policy: &ScanPolicy, to_stdout: bool, quiet: bool) -> Result<()> {
    let template = ReportTemplate::default();

    if to_stdout {
        print!("{}", generate_document(root, policy, &template)?);
        return Ok(());
    }

    if !quiet {
        println!(
            "{} {}...",
            "Generating project structure from".bold(),
            root.display()
        );
    }

    let document = generate_document(root, policy, &template)?;
    let output = output_path(root);
    write_atomic(&output, &document)?;
    info!(path = %output.display(), bytes = document.len(), "wrote structure document");

    if !quiet {
        println!(
            "{} Project structure saved to {} ({} characters)",
            "✓".green(),
            output.display(),
            document.chars().count()
        );
    }

    Ok(())
}

/// Run the check command: fail when the saved document is missing or stale
pub fn run_check(root: &Path, policy: &ScanPolicy, quiet: bool) -> Result<()> {
    let output = output_path(root);
    let saved = fs::read_to_string(&output)
        .with_context(|| format!("Failed to read {:?}; run `structmap generate` first", output))?;

    let fresh = generate_document(root, policy, &ReportTemplate::default())?;
    let up_to_date = strip_timestamp(&saved) == strip_timestamp(&fresh);
    debug!(path = %output.display(), up_to_date, "compared structure document");

    if !up_to_date {
        bail!(
            "{} is out of date; run `structmap generate` to refresh it",
            output.display()
        );
    }

    if !quiet {
        println!("{} {} is up to date", "✓".green(), output.display());
    }
    Ok(())
}

/// Run the stats command: print the collected report as JSON
pub fn run_stats(root: &Path, policy: &ScanPolicy, pretty: bool) -> Result<()> {
    let report = collect_report(root, policy, now_timestamp())?;
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}
