//! Report renderer
//!
//! Turns a `ProjectReport` into the Markdown document. No decisions are made
//! here beyond iteration order: extensions by descending count, module kinds in
//! priority order, modules by path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{ModuleKind, ProjectReport};
use crate::core::template::{ReportTemplate, DEPENDENCY_DIAGRAM, DIRECTORY_GUIDE, NOTES};

/// Label of the line carrying the generation timestamp
pub const TIMESTAMP_LABEL: &str = "**Generated at:**";

/// Matches the timestamp line so documents can be compared across runs
pub static TIMESTAMP_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^{} .*$", regex::escape(TIMESTAMP_LABEL)))
        .expect("Invalid TIMESTAMP_LINE_RE regex")
});

/// Render the full Markdown document
pub fn render_report(report: &ProjectReport, template: &ReportTemplate) -> String {
    let mut output = String::new();

    render_header(&mut output, report, template);
    render_statistics(&mut output, report);
    render_tree_block(&mut output, report, template);
    render_modules(&mut output, report);

    output.push('\n');
    output.push_str(DIRECTORY_GUIDE);
    output.push('\n');
    output.push_str(DEPENDENCY_DIAGRAM);
    output.push('\n');
    render_instructions(&mut output, template);
    output.push('\n');
    output.push_str(NOTES);
    output.push_str(&format!("- Maximum tree depth: {} levels\n", report.max_depth));

    output
}

/// Replace the timestamp line with a fixed placeholder
pub fn strip_timestamp(document: &str) -> String {
    TIMESTAMP_LINE_RE
        .replace_all(document, format!("{} -", TIMESTAMP_LABEL).as_str())
        .into_owned()
}

fn render_header(output: &mut String, report: &ProjectReport, template: &ReportTemplate) {
    output.push_str(&format!(
        "# Project structure: {} (auto-generated)\n\n",
        template.title
    ));
    output.push_str(&format!(
        "> **⚠️ WARNING:** This file is generated automatically by `{}`\n",
        template.regenerate_command
    ));
    output.push_str("> \n");
    output.push_str(
        "> **Do not edit this file by hand!** All changes are overwritten on the next run.\n",
    );
    output.push_str("> \n");
    output.push_str(
        "> To change the project structure, edit the project files and rerun the generator.\n\n",
    );
    output.push_str(&format!("{} {}\n\n", TIMESTAMP_LABEL, report.generated_at));
}

fn render_statistics(output: &mut String, report: &ProjectReport) {
    output.push_str("## Project statistics\n\n");
    output.push_str(&format!("- **Total files:** {}\n", report.totals.files));
    output.push_str(&format!("- **Total directories:** {}\n", report.totals.dirs));
    output.push_str(&format!("- **Modules:** {}\n\n", report.modules.len()));

    output.push_str("### Files by type\n\n");
    for (ext, count) in report.extensions.nonzero_by_count() {
        output.push_str(&format!("- `{}`: {} files\n", ext, count));
    }
}

fn render_tree_block(output: &mut String, report: &ProjectReport, template: &ReportTemplate) {
    output.push_str("\n## Project tree\n\n```\n");
    output.push_str(&format!("{}/\n", template.tree_label));
    output.push_str(&report.tree.join("\n"));
    output.push_str("\n```\n");
}

fn render_modules(output: &mut String, report: &ProjectReport) {
    output.push_str("\n## Project modules\n");
    for kind in ModuleKind::ALL {
        output.push_str(&format!("\n### {}\n\n", kind.heading()));
        for record in report.modules.of_kind(kind) {
            output.push_str(&format!("- **`{}`**\n", record.path));
            output.push_str(&format!("  - Build file: `{}`\n", record.build_file));
        }
    }
}

fn render_instructions(output: &mut String, template: &ReportTemplate) {
    output.push_str("## Regenerating this file\n\n");
    output.push_str("The structure is refreshed:\n");
    output.push_str("1. On every commit by CI\n");
    output.push_str(&format!(
        "2. Manually: run `{}` from the project root\n\n",
        template.regenerate_command
    ));
    output.push_str("To check that the committed file is current:\n");
    output.push_str("```bash\nstructmap check\n```\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ExtensionCounts, ModuleIndex, ModuleRecord, Totals};

    fn sample_report() -> ProjectReport {
        let seed: Vec<String> = [".kt", ".md", ".java"].iter().map(|s| s.to_string()).collect();
        let mut extensions = ExtensionCounts::seeded(&seed);
        extensions.record(".kt");
        extensions.record(".kt");
        extensions.record(".md");

        let mut modules = ModuleIndex::new();
        modules.insert_if_absent(ModuleRecord {
            kind: ModuleKind::Nodejs,
            path: "server/web".to_string(),
            build_file: "server/web/package.json".to_string(),
        });
        modules.insert_if_absent(ModuleRecord {
            kind: ModuleKind::Gradle,
            path: "shared".to_string(),
            build_file: "shared/build.gradle.kts".to_string(),
        });
        modules.insert_if_absent(ModuleRecord {
            kind: ModuleKind::Gradle,
            path: ".".to_string(),
            build_file: "build.gradle.kts".to_string(),
        });

        ProjectReport {
            generated_at: "2024-01-02 03:04:05".to_string(),
            max_depth: 5,
            totals: Totals { files: 7, dirs: 3 },
            extensions,
            modules,
            tree: vec!["├── README.md".to_string(), "└── shared/".to_string()],
        }
    }

    #[test]
    fn test_statistics_section() {
        let doc = render_report(&sample_report(), &ReportTemplate::default());
        assert!(doc.contains("- **Total files:** 7\n"));
        assert!(doc.contains("- **Total directories:** 3\n"));
        assert!(doc.contains("- **Modules:** 3\n"));
        assert!(doc.contains("- `.kt`: 2 files\n- `.md`: 1 files\n"));
        assert!(!doc.contains("`.java`"));
    }

    #[test]
    fn test_tree_block() {
        let doc = render_report(&sample_report(), &ReportTemplate::default());
        assert!(doc.contains("```\nIP-CSS/\n├── README.md\n└── shared/\n```\n"));
    }

    #[test]
    fn test_module_sections_in_order() {
        let doc = render_report(&sample_report(), &ReportTemplate::default());
        let gradle = doc.find("### Gradle modules").unwrap();
        let cmake = doc.find("### CMake modules").unwrap();
        let node = doc.find("### Node.js modules").unwrap();
        assert!(gradle < cmake && cmake < node);

        let root_module = doc.find("- **`.`**\n  - Build file: `build.gradle.kts`").unwrap();
        let shared = doc.find("- **`shared`**").unwrap();
        assert!(gradle < root_module && root_module < shared && shared < cmake);

        assert!(doc[node..].contains("- **`server/web`**\n  - Build file: `server/web/package.json`"));
    }

    #[test]
    fn test_template_values_interpolated() {
        let template = ReportTemplate {
            title: "Demo".to_string(),
            tree_label: "demo".to_string(),
            regenerate_command: "make structure".to_string(),
        };
        let doc = render_report(&sample_report(), &template);
        assert!(doc.starts_with("# Project structure: Demo (auto-generated)\n"));
        assert!(doc.contains("```\ndemo/\n"));
        assert!(doc.contains("run `make structure` from the project root"));
        assert!(doc.ends_with("- Maximum tree depth: 5 levels\n"));
    }

    #[test]
    fn test_strip_timestamp() {
        let report = sample_report();
        let first = render_report(&report, &ReportTemplate::default());
        let mut later = report.clone();
        later.generated_at = "2030-12-31 23:59:59".to_string();
        let second = render_report(&later, &ReportTemplate::default());

        assert_ne!(first, second);
        assert_eq!(strip_timestamp(&first), strip_timestamp(&second));
        assert!(strip_timestamp(&first).contains("**Generated at:** -\n"));
    }

    #[test]
    fn test_empty_tree_keeps_fences() {
        let mut report = sample_report();
        report.tree.clear();
        let doc = render_report(&report, &ReportTemplate::default());
        assert!(doc.contains("```\nIP-CSS/\n\n```\n"));
    }
}
