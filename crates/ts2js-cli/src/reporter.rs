use colored::Colorize;
use std::path::Path;

use ts2js::FileFailure;
use ts2js::common::Diagnostic;

use crate::driver::RunSummary;
use crate::vcs::BranchAction;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// The end-of-run summary. Paths are shown relative to `root`.
    pub fn render(&self, summary: &RunSummary, root: &Path) -> String {
        let report = &summary.report;
        let mut out = String::new();

        match &summary.branch {
            Some(BranchAction::Created(name)) => {
                push_line(&mut out, &format!("Created branch {}", self.bold(name)));
            }
            Some(BranchAction::Kept(name)) => {
                push_line(&mut out, &format!("Converting on branch {}", self.bold(name)));
            }
            None => {}
        }

        for warning in &report.warnings {
            push_line(&mut out, &self.format_warning(warning, root));
        }

        self.write_failures(&mut out, "Failed to convert", &report.failed, root);
        self.write_failures(&mut out, "Converted but not renamed", &report.rename_failed, root);

        if !summary.removed_packages.is_empty() {
            push_line(
                &mut out,
                &format!("Removed packages: {}", summary.removed_packages.join(", ")),
            );
        }
        if summary.removed_config {
            push_line(&mut out, "Removed tsconfig.json");
        }
        for problem in &summary.problems {
            push_line(&mut out, &format!("{}: {problem}", self.warning_label()));
        }

        push_line(
            &mut out,
            &format!(
                "{} {} converted, {} failed, {} not renamed, {}",
                self.summary_label(summary),
                count(report.converted.len(), "file"),
                report.failed.len(),
                report.rename_failed.len(),
                count(report.warnings.len(), "warning"),
            ),
        );
        out
    }

    fn write_failures(&self, out: &mut String, title: &str, failures: &[FileFailure], root: &Path) {
        if failures.is_empty() {
            return;
        }
        push_line(out, &format!("{title} {}:", count(failures.len(), "file")));
        for failure in failures {
            let path = relative(&failure.path, root);
            push_line(out, &format!("  {}: {}", self.path(&path), failure.error));
        }
    }

    fn format_warning(&self, warning: &Diagnostic, root: &Path) -> String {
        let file = relative(Path::new(&warning.file), root);
        format!(
            "{} (offset {}): {} TS{}: {}",
            self.path(&file),
            warning.start,
            self.warning_label(),
            warning.code,
            warning.message_text
        )
    }

    fn summary_label(&self, summary: &RunSummary) -> String {
        let report = &summary.report;
        if !self.color {
            return "Done:".to_string();
        }
        if report.is_total_failure() {
            "Done:".red().bold().to_string()
        } else if report.failed.is_empty() && report.rename_failed.is_empty() {
            "Done:".green().bold().to_string()
        } else {
            "Done:".yellow().bold().to_string()
        }
    }

    fn warning_label(&self) -> String {
        if self.color {
            "warning".yellow().bold().to_string()
        } else {
            "warning".to_string()
        }
    }

    fn path(&self, path: &str) -> String {
        if self.color {
            path.cyan().to_string()
        } else {
            path.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
