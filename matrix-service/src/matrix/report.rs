// Matrix Reporter
// Renders expanded matrices as terminal text or JSON

use crate::error::ServiceResult;
use crate::matrix::models::{format_values, ActionKind, MatrixResult};

use std::fmt;

/// Output format for matrix reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable tables and action trace
    Terminal,
    /// Pretty-printed JSON array of results
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Terminal => write!(f, "terminal"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" | "console" => Ok(ReportFormat::Terminal),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format '{}'. Valid formats: terminal, json",
                s
            )),
        }
    }
}

/// Matrix reporter that generates output in various formats
pub struct MatrixReporter;

impl MatrixReporter {
    /// Generate a report in the specified format.
    ///
    /// `details` adds the initial sets, directives and action trace to
    /// terminal output; JSON always carries everything.
    pub fn report(
        results: &[MatrixResult],
        format: ReportFormat,
        details: bool,
    ) -> ServiceResult<String> {
        match format {
            ReportFormat::Terminal => Ok(Self::to_terminal(results, details)),
            ReportFormat::Json => Self::to_json(results),
        }
    }

    pub fn to_json(results: &[MatrixResult]) -> ServiceResult<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }

    pub fn to_terminal(results: &[MatrixResult], details: bool) -> String {
        if results.is_empty() {
            return "No matrices found\n".to_string();
        }

        let mut out = String::new();
        for (i, result) in results.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }

            out.push_str(&format!(
                "Matrix {} at {} ({} combination{})\n",
                i + 1,
                result.path,
                result.combinations.len(),
                if result.combinations.len() == 1 { "" } else { "s" }
            ));
            out.push_str(&Self::table(result));

            if details {
                out.push_str(&Self::details(result));
            }
        }
        out
    }

    /// Combination table with one column per key the matrix mentions
    pub fn table(result: &MatrixResult) -> String {
        let columns = result.columns();
        if columns.is_empty() {
            return "  (no dimensions)\n".to_string();
        }

        let widths: Vec<usize> = columns
            .iter()
            .map(|column| {
                result
                    .combinations
                    .iter()
                    .filter_map(|c| c.get(*column))
                    .map(|v| v.chars().count())
                    .chain(std::iter::once(column.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        out.push_str(&Self::row(&header, &widths));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format!("  {}\n", rule.join("-+-")));

        for combination in &result.combinations {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| combination.get(*column).cloned().unwrap_or_default())
                .collect();
            out.push_str(&Self::row(&cells, &widths));
        }
        out
    }

    fn row(cells: &[String], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("  {}\n", padded.join(" | ").trim_end())
    }

    fn details(result: &MatrixResult) -> String {
        let mut out = String::new();

        out.push_str("  Initial sets:\n");
        for (name, values) in &result.matrix.entries {
            out.push_str(&format!("    {}: {}\n", name, values.join(", ")));
        }

        if let Some(include) = &result.matrix.include {
            out.push_str("  Includes:\n");
            for directive in include {
                out.push_str(&format!("    {}\n", format_values(directive)));
            }
        }

        if let Some(exclude) = &result.matrix.exclude {
            out.push_str("  Excludes:\n");
            for directive in exclude {
                out.push_str(&format!("    {}\n", format_values(directive)));
            }
        }

        out.push_str("  Actions:\n");
        if result.actions.is_empty() {
            out.push_str("    (none)\n");
        }
        for action in &result.actions {
            let marker = match action.kind {
                ActionKind::Add => '+',
                ActionKind::Edit => '~',
                ActionKind::Remove => 'x',
            };
            out.push_str(&format!("    {} {}\n", marker, action));
        }

        out
    }
}
