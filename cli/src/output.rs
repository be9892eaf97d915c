//! Terminal output formatting

use colored::Colorize;
use tress_application::RoutineRecommendation;
use tress_domain::ValidationReport;

/// Format a validation report for the terminal
pub fn format_report(report: &ValidationReport) -> String {
    if report.is_valid {
        return format!("{} answers are valid", "ok".green().bold());
    }

    let mut out = format!(
        "{} {} validation error(s)\n",
        "error:".red().bold(),
        report.errors.len()
    );
    for error in &report.errors {
        out.push_str(&format!("  - {}\n", error));
    }
    out.trim_end().to_string()
}

/// Format a full recommendation for the terminal
pub fn format_recommendation(recommendation: &RoutineRecommendation) -> String {
    let mut out = String::new();

    out.push_str(&format_report(&recommendation.report));
    out.push_str(&format!(
        "\n{} {}%\n",
        "completion:".bold(),
        recommendation.completion
    ));

    if recommendation.matches.is_empty() {
        out.push_str(&format!("{}\n", "no matching rules".yellow()));
    } else {
        out.push_str(&format!("{}\n", "matched rules:".bold()));
        for rule in &recommendation.matches {
            out.push_str(&format!(
                "  {:>3}  {} — {}\n",
                rule.priority,
                rule.name.cyan(),
                rule.description
            ));
        }
    }

    out.push_str(&format!("\n{}\n", recommendation.explanation));
    out
}
