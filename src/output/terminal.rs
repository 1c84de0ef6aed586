//! Human-readable terminal report.

use crate::explain::{ConfidenceLevel, Recommendation, ScoringResult};
use crate::questions::Question;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use std::fmt::Write;

fn confidence_label(level: ConfidenceLevel) -> String {
    match level {
        ConfidenceLevel::High => "HIGH".green().bold().to_string(),
        ConfidenceLevel::Medium => "MEDIUM".yellow().bold().to_string(),
        ConfidenceLevel::Low => "LOW".red().bold().to_string(),
    }
}

fn quality_label(quality: crate::core::CatalogQuality) -> &'static str {
    match quality {
        crate::core::CatalogQuality::Curated => "curated",
        crate::core::CatalogQuality::AiEnriched => "ai_enriched",
        crate::core::CatalogQuality::AiSuggested => "ai_suggested",
        crate::core::CatalogQuality::ExampleOnly => "example_only",
        crate::core::CatalogQuality::Discard => "discard",
    }
}

fn recommendations_table(recommendations: &[Recommendation]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Architecture", "Score", "Quality", "Matched", "Mismatched"]);
    for (i, rec) in recommendations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} ({})", rec.name, rec.architecture_id)),
            Cell::new(rec.likelihood_score),
            Cell::new(quality_label(rec.catalog_quality)),
            Cell::new(rec.matched_dimensions.len()),
            Cell::new(rec.mismatched_dimensions.len()),
        ]);
    }
    table
}

fn breakdown_table(rec: &Recommendation) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Dimension", "Weight", "Score", "Contribution", "Evidence"]);
    for d in &rec.score_breakdown.dimensions {
        table.add_row(vec![
            Cell::new(d.dimension),
            Cell::new(format!("{:.2}", d.weight)),
            Cell::new(format!("{:.2}", d.score)),
            Cell::new(format!("{:.3}", d.contribution)),
            Cell::new(&d.evidence),
        ]);
    }
    table
}

/// Render a scoring result. `-v` adds the primary recommendation's
/// dimension table, `-vv` adds every recommendation's full breakdown.
pub fn render_result(result: &ScoringResult, top: Option<usize>, verbosity: u8) -> String {
    let shown: &[Recommendation] = match top {
        Some(n) if n < result.recommendations.len() => &result.recommendations[..n],
        _ => &result.recommendations,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", "Recommendations".bold());
    if shown.is_empty() {
        let _ = writeln!(out, "  {}", "no eligible architectures".red());
    } else {
        let _ = writeln!(out, "{}", recommendations_table(shown));
    }

    let summary = &result.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Summary".bold());
    if let Some(primary) = &summary.primary_recommendation {
        let _ = writeln!(out, "  primary: {}", primary.bold());
    }
    let _ = writeln!(out, "  confidence: {}", confidence_label(summary.confidence_level));
    for driver in &summary.key_drivers {
        let _ = writeln!(out, "  {} {}", "+".green(), driver);
    }
    for risk in &summary.key_risks {
        let _ = writeln!(out, "  {} {}", "-".red(), risk);
    }
    for rejected in &summary.rejected_inferences {
        let _ = writeln!(out, "  {} {}", "~".yellow(), rejected);
    }

    if !result.excluded.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", "Excluded".bold(), result.excluded.len());
        for excluded in &result.excluded {
            let reasons: Vec<String> = excluded
                .reasons
                .iter()
                .map(|r| format!("{:?}", r.rule))
                .collect();
            let _ = writeln!(
                out,
                "  {} — {}",
                excluded.architecture_id,
                reasons.join(", ").dimmed()
            );
        }
    }

    if verbosity >= 1 {
        let detailed: &[Recommendation] = if verbosity >= 2 {
            shown
        } else {
            &shown[..shown.len().min(1)]
        };
        for rec in detailed {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{} {} (base {:.3} × quality {:.2} × (1 − penalty {:.2}) = {})",
                "Breakdown:".bold(),
                rec.architecture_id,
                rec.score_breakdown.base_score,
                rec.score_breakdown.quality_weight,
                rec.score_breakdown.confidence_penalty,
                rec.likelihood_score
            );
            let _ = writeln!(out, "{}", breakdown_table(rec));
            if !rec.assumptions.is_empty() {
                let _ = writeln!(out, "  assumptions:");
                for assumption in &rec.assumptions {
                    let _ = writeln!(out, "    • {assumption}");
                }
            }
        }
    }

    out
}

/// Render generated questions for a human.
pub fn render_questions(questions: &[Question]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", "Clarification questions".bold(), questions.len());
    for (i, q) in questions.iter().enumerate() {
        let mut flags = Vec::new();
        if q.required {
            flags.push("required");
        }
        if q.affects_eligibility {
            flags.push("affects eligibility");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {}{}", i + 1, q.question_text.bold(), flags.dimmed());
        let _ = writeln!(
            out,
            "   current inference: {} ({})",
            q.current_inference, q.inference_confidence
        );
        for option in &q.options {
            let _ = writeln!(out, "   - {} — {}", option.value, option.label);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::Summary;

    #[test]
    fn empty_result_renders_without_panicking() {
        let result = ScoringResult {
            recommendations: Vec::new(),
            excluded: Vec::new(),
            summary: Summary {
                primary_recommendation: None,
                confidence_level: ConfidenceLevel::Low,
                key_drivers: Vec::new(),
                key_risks: vec!["no eligible architecture matched the application".into()],
                rejected_inferences: Vec::new(),
            },
        };
        let rendered = render_result(&result, None, 2);
        assert!(rendered.contains("no eligible architectures"));
        assert!(rendered.contains("Summary"));
    }
}
