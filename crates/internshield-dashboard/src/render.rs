use std::fmt::Write as _;

use internshield_core::{FindingsPanel, GaugeGeometry, NO_FACTORS_TEXT, REASSURANCE_TEXT};
use serde_json::{Value, json};

use crate::view::{DashboardView, ResultsView};

pub const GAUGE_WIDTH: usize = 30;

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn filled_cells(displayed_score: i64, width: usize) -> usize {
    let fraction = GaugeGeometry::for_score(displayed_score as f64).filled_fraction();
    let cells = (fraction * width as f64).round();
    (cells.max(0.0) as usize).min(width)
}

// The terminal bar fills with the count-up; the arc geometry stays on the raw score.
pub fn render_gauge_line(results: &ResultsView) -> String {
    let filled = filled_cells(results.displayed_score, GAUGE_WIDTH);
    format!(
        "[{}{}] {:>3}  RISK SCORE ({})",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled),
        results.displayed_score,
        results.level.as_str()
    )
}

pub fn render_text(view: &DashboardView) -> String {
    let mut out = String::new();

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "! {}", notice.message);
    }

    let Some(results) = &view.results else {
        if !view.action.enabled {
            let _ = writeln!(out, "{}", view.action.label);
        }
        return out;
    };

    let _ = writeln!(out, "{}", render_gauge_line(results));
    let _ = writeln!(
        out,
        "Verdict: [ {} ] ({})",
        results.verdict,
        results.verdict_style.as_str()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", results.findings.title());
    match &results.findings {
        FindingsPanel::RiskFactors(reasons) => {
            for reason in reasons {
                let _ = writeln!(out, "  - {reason}");
            }
        }
        FindingsPanel::Reassurance => {
            let _ = writeln!(out, "  {REASSURANCE_TEXT}");
        }
        FindingsPanel::NoFactorsReported => {
            let _ = writeln!(out, "  {NO_FACTORS_TEXT}");
        }
    }
    out
}

pub fn render_json(view: &DashboardView) -> Value {
    let results = view.results.as_ref().map(|results| {
        let reasons = match &results.findings {
            FindingsPanel::RiskFactors(reasons) => reasons.clone(),
            FindingsPanel::Reassurance | FindingsPanel::NoFactorsReported => Vec::new(),
        };
        json!({
            "displayed_score": results.displayed_score,
            "risk_score": results.raw_score,
            "risk_level": results.level.as_str(),
            "gradient_id": results.level.gradient_id(),
            "verdict": results.verdict,
            "verdict_style": results.verdict_style.as_str(),
            "verdict_class": results.verdict_style.class_name(),
            "gauge": {
                "radius": results.gauge.radius,
                "circumference": results.gauge.circumference,
                "visual_score": results.gauge.visual_score,
                "stroke_offset": results.gauge.stroke_offset,
            },
            "panel": {
                "kind": results.findings.kind(),
                "title": results.findings.title(),
                "reasons": reasons,
            },
        })
    });

    json!({
        "state": view.state,
        "action": {
            "label": view.action.label,
            "enabled": view.action.enabled,
        },
        "notice": view.notice.as_ref().map(|n| n.message.clone()),
        "results": results,
    })
}
