use internshield_core::{
    FindingsPanel, GaugeGeometry, RiskLevel, VerdictStyle, findings_panel, risk_level,
    verdict_style,
};

use crate::controller::SubmissionState;
use crate::notice::Notice;

pub const ANALYZE_LABEL: &str = "Analyze Risk";
pub const ANALYZING_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionControl {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub displayed_score: i64,
    pub raw_score: f64,
    pub level: RiskLevel,
    pub gauge: GaugeGeometry,
    pub verdict: String,
    pub verdict_style: VerdictStyle,
    pub findings: FindingsPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub state: &'static str,
    pub action: ActionControl,
    pub notice: Option<Notice>,
    pub results: Option<ResultsView>,
}

pub fn derive_view(
    state: &SubmissionState,
    displayed_score: i64,
    notice: Option<&Notice>,
) -> DashboardView {
    let pending = matches!(state, SubmissionState::Pending);
    let action = ActionControl {
        label: if pending { ANALYZING_LABEL } else { ANALYZE_LABEL },
        enabled: !pending,
    };

    let results = state.result().map(|result| ResultsView {
        displayed_score,
        raw_score: result.risk_score,
        level: risk_level(result.risk_score),
        gauge: GaugeGeometry::for_score(result.risk_score),
        verdict: result.verdict.clone(),
        verdict_style: verdict_style(&result.verdict),
        findings: findings_panel(result),
    });

    DashboardView {
        state: state.label(),
        action,
        notice: notice.cloned(),
        results,
    }
}
