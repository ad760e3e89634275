use crate::types::RiskResult;

pub const VERDICT_LOOKS_LEGIT: &str = "Looks Legit";
pub const VERDICT_SUSPICIOUS: &str = "Suspicious";

pub const RISK_FACTORS_TITLE: &str = "Risk Factors Detected";
pub const REASSURANCE_TITLE: &str = "Safety Analysis";
pub const REASSURANCE_TEXT: &str = "No evident risk factors found. Proceed with standard caution.";
pub const NO_FACTORS_TITLE: &str = "Risk Factors";
pub const NO_FACTORS_TEXT: &str =
    "The scoring service reported a risk score without listing specific factors.";

const MEDIUM_FLOOR: f64 = 30.0;
const HIGH_FLOOR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    // NaN fails both comparisons and lands in High.
    pub fn from_score(score: f64) -> Self {
        if score < MEDIUM_FLOOR {
            Self::Low
        } else if score < HIGH_FLOOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn gradient_id(self) -> &'static str {
        match self {
            Self::Low => "grad-low",
            Self::Medium => "grad-medium",
            Self::High => "grad-high",
        }
    }
}

pub fn risk_level(score: f64) -> RiskLevel {
    RiskLevel::from_score(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictStyle {
    Safe,
    Warning,
    Danger,
}

impl VerdictStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Safe => "verdict-safe",
            Self::Warning => "verdict-warning",
            Self::Danger => "verdict-danger",
        }
    }
}

pub fn verdict_style(verdict: &str) -> VerdictStyle {
    match verdict {
        VERDICT_LOOKS_LEGIT => VerdictStyle::Safe,
        VERDICT_SUSPICIOUS => VerdictStyle::Warning,
        _ => VerdictStyle::Danger,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingsPanel {
    RiskFactors(Vec<String>),
    Reassurance,
    NoFactorsReported,
}

impl FindingsPanel {
    pub fn title(&self) -> &'static str {
        match self {
            Self::RiskFactors(_) => RISK_FACTORS_TITLE,
            Self::Reassurance => REASSURANCE_TITLE,
            Self::NoFactorsReported => NO_FACTORS_TITLE,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::RiskFactors(_) => "risk_factors",
            Self::Reassurance => "reassurance",
            Self::NoFactorsReported => "no_factors_reported",
        }
    }
}

pub fn findings_panel(result: &RiskResult) -> FindingsPanel {
    if result.has_reasons() {
        FindingsPanel::RiskFactors(result.reasons.clone())
    } else if result.risk_score == 0.0 {
        FindingsPanel::Reassurance
    } else {
        FindingsPanel::NoFactorsReported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_band_edges() {
        assert_eq!(risk_level(0.0), RiskLevel::Low);
        assert_eq!(risk_level(29.0), RiskLevel::Low);
        assert_eq!(risk_level(29.9), RiskLevel::Low);
        assert_eq!(risk_level(30.0), RiskLevel::Medium);
        assert_eq!(risk_level(59.0), RiskLevel::Medium);
        assert_eq!(risk_level(60.0), RiskLevel::High);
        assert_eq!(risk_level(100.0), RiskLevel::High);
        assert_eq!(risk_level(150.0), RiskLevel::High);
    }

    #[test]
    fn risk_level_covers_whole_integer_range() {
        for score in 0..30 {
            assert_eq!(risk_level(f64::from(score)).as_str(), "low", "score {score}");
        }
        for score in 30..60 {
            assert_eq!(risk_level(f64::from(score)).as_str(), "medium", "score {score}");
        }
        for score in 60..=200 {
            assert_eq!(risk_level(f64::from(score)).as_str(), "high", "score {score}");
        }
    }

    #[test]
    fn negative_and_nan_scores() {
        assert_eq!(risk_level(-5.0), RiskLevel::Low);
        assert_eq!(risk_level(f64::NAN), RiskLevel::High);
    }

    #[test]
    fn gradient_ids_follow_level() {
        assert_eq!(risk_level(10.0).gradient_id(), "grad-low");
        assert_eq!(risk_level(45.0).gradient_id(), "grad-medium");
        assert_eq!(risk_level(82.0).gradient_id(), "grad-high");
    }

    #[test]
    fn verdict_styles() {
        assert_eq!(verdict_style("Looks Legit").as_str(), "safe");
        assert_eq!(verdict_style("Suspicious").as_str(), "warning");
        assert_eq!(verdict_style("Anything else").as_str(), "danger");
        assert_eq!(verdict_style("Likely Scam").as_str(), "danger");
        assert_eq!(verdict_style("").as_str(), "danger");
        assert_eq!(verdict_style("looks legit"), VerdictStyle::Danger);
        assert_eq!(verdict_style("Suspicious").class_name(), "verdict-warning");
    }

    #[test]
    fn findings_panel_variants() {
        let with_reasons = RiskResult::new(82.0, "Likely Scam", ["Urgency language"]);
        assert_eq!(
            findings_panel(&with_reasons),
            FindingsPanel::RiskFactors(vec!["Urgency language".to_string()])
        );

        let clean = RiskResult::new(0.0, "Looks Legit", Vec::<String>::new());
        assert_eq!(findings_panel(&clean), FindingsPanel::Reassurance);

        let unexplained = RiskResult::new(20.0, "Looks Legit", Vec::<String>::new());
        assert_eq!(findings_panel(&unexplained), FindingsPanel::NoFactorsReported);
        assert_eq!(findings_panel(&unexplained).kind(), "no_factors_reported");
    }

    #[test]
    fn zero_score_with_reasons_lists_reasons() {
        let result = RiskResult::new(0.0, "Looks Legit", ["Odd phrasing"]);
        assert!(matches!(findings_panel(&result), FindingsPanel::RiskFactors(r) if r.len() == 1));
    }
}
