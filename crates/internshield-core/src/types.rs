pub const SCORE_DISPLAY_MIN: f64 = 0.0;
pub const SCORE_DISPLAY_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RiskResult {
    pub risk_score: f64,
    pub verdict: String,
    pub reasons: Vec<String>,
}

impl RiskResult {
    pub fn new(
        risk_score: f64,
        verdict: impl Into<String>,
        reasons: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            risk_score,
            verdict: verdict.into(),
            reasons: reasons.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_in_display_range(&self) -> bool {
        (SCORE_DISPLAY_MIN..=SCORE_DISPLAY_MAX).contains(&self.risk_score)
    }

    pub fn has_reasons(&self) -> bool {
        !self.reasons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_range_is_inclusive() {
        assert!(RiskResult::new(0.0, "Looks Legit", Vec::<String>::new()).is_in_display_range());
        assert!(RiskResult::new(100.0, "Likely Scam", ["x"]).is_in_display_range());
        assert!(!RiskResult::new(150.0, "Likely Scam", ["x"]).is_in_display_range());
        assert!(!RiskResult::new(-1.0, "Looks Legit", Vec::<String>::new()).is_in_display_range());
    }
}
