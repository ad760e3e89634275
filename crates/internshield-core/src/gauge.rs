use std::f64::consts::PI;

use crate::types::{SCORE_DISPLAY_MAX, SCORE_DISPLAY_MIN};

pub const GAUGE_RADIUS: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub radius: f64,
    pub circumference: f64,
    pub visual_score: f64,
    pub stroke_offset: f64,
}

impl GaugeGeometry {
    pub fn new(radius: f64, raw_score: f64) -> Self {
        let circumference = PI * radius;
        let visual_score = clamp_visual(raw_score);
        let stroke_offset = circumference - (visual_score / SCORE_DISPLAY_MAX) * circumference;
        Self {
            radius,
            circumference,
            visual_score,
            stroke_offset,
        }
    }

    pub fn for_score(raw_score: f64) -> Self {
        Self::new(GAUGE_RADIUS, raw_score)
    }

    pub fn filled_fraction(&self) -> f64 {
        self.visual_score / SCORE_DISPLAY_MAX
    }
}

fn clamp_visual(raw_score: f64) -> f64 {
    if raw_score.is_nan() {
        return SCORE_DISPLAY_MIN;
    }
    raw_score.clamp(SCORE_DISPLAY_MIN, SCORE_DISPLAY_MAX)
}
