//! Element Scorer — scores one task statement against one impact dimension.
//!
//! raw = 2.0 × (distinct strong patterns matched) + 1.0 × (distinct moderate patterns matched)
//! score = round(raw) clamped to [0, 9]
//!
//! A pattern counts once per statement no matter how often it occurs.

use serde::{Deserialize, Serialize};

use crate::impact::taxonomy::{
    Dimension, DimensionPatterns, KeywordTaxonomy, MODERATE_WEIGHT, STRONG_WEIGHT,
};

pub const MAX_DIMENSION_SCORE: u8 = 9;

/// Per-dimension integer scores for one task, each in [0, 9].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub efficiency: u8,
    pub quality: u8,
    pub cost: u8,
    pub revenue: u8,
    pub service: u8,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Efficiency => self.efficiency,
            Dimension::Quality => self.quality,
            Dimension::Cost => self.cost,
            Dimension::Revenue => self.revenue,
            Dimension::Service => self.service,
        }
    }

    fn set(&mut self, dimension: Dimension, score: u8) {
        let slot = match dimension {
            Dimension::Efficiency => &mut self.efficiency,
            Dimension::Quality => &mut self.quality,
            Dimension::Cost => &mut self.cost,
            Dimension::Revenue => &mut self.revenue,
            Dimension::Service => &mut self.service,
        };
        *slot = score;
    }

    pub fn total(&self) -> u32 {
        Dimension::ALL.iter().map(|&d| self.get(d) as u32).sum()
    }
}

/// Scores `statement` against a single dimension's pattern sets.
pub fn score_element(statement: &str, patterns: &DimensionPatterns) -> u8 {
    if statement.trim().is_empty() {
        return 0;
    }

    let strong_hits = patterns.strong.iter().filter(|p| p.is_match(statement)).count();
    let moderate_hits = patterns
        .moderate
        .iter()
        .filter(|p| p.is_match(statement))
        .count();

    let raw = STRONG_WEIGHT * strong_hits as f64 + MODERATE_WEIGHT * moderate_hits as f64;
    raw.round().clamp(0.0, MAX_DIMENSION_SCORE as f64) as u8
}

/// Runs the element scorer independently for all five dimensions.
pub fn score_dimensions(statement: &str, taxonomy: &KeywordTaxonomy) -> DimensionScores {
    let mut scores = DimensionScores::default();
    for dimension in Dimension::ALL {
        scores.set(dimension, score_element(statement, taxonomy.patterns(dimension)));
    }
    scores
}
