//! Occupation Aggregator — reduces scored tasks into occupation-level averages,
//! a composite score, an impact level, and a classification tally.
//!
//! Never fails: an empty task list yields the neutral result
//! (averages 0, overall 50, Limited, empty distribution).

use serde::{Deserialize, Serialize};

use crate::impact::classifier::{round1, TaskAnalysis, TaskClassification};
use crate::impact::taxonomy::Dimension;

pub const NEUTRAL_OVERALL_SCORE: u8 = 50;
pub const MIN_OVERALL_SCORE: u8 = 5;
pub const MAX_OVERALL_SCORE: u8 = 95;

/// Occupation-level per-dimension averages, each in [0, 9] at 1 decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementAverages {
    pub efficiency: f64,
    pub quality: f64,
    pub cost: f64,
    pub revenue: f64,
    pub service: f64,
}

impl ElementAverages {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Efficiency => self.efficiency,
            Dimension::Quality => self.quality,
            Dimension::Cost => self.cost,
            Dimension::Revenue => self.revenue,
            Dimension::Service => self.service,
        }
    }

    pub fn mean(&self) -> f64 {
        Dimension::ALL.iter().map(|&d| self.get(d)).sum::<f64>() / Dimension::ALL.len() as f64
    }

    /// True when no dimension carries any evidence.
    pub fn is_zero(&self) -> bool {
        Dimension::ALL.iter().all(|&d| self.get(d) == 0.0)
    }

    /// Highest average; ties resolve to the earlier dimension.
    pub fn dominant(&self) -> Dimension {
        Dimension::ALL
            .into_iter()
            .fold(Dimension::Efficiency, |best, d| {
                if self.get(d) > self.get(best) {
                    d
                } else {
                    best
                }
            })
    }

    /// Lowest average; ties resolve to the earlier dimension.
    pub fn weakest(&self) -> Dimension {
        Dimension::ALL
            .into_iter()
            .fold(Dimension::Efficiency, |worst, d| {
                if self.get(d) < self.get(worst) {
                    d
                } else {
                    worst
                }
            })
    }
}

/// Count of each classification across an occupation's tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub automate: usize,
    pub augment: usize,
    pub human: usize,
}

impl Distribution {
    pub fn total(&self) -> usize {
        self.automate + self.augment + self.human
    }

    /// Share of tasks labelled `automate`; 0 for an empty tally.
    pub fn automate_fraction(&self) -> f64 {
        self.automate as f64 / self.total().max(1) as f64
    }

    fn record(&mut self, classification: TaskClassification) {
        match classification {
            TaskClassification::Automate => self.automate += 1,
            TaskClassification::Augment => self.augment += 1,
            TaskClassification::Human => self.human += 1,
        }
    }
}

/// Occupation-wide qualitative label derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Limited,
    Moderate,
    Significant,
    Transformative,
}

impl ImpactLevel {
    /// Thresholds are inclusive lower bounds, checked from the top down.
    pub fn from_score(overall_score: u8) -> Self {
        if overall_score >= 75 {
            ImpactLevel::Transformative
        } else if overall_score >= 55 {
            ImpactLevel::Significant
        } else if overall_score >= 35 {
            ImpactLevel::Moderate
        } else {
            ImpactLevel::Limited
        }
    }

    /// Level for a finished aggregate. Without any dimension evidence the
    /// neutral score is a placeholder, so the level stays `Limited`.
    pub fn resolve(averages: &ElementAverages, overall_score: u8) -> Self {
        if averages.is_zero() {
            ImpactLevel::Limited
        } else {
            Self::from_score(overall_score)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::Limited => "Limited",
            ImpactLevel::Moderate => "Moderate",
            ImpactLevel::Significant => "Significant",
            ImpactLevel::Transformative => "Transformative",
        }
    }

    /// Dashboard colour for the level badge.
    pub fn color(self) -> &'static str {
        match self {
            ImpactLevel::Limited => "#10B981",
            ImpactLevel::Moderate => "#3B82F6",
            ImpactLevel::Significant => "#F59E0B",
            ImpactLevel::Transformative => "#EF4444",
        }
    }
}

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationAggregate {
    pub element_scores: ElementAverages,
    pub distribution: Distribution,
    pub overall_score: u8,
    pub impact_level: ImpactLevel,
}

/// clamp(round(mean / 9 × 100), 5, 95).
pub fn overall_score(averages: &ElementAverages) -> u8 {
    let pct = (averages.mean() / 9.0 * 100.0).round();
    pct.clamp(MIN_OVERALL_SCORE as f64, MAX_OVERALL_SCORE as f64) as u8
}

pub fn aggregate(tasks: &[TaskAnalysis]) -> OccupationAggregate {
    let mut distribution = Distribution::default();
    for task in tasks {
        distribution.record(task.classification);
    }

    if tasks.is_empty() {
        return OccupationAggregate {
            element_scores: ElementAverages::default(),
            distribution,
            overall_score: NEUTRAL_OVERALL_SCORE,
            impact_level: ImpactLevel::Limited,
        };
    }

    let n = tasks.len() as f64;
    let average = |dimension: Dimension| {
        let sum: u32 = tasks.iter().map(|t| t.scores.get(dimension) as u32).sum();
        round1(sum as f64 / n)
    };

    let element_scores = ElementAverages {
        efficiency: average(Dimension::Efficiency),
        quality: average(Dimension::Quality),
        cost: average(Dimension::Cost),
        revenue: average(Dimension::Revenue),
        service: average(Dimension::Service),
    };
    let overall_score = overall_score(&element_scores);

    OccupationAggregate {
        element_scores,
        distribution,
        overall_score,
        impact_level: ImpactLevel::resolve(&element_scores, overall_score),
    }
}
