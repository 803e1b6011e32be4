//! Keyword Taxonomy — the five business-impact dimensions and their pattern sets.
//!
//! Each dimension carries two tiers of case-insensitive, stem-based regex patterns:
//! strong (weight 2.0) and moderate (weight 1.0). The taxonomy is an explicit value
//! handed to the scorer, so alternate catalogs can be swapped in for tests.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weight of one distinct strong-pattern hit.
pub const STRONG_WEIGHT: f64 = 2.0;
/// Weight of one distinct moderate-pattern hit.
pub const MODERATE_WEIGHT: f64 = 1.0;

/// One of the five business-impact axes scored per task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Efficiency,
    Quality,
    Cost,
    Revenue,
    Service,
}

impl Dimension {
    /// Fixed dimension order. Used for tie-breaks and iteration everywhere.
    pub const ALL: [Dimension; 5] = [
        Dimension::Efficiency,
        Dimension::Quality,
        Dimension::Cost,
        Dimension::Revenue,
        Dimension::Service,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Efficiency => "efficiency",
            Dimension::Quality => "quality",
            Dimension::Cost => "cost",
            Dimension::Revenue => "revenue",
            Dimension::Service => "service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Efficiency => "Efficiency & Time Savings",
            Dimension::Quality => "Quality & Accuracy",
            Dimension::Cost => "Cost Impact",
            Dimension::Revenue => "Revenue & Innovation Potential",
            Dimension::Service => "Service & Stakeholder Satisfaction",
        }
    }

    /// Parses a path segment such as `"cost"`. Case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("invalid {dimension:?} pattern '{pattern}': {source}")]
    InvalidPattern {
        dimension: Dimension,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled pattern that remembers its source text for display.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    source: String,
    regex: Regex,
}

impl KeywordPattern {
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Strong and moderate pattern sets for one dimension.
#[derive(Debug, Clone)]
pub struct DimensionPatterns {
    pub dimension: Dimension,
    pub strong: Vec<KeywordPattern>,
    pub moderate: Vec<KeywordPattern>,
}

impl DimensionPatterns {
    pub fn compile(
        dimension: Dimension,
        strong: &[&str],
        moderate: &[&str],
    ) -> Result<Self, TaxonomyError> {
        Ok(Self {
            dimension,
            strong: compile_all(dimension, strong)?,
            moderate: compile_all(dimension, moderate)?,
        })
    }
}

fn compile_all(
    dimension: Dimension,
    patterns: &[&str],
) -> Result<Vec<KeywordPattern>, TaxonomyError> {
    patterns
        .iter()
        .map(|&p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map(|regex| KeywordPattern {
                    source: p.to_string(),
                    regex,
                })
                .map_err(|source| TaxonomyError::InvalidPattern {
                    dimension,
                    pattern: p.to_string(),
                    source,
                })
        })
        .collect()
}

/// Mapping dimension → {strong, moderate}. Always holds all five dimensions.
#[derive(Debug, Clone)]
pub struct KeywordTaxonomy {
    efficiency: DimensionPatterns,
    quality: DimensionPatterns,
    cost: DimensionPatterns,
    revenue: DimensionPatterns,
    service: DimensionPatterns,
}

impl KeywordTaxonomy {
    pub fn new(
        efficiency: DimensionPatterns,
        quality: DimensionPatterns,
        cost: DimensionPatterns,
        revenue: DimensionPatterns,
        service: DimensionPatterns,
    ) -> Self {
        Self {
            efficiency,
            quality,
            cost,
            revenue,
            service,
        }
    }

    /// Compiles the built-in pattern catalog.
    pub fn with_defaults() -> Result<Self, TaxonomyError> {
        Ok(Self::new(
            DimensionPatterns::compile(Dimension::Efficiency, EFFICIENCY_STRONG, EFFICIENCY_MODERATE)?,
            DimensionPatterns::compile(Dimension::Quality, QUALITY_STRONG, QUALITY_MODERATE)?,
            DimensionPatterns::compile(Dimension::Cost, COST_STRONG, COST_MODERATE)?,
            DimensionPatterns::compile(Dimension::Revenue, REVENUE_STRONG, REVENUE_MODERATE)?,
            DimensionPatterns::compile(Dimension::Service, SERVICE_STRONG, SERVICE_MODERATE)?,
        ))
    }

    pub fn patterns(&self, dimension: Dimension) -> &DimensionPatterns {
        match dimension {
            Dimension::Efficiency => &self.efficiency,
            Dimension::Quality => &self.quality,
            Dimension::Cost => &self.cost,
            Dimension::Revenue => &self.revenue,
            Dimension::Service => &self.service,
        }
    }

    pub fn pattern_count(&self) -> usize {
        Dimension::ALL
            .iter()
            .map(|&d| {
                let p = self.patterns(d);
                p.strong.len() + p.moderate.len()
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in pattern catalog
// ────────────────────────────────────────────────────────────────────────────

const EFFICIENCY_STRONG: &[&str] = &[
    r"\bschedul\w*",
    r"\btrack\w*",
    r"\bautomat\w*",
    r"\bdata.?entry",
    r"\btranscri\w*",
    r"\btabulat\w*",
    r"\bsort\w*",
    r"\brout(e|es|ed|ing)\b",
    r"\bcompil\w*",
    r"\bprocess\w* (claims?|orders?|forms?|requests?|applications?)",
    r"\bgenerat\w* reports?",
];

const EFFICIENCY_MODERATE: &[&str] = &[
    r"\bmonitor\w*",
    r"\brecord\w*",
    r"\bfil(e|es|ed|ing)\b",
    r"\bformat\w*",
    r"\bcoordinat\w*",
    r"\bworkflows?\b",
    r"\bprioriti\w*",
    r"\bupdat\w*",
    r"\borganiz\w*",
    r"\barchiv\w*",
    r"\bcatalog\w*",
    r"\bindex\w*",
    r"\bdeadlines?\b",
];

const QUALITY_STRONG: &[&str] = &[
    r"\bverif\w*",
    r"\binspect\w*",
    r"\baudit\w*",
    r"\baccura\w*",
    r"\bcomplian\w*",
    r"\bdiagnos\w*",
    r"\berrors?\b",
    r"\bquality\b",
    r"\bvalidat\w*",
];

const QUALITY_MODERATE: &[&str] = &[
    r"\breview\w*",
    r"\bevaluat\w*",
    r"\bassess\w*",
    r"\bexamin\w*",
    r"\btest\w*",
    r"\bstandards?\b",
    r"\bcheck\w*",
    r"\breconcil\w*",
    r"\banalyz\w*",
    r"\bsafety\b",
    r"\bregulat\w*",
];

const COST_STRONG: &[&str] = &[
    r"\binventor(y|ies)\b",
    r"\binvoic\w*",
    r"\bbudget\w*",
    r"\bpayroll\b",
    r"\bbookkeep\w*",
    r"\bcosts?\b",
    r"\bprocur\w*",
    r"\bpurchas\w*",
    r"\bexpens\w*",
];

const COST_MODERATE: &[&str] = &[
    r"\brecord\w*",
    r"\btrack\w*",
    r"\bcalculat\w*",
    r"\baccount\w*",
    r"\ballocat\w*",
    r"\bsuppl(y|ies|ier|iers)\b",
    r"\bvendors?\b",
    r"\bcontract\w*",
    r"\bresources?\b",
    r"\bestimat\w*",
    r"\bwaste\b",
];

const REVENUE_STRONG: &[&str] = &[
    r"\bsell\w*",
    r"\bsales\b",
    r"\bmarket\w*",
    r"\brevenue\w*",
    r"\binnovat\w*",
    r"\bdesign\w*",
    r"\bpric(e|es|ed|ing)\b",
    r"\bforecast\w*",
];

const REVENUE_MODERATE: &[&str] = &[
    r"\bresearch\w*",
    r"\bstrateg\w*",
    r"\bplan\w*",
    r"\bopportunit\w*",
    r"\bgrowth\b",
    r"\bcreat\w*",
    r"\bpromot\w*",
    r"\blaunch\w*",
    r"\bnew (products?|services?|markets?|customers?|offerings?)\b",
    r"\boptimiz\w*",
    r"\bprototyp\w*",
];

const SERVICE_STRONG: &[&str] = &[
    r"\bcustomers?\b",
    r"\bclients?\b",
    r"\bpatients?\b",
    r"\bnegotiat\w*",
    r"\bstakeholders?\b",
    r"\bcounsel\w*",
    r"\bresolv\w* (complaints?|conflicts?|disputes?|issues?)",
    r"\brespond\w*",
];

const SERVICE_MODERATE: &[&str] = &[
    r"\bcommunicat\w*",
    r"\bconsult\w*",
    r"\binquir\w*",
    r"\bsupport\w*",
    r"\bassist\w*",
    r"\bonboard\w*",
    r"\bsatisf\w*",
    r"\brelationships?\b",
    r"\bpresent\w*",
    r"\bsuppliers?\b",
    r"\bmediat\w*",
    r"\badvis\w*",
    r"\bmentor\w*",
    r"\bmeetings?\b",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_compiles() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        for dimension in Dimension::ALL {
            let p = taxonomy.patterns(dimension);
            assert_eq!(p.dimension, dimension);
            assert!(!p.strong.is_empty(), "{dimension:?} has no strong patterns");
            assert!(!p.moderate.is_empty(), "{dimension:?} has no moderate patterns");
        }
        assert!(taxonomy.pattern_count() > 50);
    }

    #[test]
    fn test_patterns_are_case_insensitive_stems() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        let efficiency = taxonomy.patterns(Dimension::Efficiency);
        let schedule = &efficiency.strong[0];
        assert_eq!(schedule.as_str(), r"\bschedul\w*");
        assert!(schedule.is_match("SCHEDULING staff shifts"));
        assert!(schedule.is_match("Reschedule? no: schedule"));
        assert!(!schedule.is_match("reschedule appointments"));
    }

    #[test]
    fn test_invalid_pattern_reports_dimension() {
        let err = DimensionPatterns::compile(Dimension::Cost, &[r"\bbudget(", r"\bcost"], &[])
            .unwrap_err();
        let TaxonomyError::InvalidPattern {
            dimension, pattern, ..
        } = &err;
        assert_eq!(*dimension, Dimension::Cost);
        assert_eq!(pattern, r"\bbudget(");
        assert!(err.to_string().contains("Cost"));
    }

    #[test]
    fn test_dimension_from_key() {
        assert_eq!(Dimension::from_key("cost"), Some(Dimension::Cost));
        assert_eq!(Dimension::from_key("Service"), Some(Dimension::Service));
        assert_eq!(Dimension::from_key("speed"), None);
    }

    #[test]
    fn test_dimension_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Dimension::Revenue).unwrap(),
            r#""revenue""#
        );
    }
}
