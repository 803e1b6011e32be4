//! Task Classifier — combines the five dimension scores into an average and a label.

use serde::{Deserialize, Serialize};

use crate::impact::scorer::{score_dimensions, DimensionScores};
use crate::impact::taxonomy::KeywordTaxonomy;
use crate::models::occupation::{Task, TaskCategory};

pub const AUTOMATE_THRESHOLD: f64 = 5.0;
pub const AUGMENT_THRESHOLD: f64 = 2.5;

/// Categorical AI-impact label for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskClassification {
    Automate,
    Augment,
    Human,
}

impl TaskClassification {
    /// Boundary values belong to the higher-impact bucket.
    pub fn from_average(avg_score: f64) -> Self {
        if avg_score >= AUTOMATE_THRESHOLD {
            TaskClassification::Automate
        } else if avg_score >= AUGMENT_THRESHOLD {
            TaskClassification::Augment
        } else {
            TaskClassification::Human
        }
    }
}

/// Scored view of one task. Built once by [`analyze_task`], never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub statement: String,
    pub category: TaskCategory,
    pub importance: f64,
    #[serde(flatten)]
    pub scores: DimensionScores,
    pub avg_score: f64,
    pub classification: TaskClassification,
}

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the five scores (1 decimal) and the resulting label.
pub fn classify(scores: &DimensionScores) -> (f64, TaskClassification) {
    let avg_score = round1(scores.total() as f64 / 5.0);
    (avg_score, TaskClassification::from_average(avg_score))
}

/// Scores and classifies a single task.
pub fn analyze_task(task: &Task, taxonomy: &KeywordTaxonomy) -> TaskAnalysis {
    let scores = score_dimensions(&task.statement, taxonomy);
    let (avg_score, classification) = classify(&scores);

    TaskAnalysis {
        statement: task.statement.clone(),
        category: task.category,
        importance: task.importance,
        scores,
        avg_score,
        classification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u8; 5]) -> DimensionScores {
        DimensionScores {
            efficiency: values[0],
            quality: values[1],
            cost: values[2],
            revenue: values[3],
            service: values[4],
        }
    }

    #[test]
    fn test_boundary_five_is_automate() {
        let (avg, class) = classify(&scores([5, 5, 5, 5, 5]));
        assert_eq!(avg, 5.0);
        assert_eq!(class, TaskClassification::Automate);
    }

    #[test]
    fn test_boundary_two_point_five_is_augment() {
        // 12.5 cannot come from integers; use the threshold function directly too
        assert_eq!(TaskClassification::from_average(2.5), TaskClassification::Augment);
        let (avg, class) = classify(&scores([3, 3, 3, 2, 2]));
        assert_eq!(avg, 2.6);
        assert_eq!(class, TaskClassification::Augment);
    }

    #[test]
    fn test_two_point_four_is_human() {
        let (avg, class) = classify(&scores([3, 3, 2, 2, 2]));
        assert_eq!(avg, 2.4);
        assert_eq!(class, TaskClassification::Human);
    }

    #[test]
    fn test_just_below_automate_is_augment() {
        assert_eq!(TaskClassification::from_average(4.9), TaskClassification::Augment);
        assert_eq!(TaskClassification::from_average(0.0), TaskClassification::Human);
        assert_eq!(TaskClassification::from_average(9.0), TaskClassification::Automate);
    }

    #[test]
    fn test_analyze_task_automate_example() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        let task = Task::new(
            "Schedule and track purchasing budgets, verify invoice accuracy for audits, \
             forecast sales and pricing, and respond to customer inquiries",
        );
        let analysis = analyze_task(&task, &taxonomy);
        assert_eq!(analysis.scores, scores([4, 6, 7, 6, 5]));
        assert_eq!(analysis.avg_score, 5.6);
        assert_eq!(analysis.classification, TaskClassification::Automate);
    }

    #[test]
    fn test_analyze_task_augment_example() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        let task = Task::new(
            "Track inventory costs, verify invoice accuracy, and forecast sales revenue for customer accounts",
        );
        let analysis = analyze_task(&task, &taxonomy);
        assert_eq!(analysis.scores, scores([2, 4, 8, 6, 2]));
        assert_eq!(analysis.avg_score, 4.4);
        assert_eq!(analysis.classification, TaskClassification::Augment);
    }

    #[test]
    fn test_analyze_task_keeps_input_fields() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        let task = Task {
            statement: "Operate heavy machinery".to_string(),
            category: TaskCategory::Core,
            importance: 73.0,
        };
        let analysis = analyze_task(&task, &taxonomy);
        assert_eq!(analysis.statement, "Operate heavy machinery");
        assert_eq!(analysis.category, TaskCategory::Core);
        assert_eq!(analysis.importance, 73.0);
        assert_eq!(analysis.avg_score, 0.0);
        assert_eq!(analysis.classification, TaskClassification::Human);
    }

    #[test]
    fn test_task_analysis_serializes_flat() {
        let taxonomy = KeywordTaxonomy::with_defaults().unwrap();
        let analysis = analyze_task(&Task::new("Negotiate supplier contracts"), &taxonomy);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["service"], 3);
        assert_eq!(json["cost"], 2);
        assert_eq!(json["classification"], "human");
        assert_eq!(json["category"], "");
    }
}
