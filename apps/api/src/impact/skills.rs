//! Skill Recommender — matches the task corpus against the AI-skill catalog.

use serde::{Deserialize, Serialize};

use crate::impact::agents::count_trigger_hits;
use crate::impact::aggregator::Distribution;
use crate::impact::catalog::{SkillProfile, SkillRelevance};
use crate::models::occupation::Task;

/// Above this share of `automate` tasks, orchestration skills become Essential.
pub const ORCHESTRATION_BOOST_FRACTION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillPriority {
    Essential,
    High,
    Recommended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub name: String,
    pub description: String,
    pub relevance: SkillRelevance,
    pub priority: SkillPriority,
}

/// Task statements only, lower-cased.
pub fn task_corpus(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| t.statement.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn priority_for(skill: &SkillProfile, corpus: &str) -> Option<SkillPriority> {
    if skill.relevance == SkillRelevance::Universal {
        return Some(SkillPriority::Essential);
    }
    match count_trigger_hits(&skill.triggers, corpus) {
        0 => None,
        1 => Some(SkillPriority::Recommended),
        _ => Some(SkillPriority::High),
    }
}

/// Returns qualifying skills in catalog order.
pub fn recommend_skills(
    corpus: &str,
    distribution: &Distribution,
    catalog: &[SkillProfile],
) -> Vec<SkillRecommendation> {
    let boost_orchestration = distribution.automate_fraction() > ORCHESTRATION_BOOST_FRACTION;

    catalog
        .iter()
        .filter_map(|skill| {
            let mut priority = priority_for(skill, corpus)?;
            if boost_orchestration && skill.orchestration {
                priority = SkillPriority::Essential;
            }
            Some(SkillRecommendation {
                name: skill.name.clone(),
                description: skill.description.clone(),
                relevance: skill.relevance,
                priority,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::catalog::default_skill_catalog;

    fn find<'a>(skills: &'a [SkillRecommendation], name: &str) -> Option<&'a SkillRecommendation> {
        skills.iter().find(|s| s.name == name)
    }

    fn distribution(automate: usize, augment: usize, human: usize) -> Distribution {
        Distribution {
            automate,
            augment,
            human,
        }
    }

    #[test]
    fn test_universal_skills_always_essential() {
        let skills = recommend_skills("", &Distribution::default(), &default_skill_catalog());
        assert_eq!(skills.len(), 4);
        assert!(skills
            .iter()
            .all(|s| s.relevance == SkillRelevance::Universal && s.priority == SkillPriority::Essential));
    }

    #[test]
    fn test_trigger_counts_set_priority() {
        // data literacy: "data", "report" → High; ethics: "patient" → Recommended
        let corpus = task_corpus(&[
            Task::new("Enter data and report results"),
            Task::new("Greet each patient"),
        ]);
        let skills = recommend_skills(&corpus, &distribution(0, 0, 2), &default_skill_catalog());
        assert_eq!(
            find(&skills, "Data Literacy for AI").map(|s| s.priority),
            Some(SkillPriority::High)
        );
        assert_eq!(
            find(&skills, "AI Ethics & Responsible Use").map(|s| s.priority),
            Some(SkillPriority::Recommended)
        );
        assert!(find(&skills, "Creative AI Collaboration").is_none());
    }

    #[test]
    fn test_catalog_order_preserved() {
        let corpus = "write content, analyze data, and communicate with each client";
        let catalog = default_skill_catalog();
        let skills = recommend_skills(corpus, &Distribution::default(), &catalog);
        let positions: Vec<usize> = skills
            .iter()
            .map(|s| catalog.iter().position(|c| c.name == s.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_orchestration_boosted_above_threshold() {
        let corpus = "process orders through the workflow";
        let catalog = default_skill_catalog();

        let boosted = recommend_skills(corpus, &distribution(2, 1, 1), &catalog);
        assert_eq!(
            find(&boosted, "Automation & Agent Orchestration").map(|s| s.priority),
            Some(SkillPriority::Essential)
        );

        // exactly 0.3 does not exceed the threshold
        let not_boosted = recommend_skills(corpus, &distribution(3, 7, 0), &catalog);
        assert_eq!(
            find(&not_boosted, "Automation & Agent Orchestration").map(|s| s.priority),
            Some(SkillPriority::High)
        );
    }

    #[test]
    fn test_orchestration_not_added_when_unmatched() {
        let skills = recommend_skills("greet visitors", &distribution(5, 0, 0), &default_skill_catalog());
        assert!(find(&skills, "Automation & Agent Orchestration").is_none());
    }

    #[test]
    fn test_task_corpus_lowercases_statements_only() {
        let corpus = task_corpus(&[Task::new("Review DATA"), Task::new("File Forms")]);
        assert_eq!(corpus, "review data file forms");
    }
}
