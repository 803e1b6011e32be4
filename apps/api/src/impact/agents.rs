//! Agent Recommender — ranks catalog agents by trigger hits in the occupation corpus.

use serde::{Deserialize, Serialize};

use crate::impact::catalog::AgentProfile;
use crate::models::occupation::{OccupationElement, Task};

pub const POINTS_PER_TRIGGER: u32 = 15;
pub const MAX_RELEVANCE: u32 = 100;
pub const MAX_AGENTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecommendation {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub business_value: String,
    /// 15 × distinct trigger hits, capped at 100.
    pub relevance_score: u32,
}

/// Task statements plus skill and knowledge names and descriptions, lower-cased.
pub fn occupation_corpus(
    tasks: &[Task],
    skills: &[OccupationElement],
    knowledge: &[OccupationElement],
) -> String {
    let statements = tasks.iter().map(|t| t.statement.clone());
    let elements = skills
        .iter()
        .chain(knowledge)
        .map(|e| format!("{} {}", e.name, e.description));

    statements
        .chain(elements)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Number of distinct triggers that occur as substrings of `corpus`.
pub fn count_trigger_hits(triggers: &[String], corpus: &str) -> usize {
    triggers
        .iter()
        .filter(|t| !t.is_empty() && corpus.contains(t.as_str()))
        .count()
}

/// Scores every catalog agent, drops zero-relevance agents, and keeps the top 8.
/// Ties keep catalog order.
pub fn recommend_agents(corpus: &str, catalog: &[AgentProfile]) -> Vec<AgentRecommendation> {
    let mut scored: Vec<AgentRecommendation> = catalog
        .iter()
        .filter_map(|agent| {
            let hits = count_trigger_hits(&agent.triggers, corpus) as u32;
            let relevance_score = (hits * POINTS_PER_TRIGGER).min(MAX_RELEVANCE);
            (relevance_score > 0).then(|| AgentRecommendation {
                name: agent.name.clone(),
                icon: agent.icon.clone(),
                description: agent.description.clone(),
                business_value: agent.business_value.clone(),
                relevance_score,
            })
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    scored.truncate(MAX_AGENTS);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::catalog::default_agent_catalog;

    fn profile(name: &str, triggers: &[&str]) -> AgentProfile {
        AgentProfile {
            name: name.to_string(),
            icon: "circle".to_string(),
            description: String::new(),
            business_value: String::new(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_scheduling_agent_three_triggers_scores_45() {
        let corpus = "schedule the team, coordinate vendors, and keep the calendar current";
        let agents = recommend_agents(corpus, &default_agent_catalog());
        let scheduling = agents
            .iter()
            .find(|a| a.name == "Scheduling & Workflow Agent")
            .expect("scheduling agent recommended");
        assert_eq!(scheduling.relevance_score, 45);
    }

    #[test]
    fn test_zero_relevance_agents_dropped() {
        let catalog = vec![profile("A", &["alpha"]), profile("B", &["beta"])];
        let agents = recommend_agents("only alpha here", &catalog);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].name, "A");
    }

    #[test]
    fn test_relevance_capped_at_100() {
        let catalog = vec![profile("Many", &["a", "b", "c", "d", "e", "f", "g", "h"])];
        let agents = recommend_agents("a b c d e f g h", &catalog);
        assert_eq!(agents[0].relevance_score, 100);
    }

    #[test]
    fn test_sorted_descending_with_catalog_order_ties() {
        let catalog = vec![
            profile("First", &["x"]),
            profile("Second", &["x", "y"]),
            profile("Third", &["y"]),
        ];
        let agents = recommend_agents("x y", &catalog);
        let names: Vec<_> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First", "Third"]);
        assert_eq!(agents[0].relevance_score, 30);
    }

    #[test]
    fn test_at_most_eight_agents() {
        let catalog: Vec<_> = (0..12).map(|i| profile(&format!("Agent {i}"), &["common"])).collect();
        let agents = recommend_agents("common", &catalog);
        assert_eq!(agents.len(), MAX_AGENTS);
        assert_eq!(agents[0].name, "Agent 0");
        assert_eq!(agents[7].name, "Agent 7");
    }

    #[test]
    fn test_default_catalog_invariants_on_rich_corpus() {
        let corpus = "analyze data statistics report trends forecast metrics dashboard documents \
                      records files forms compile contracts invoices research investigate review \
                      write draft communicate present content code program software develop debug \
                      test systems schedule coordinate calendar meetings customers clients support \
                      budget accounting audit tax cost revenue payroll compliance quality regulations \
                      standards inspect safety train educate teach mentor onboard knowledge";
        let agents = recommend_agents(corpus, &default_agent_catalog());
        assert!(agents.len() <= MAX_AGENTS);
        for pair in agents.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
        for agent in &agents {
            assert!(agent.relevance_score <= MAX_RELEVANCE);
            assert!(
                agent.relevance_score % POINTS_PER_TRIGGER == 0
                    || agent.relevance_score == MAX_RELEVANCE
            );
        }
    }

    #[test]
    fn test_corpus_includes_skills_and_knowledge() {
        let tasks = vec![Task::new("Prepare Reports")];
        let skills = vec![OccupationElement {
            name: "Coordination".to_string(),
            description: "Adjusting actions".to_string(),
            score: 70.0,
        }];
        let knowledge = vec![OccupationElement {
            name: "Customer Service".to_string(),
            description: String::new(),
            score: 80.0,
        }];
        let corpus = occupation_corpus(&tasks, &skills, &knowledge);
        assert_eq!(
            corpus,
            "prepare reports coordination adjusting actions customer service "
        );
    }
}
