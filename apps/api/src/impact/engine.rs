//! Impact engine — wires scorer, classifier, aggregator and recommenders into one
//! stateless pass per occupation.
//!
//! `AppState` holds an `Arc<dyn ImpactAnalyzer>`; `ImpactEngine` is the keyword backend.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::impact::agents::{occupation_corpus, recommend_agents, AgentRecommendation};
use crate::impact::aggregator::{aggregate, Distribution, ElementAverages, ImpactLevel};
use crate::impact::catalog::{
    default_agent_catalog, default_skill_catalog, AgentProfile, SkillProfile,
};
use crate::impact::classifier::{analyze_task, TaskAnalysis};
use crate::impact::narrative;
use crate::impact::skills::{recommend_skills, task_corpus, SkillRecommendation};
use crate::impact::taxonomy::{KeywordTaxonomy, TaxonomyError};
use crate::models::occupation::{OccupationProfile, Task};

/// The aggregate, externally consumed result for one occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub element_scores: ElementAverages,
    pub distribution: Distribution,
    pub overall_score: u8,
    pub impact_level: ImpactLevel,
    pub impact_color: String,
    pub agents: Vec<AgentRecommendation>,
    pub ai_skills: Vec<SkillRecommendation>,
}

/// Assessment plus per-task detail and narrative, as returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    #[serde(flatten)]
    pub assessment: ImpactAssessment,
    pub task_analysis: Vec<TaskAnalysis>,
    pub role_summary: String,
    pub outlook: String,
    pub scorer_backend: String,
}

/// Swappable analysis backend. Implementations must be pure: same input, same report.
pub trait ImpactAnalyzer: Send + Sync {
    fn analyze(&self, profile: &OccupationProfile) -> ImpactReport;

    fn analyze_task(&self, task: &Task) -> TaskAnalysis;

    fn backend(&self) -> &'static str;

    /// Pattern lists behind the scores. `None` for backends without a keyword taxonomy.
    fn taxonomy(&self) -> Option<&KeywordTaxonomy>;

    fn agent_catalog(&self) -> &[AgentProfile];

    fn skill_catalog(&self) -> &[SkillProfile];
}

/// Keyword-driven analyzer. Holds its catalogs explicitly; no globals.
#[derive(Debug, Clone)]
pub struct ImpactEngine {
    taxonomy: KeywordTaxonomy,
    agents: Vec<AgentProfile>,
    skills: Vec<SkillProfile>,
}

impl ImpactEngine {
    pub fn new(
        taxonomy: KeywordTaxonomy,
        agents: Vec<AgentProfile>,
        skills: Vec<SkillProfile>,
    ) -> Self {
        Self {
            taxonomy,
            agents,
            skills,
        }
    }

    pub fn with_defaults() -> Result<Self, TaxonomyError> {
        Ok(Self::new(
            KeywordTaxonomy::with_defaults()?,
            default_agent_catalog(),
            default_skill_catalog(),
        ))
    }
}

impl ImpactAnalyzer for ImpactEngine {
    fn analyze(&self, profile: &OccupationProfile) -> ImpactReport {
        // Per-task scoring is independent; aggregation joins on the full list.
        let task_analysis: Vec<TaskAnalysis> = profile
            .tasks
            .iter()
            .map(|task| analyze_task(task, &self.taxonomy))
            .collect();

        let aggregate = aggregate(&task_analysis);

        let agents = recommend_agents(
            &occupation_corpus(&profile.tasks, &profile.skills, &profile.knowledge),
            &self.agents,
        );
        let ai_skills = recommend_skills(
            &task_corpus(&profile.tasks),
            &aggregate.distribution,
            &self.skills,
        );

        let role_summary = narrative::role_summary(
            &profile.summary.title,
            &aggregate.element_scores,
            aggregate.overall_score,
        );
        let outlook = narrative::outlook(&aggregate.element_scores, aggregate.overall_score);

        debug!(
            tasks = task_analysis.len(),
            overall_score = aggregate.overall_score,
            impact_level = aggregate.impact_level.as_str(),
            agents = agents.len(),
            "Impact analysis complete"
        );

        ImpactReport {
            assessment: ImpactAssessment {
                element_scores: aggregate.element_scores,
                distribution: aggregate.distribution,
                overall_score: aggregate.overall_score,
                impact_level: aggregate.impact_level,
                impact_color: aggregate.impact_level.color().to_string(),
                agents,
                ai_skills,
            },
            task_analysis,
            role_summary,
            outlook,
            scorer_backend: self.backend().to_string(),
        }
    }

    fn analyze_task(&self, task: &Task) -> TaskAnalysis {
        analyze_task(task, &self.taxonomy)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }

    fn taxonomy(&self) -> Option<&KeywordTaxonomy> {
        Some(&self.taxonomy)
    }

    fn agent_catalog(&self) -> &[AgentProfile] {
        &self.agents
    }

    fn skill_catalog(&self) -> &[SkillProfile] {
        &self.skills
    }
}
