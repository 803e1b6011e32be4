//! Recommendable AI agents and AI-era skills, each with plain-substring trigger keywords.
//!
//! Triggers are matched against a lower-cased corpus, so they are stored lower-case.

use serde::{Deserialize, Serialize};

/// One recommendable AI agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub business_value: String,
    pub triggers: Vec<String>,
}

/// Which kind of role a skill is aimed at. `Universal` skills apply to every occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillRelevance {
    Universal,
    Data,
    Analysis,
    Process,
    Ethics,
    Creative,
    Communication,
}

/// One AI-era skill. Universal skills carry no triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    pub name: String,
    pub description: String,
    pub relevance: SkillRelevance,
    pub triggers: Vec<String>,
    /// Agent-orchestration capability; promoted when a role is heavily automatable.
    #[serde(default)]
    pub orchestration: bool,
}

fn agent(
    name: &str,
    icon: &str,
    description: &str,
    business_value: &str,
    triggers: &[&str],
) -> AgentProfile {
    AgentProfile {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        business_value: business_value.to_string(),
        triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
    }
}

fn skill(
    name: &str,
    description: &str,
    relevance: SkillRelevance,
    triggers: &[&str],
) -> SkillProfile {
    SkillProfile {
        name: name.to_string(),
        description: description.to_string(),
        relevance,
        triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
        orchestration: false,
    }
}

pub fn default_agent_catalog() -> Vec<AgentProfile> {
    vec![
        agent(
            "Data Analytics Agent",
            "chart-bar",
            "Automates data collection, statistical analysis, trend identification, and dashboard generation from structured and unstructured data sources.",
            "Reduces analysis cycle time by 60-80%, enabling faster decision-making and freeing analysts for strategic interpretation.",
            &["analyz", "data", "statistic", "report", "trend", "forecast", "metric", "dashboard"],
        ),
        agent(
            "Document Processing Agent",
            "file-text",
            "Extracts, classifies, summarizes, and routes documents. Handles forms, contracts, invoices, and compliance paperwork with high accuracy.",
            "Eliminates 70-90% of manual document handling, cutting processing costs and reducing error rates below 2%.",
            &["document", "record", "file", "form", "report", "compil", "review document", "paperwork", "contract", "invoice"],
        ),
        agent(
            "Research & Intelligence Agent",
            "search",
            "Conducts multi-source research, synthesizes findings, monitors competitive landscapes, and generates briefing documents with citations.",
            "Compresses weeks of research into hours, surfacing relevant insights from thousands of sources simultaneously.",
            &["research", "investigat", "literature", "review", "survey", "study", "evaluat", "assess", "information gathering"],
        ),
        agent(
            "Content Generation Agent",
            "pen-tool",
            "Drafts communications, technical writing, marketing copy, reports, and presentations aligned to brand voice and audience requirements.",
            "Produces first drafts 10x faster, allowing professionals to focus on refinement, strategy, and stakeholder alignment.",
            &["writ", "draft", "communicat", "corresponden", "present", "content", "report", "memo", "proposal"],
        ),
        agent(
            "Code & Technical Assistant Agent",
            "terminal",
            "Generates, reviews, debugs, and documents code. Assists with architecture decisions, testing strategies, and technical documentation.",
            "Accelerates development velocity by 30-50%, reduces bug density, and automates routine code maintenance tasks.",
            &["code", "program", "software", "develop", "debug", "test", "system", "technical", "engineer", "algorithm"],
        ),
        agent(
            "Scheduling & Workflow Agent",
            "calendar",
            "Manages calendars, coordinates meetings, automates approval workflows, tracks deadlines, and optimizes resource allocation across teams.",
            "Recovers 5-10 hours per week per professional in coordination overhead, eliminating scheduling conflicts.",
            &["schedul", "coordinat", "calendar", "meeting", "workflow", "deadline", "assign", "prioritiz", "allocat"],
        ),
        agent(
            "Customer Interaction Agent",
            "message-circle",
            "Handles customer inquiries, triages support requests, provides personalized responses, and escalates complex issues to human specialists.",
            "Resolves 40-60% of routine inquiries autonomously, improving response times from hours to seconds.",
            &["customer", "client", "patient", "consult", "service", "support", "inquir", "respond", "assist"],
        ),
        agent(
            "Financial Analysis Agent",
            "dollar-sign",
            "Performs budget analysis, financial modeling, variance reporting, invoice processing, and regulatory compliance checking for financial operations.",
            "Automates 50-70% of routine financial tasks while improving accuracy and enabling real-time financial visibility.",
            &["financ", "budget", "account", "audit", "tax", "cost", "revenue", "invoic", "payroll", "compliance"],
        ),
        agent(
            "Quality & Compliance Agent",
            "shield",
            "Monitors standards adherence, performs automated inspections, tracks regulatory changes, and generates compliance documentation.",
            "Reduces compliance gaps by continuous monitoring, cutting audit preparation time by 60% and violation risk by 40%.",
            &["quality", "compliance", "regulat", "standard", "inspect", "audit", "safety", "certif", "policy"],
        ),
        agent(
            "Training & Knowledge Agent",
            "book-open",
            "Creates personalized learning paths, generates training materials, answers knowledge-base queries, and tracks skill development progress.",
            "Reduces onboarding time by 40%, provides 24/7 knowledge access, and adapts training to individual learning pace.",
            &["train", "educat", "instruct", "teach", "learn", "develop skill", "mentor", "onboard", "knowledge"],
        ),
    ]
}

pub fn default_skill_catalog() -> Vec<SkillProfile> {
    vec![
        skill(
            "Prompt Engineering & AI Direction",
            "Crafting effective instructions for AI systems to produce accurate, relevant outputs. Includes iterative refinement, context-setting, and output validation techniques.",
            SkillRelevance::Universal,
            &[],
        ),
        skill(
            "AI Output Validation & Critical Review",
            "Evaluating AI-generated content for accuracy, bias, hallucination, and alignment with professional standards before use in decision-making.",
            SkillRelevance::Universal,
            &[],
        ),
        skill(
            "Human-AI Workflow Design",
            "Designing processes that optimally distribute tasks between human professionals and AI agents, maximizing both efficiency and quality.",
            SkillRelevance::Universal,
            &[],
        ),
        skill(
            "Data Literacy for AI",
            "Understanding data quality, statistical concepts, and dataset characteristics to effectively leverage AI analytics and interpret machine-generated insights.",
            SkillRelevance::Data,
            &["analyz", "data", "statistic", "research", "evaluat", "assess", "report", "metric"],
        ),
        skill(
            "AI-Augmented Decision Making",
            "Integrating AI-generated analysis and recommendations into professional judgment frameworks while maintaining accountability and ethical standards.",
            SkillRelevance::Analysis,
            &["evaluat", "assess", "diagnos", "plan", "strateg", "decision", "recommend", "priorit"],
        ),
        SkillProfile {
            orchestration: true,
            ..skill(
                "Automation & Agent Orchestration",
                "Selecting, configuring, and chaining AI agents to automate multi-step business processes. Includes monitoring agent performance and handling exceptions.",
                SkillRelevance::Process,
                &["process", "coordinat", "manag", "workflow", "schedul", "system", "implement"],
            )
        },
        skill(
            "AI Ethics & Responsible Use",
            "Recognizing bias risks, privacy implications, and ethical boundaries when deploying AI in professional contexts. Ensuring equitable and transparent AI use.",
            SkillRelevance::Ethics,
            &["ethic", "regulat", "compliance", "policy", "patient", "client", "counsel", "legal"],
        ),
        skill(
            "Creative AI Collaboration",
            "Using generative AI as a creative partner for ideation, prototyping, and content development while preserving originality and professional voice.",
            SkillRelevance::Creative,
            &["design", "creat", "develop", "writ", "innovat", "concept", "prototype", "content"],
        ),
        skill(
            "AI-Powered Communication",
            "Leveraging AI tools for drafting, translating, summarizing, and personalizing communications across channels and audiences at scale.",
            SkillRelevance::Communication,
            &["communicat", "present", "writ", "correspond", "report", "client", "stakeholder"],
        ),
        skill(
            "Continuous Learning & AI Adaptation",
            "Staying current with rapidly evolving AI capabilities, evaluating new tools, and continuously updating professional workflows to leverage emerging technology.",
            SkillRelevance::Universal,
            &[],
        ),
    ]
}
