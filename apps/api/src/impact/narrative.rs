//! Narrative text for the dashboard: role summary and strategic outlook.
//!
//! Both strings depend only on the occupation title, the element averages and the
//! overall score, so they can be rebuilt from a stored assessment.

use crate::impact::aggregator::{ElementAverages, ImpactLevel};

const HIGH_TIER: u8 = 65;
const MID_TIER: u8 = 40;

fn display_title(title: &str) -> &str {
    let title = title.trim();
    if title.is_empty() {
        "this occupation"
    } else {
        title
    }
}

pub fn role_summary(title: &str, averages: &ElementAverages, overall_score: u8) -> String {
    let title = display_title(title);

    if averages.is_zero() {
        return format!(
            "No task evidence was available to assess AI impact on {title}. \
             Add task statements to produce a dimension-level assessment."
        );
    }

    let level = ImpactLevel::resolve(averages, overall_score);
    let dominant = averages.dominant();
    let weakest = averages.weakest();

    let mut summary = format!(
        "AI is projected to have a {} impact on {title} (composite score {overall_score}/100). \
         The strongest business case is in {} (average {:.1}/9), while {} (average {:.1}/9) \
         shows the least exposure. ",
        level.as_str().to_lowercase(),
        dominant.label(),
        averages.get(dominant),
        weakest.label(),
        averages.get(weakest),
    );

    summary.push_str(if overall_score >= HIGH_TIER {
        "Professionals in this role should proactively develop AI collaboration skills and \
         prepare for substantial workflow transformation, while organizations pilot AI agents \
         for the highest-scoring tasks."
    } else if overall_score >= MID_TIER {
        "This role will evolve significantly as AI tools mature. The focus should be on adopting \
         AI co-pilots for analytical work while preserving the human expertise that defines \
         professional value in this occupation."
    } else {
        "While AI will provide useful support tools, the core human skills of this role keep it \
         highly resistant to displacement. The emphasis should be on AI as an efficiency multiplier."
    });

    summary
}

pub fn outlook(averages: &ElementAverages, overall_score: u8) -> String {
    if averages.is_zero() {
        return "Outlook unavailable until task data is provided.".to_string();
    }

    let focus = averages.dominant().label();

    let horizon = if overall_score >= HIGH_TIER {
        "High-impact role transformation expected within 2-4 years. Organizations should begin \
         phased automation of routine tasks, and professionals should invest in AI orchestration \
         and validation skills as the role shifts toward supervising AI-augmented workflows."
    } else if overall_score >= MID_TIER {
        "Steady evolution over 3-5 years as AI augmentation tools become mainstream. Early adopters \
         will gain significant productivity advantages, and AI literacy will increasingly \
         differentiate top performers."
    } else {
        "Gradual adoption of AI support tools over 3-7 years. AI will primarily serve as an \
         efficiency aid for administrative and analytical sub-tasks, leaving more time for the \
         highest-value human activities."
    };

    format!("{horizon} Prioritize AI investment around {focus}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages() -> ElementAverages {
        ElementAverages {
            efficiency: 6.2,
            quality: 3.0,
            cost: 4.4,
            revenue: 1.5,
            service: 2.0,
        }
    }

    #[test]
    fn test_role_summary_names_title_and_dimensions() {
        let text = role_summary("Logisticians", &averages(), 38);
        assert!(text.contains("Logisticians"));
        assert!(text.contains("moderate impact"));
        assert!(text.contains("Efficiency & Time Savings (average 6.2/9)"));
        assert!(text.contains("Revenue & Innovation Potential (average 1.5/9)"));
        assert!(text.contains("efficiency multiplier"));
    }

    #[test]
    fn test_role_summary_tiers() {
        assert!(role_summary("X", &averages(), 70).contains("workflow transformation"));
        assert!(role_summary("X", &averages(), 45).contains("AI co-pilots"));
    }

    #[test]
    fn test_empty_title_falls_back() {
        let text = role_summary("  ", &averages(), 38);
        assert!(text.contains("this occupation"));
    }

    #[test]
    fn test_outlook_tiers_and_focus() {
        assert!(outlook(&averages(), 80).contains("2-4 years"));
        assert!(outlook(&averages(), 50).contains("3-5 years"));
        let low = outlook(&averages(), 20);
        assert!(low.contains("3-7 years"));
        assert!(low.ends_with("Prioritize AI investment around Efficiency & Time Savings."));
    }

    #[test]
    fn test_no_evidence_narrative() {
        let zero = ElementAverages::default();
        assert!(role_summary("Dancers", &zero, 50).contains("No task evidence"));
        assert!(outlook(&zero, 50).contains("unavailable"));
    }

    #[test]
    fn test_narrative_is_reproducible() {
        assert_eq!(
            role_summary("Actuaries", &averages(), 61),
            role_summary("Actuaries", &averages(), 61)
        );
        assert_eq!(outlook(&averages(), 61), outlook(&averages(), 61));
    }
}
