use std::sync::Arc;

use greenstack_core::{Skill, SkillContext, SkillError, SkillFuture, SkillInput, SkillOutput};

/// Derives a sustainable coding plan from a plain-text request.
///
/// Output: `{"components": [...], "optimizations": [...]}`.
pub struct Planner;

impl Skill for Planner {
    fn invoke(&self, _ctx: Arc<SkillContext>, input: SkillInput) -> SkillFuture {
        Box::pin(async move {
            match input {
                SkillInput::Text(request) => Ok(SkillOutput::Structured(plan_for(&request))),
                SkillInput::Structured(_) => Err(SkillError::Invalid(
                    "planner_agent expects plain text".into(),
                )),
            }
        })
    }
}

/// Baseline every plan starts from, regardless of the request.
const BASE_COMPONENTS: [&str; 2] = ["React Component", "CSS Styling"];
const BASE_OPTIMIZATIONS: [&str; 3] = ["LazyLoading", "Memoization", "ResponsiveImages"];

struct PlanRule {
    keywords: &'static [&'static str],
    component: &'static str,
    optimizations: &'static [&'static str],
}

const PLAN_RULES: [PlanRule; 7] = [
    PlanRule {
        keywords: &["image", "photo", "banner", "gallery"],
        component: "Image Gallery",
        optimizations: &["NextGenFormats", "ResponsiveImages"],
    },
    PlanRule {
        keywords: &["table", "list", "grid"],
        component: "Data Table",
        optimizations: &["Memoization", "PayloadReduction"],
    },
    PlanRule {
        keywords: &["chart", "dashboard"],
        component: "Dashboard Panel",
        optimizations: &["CodeSplitting", "PromoteFlatState"],
    },
    PlanRule {
        keywords: &["modal", "dialog"],
        component: "Modal Dialog",
        optimizations: &["ConditionalRendering", "CodeSplitting"],
    },
    PlanRule {
        keywords: &["search", "filter"],
        component: "Search Form",
        optimizations: &["DebounceStateUpdates"],
    },
    PlanRule {
        keywords: &["live", "realtime", "real-time", "feed"],
        component: "Live Feed",
        optimizations: &["AvoidPolling"],
    },
    PlanRule {
        keywords: &["animation", "hover", "transition"],
        component: "Animated Section",
        optimizations: &["PreferCSSTransitions", "HardwareAcceleratedProperties"],
    },
];

/// Keyword-driven plan derivation over the lowercased request.
#[must_use]
pub fn plan_for(request: &str) -> serde_json::Value {
    let lowered = request.to_lowercase();

    let mut components: Vec<String> = BASE_COMPONENTS.iter().map(|s| (*s).to_owned()).collect();
    let mut optimizations: Vec<String> =
        BASE_OPTIMIZATIONS.iter().map(|s| (*s).to_owned()).collect();

    for rule in &PLAN_RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            push_unique(&mut components, rule.component);
            for opt in rule.optimizations {
                push_unique(&mut optimizations, opt);
            }
        }
    }

    if lowered.contains("theme") || lowered.contains("dark mode") {
        push_unique(&mut optimizations, "UseCSSVariablesForThemes");
    }

    serde_json::json!({
        "components": components,
        "optimizations": optimizations,
    })
}

fn push_unique(items: &mut Vec<String>, candidate: &str) {
    if !items.iter().any(|i| i == candidate) {
        items.push(candidate.to_owned());
    }
}
