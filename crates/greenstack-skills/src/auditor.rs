use std::sync::Arc;

use greenstack_core::{
    MeasurementBaseline, Skill, SkillContext, SkillError, SkillFuture, SkillInput, SkillOutput,
};

use crate::codegen::string_list;

/// Scores a structured plan against the sustainable-coding rulebook and the
/// measured page baseline from the execution context.
pub struct Auditor;

impl Skill for Auditor {
    fn invoke(&self, ctx: Arc<SkillContext>, input: SkillInput) -> SkillFuture {
        Box::pin(async move {
            match input {
                SkillInput::Structured(plan) => {
                    Ok(SkillOutput::Structured(audit(&plan, ctx.baseline)))
                }
                SkillInput::Text(_) => Err(SkillError::Invalid(
                    "auditor_agent requires a structured plan".into(),
                )),
            }
        })
    }
}

const BASE_SCORE: i32 = 70;

struct Heuristic {
    optimization: &'static str,
    award: i32,
    penalty: i32,
    /// Component substrings that make the omission count against the plan.
    /// Empty means the penalty always applies.
    triggers: &'static [&'static str],
    applied_note: &'static str,
    missing_note: &'static str,
    recommendation: &'static str,
}

const HEURISTICS: [Heuristic; 13] = [
    Heuristic {
        optimization: "NextGenFormats",
        award: 10,
        penalty: 5,
        triggers: &[],
        applied_note: "✅ Using next-gen image formats (.webp/.avif) (+10 pts)",
        missing_note: "❌ Not using next-gen image formats (-5 pts)",
        recommendation: "- Use WebP or AVIF image formats instead of PNG/JPEG to reduce file sizes",
    },
    Heuristic {
        optimization: "LazyLoading",
        award: 15,
        penalty: 10,
        triggers: &["Table", "List", "Gallery"],
        applied_note: "✅ Implemented lazy loading for below-the-fold content (+15 pts)",
        missing_note: "❌ Missing lazy loading for large content (-10 pts)",
        recommendation: "- Implement React.lazy() for components that aren't immediately visible",
    },
    Heuristic {
        optimization: "ResponsiveImages",
        award: 10,
        penalty: 5,
        triggers: &["Image", "Photo", "Banner"],
        applied_note: "✅ Using responsive images with srcset attribute (+10 pts)",
        missing_note: "❌ Not using responsive images (-5 pts)",
        recommendation: "- Use the srcset attribute to serve different image sizes based on viewport",
    },
    Heuristic {
        optimization: "CodeSplitting",
        award: 10,
        penalty: 5,
        triggers: &["Chart", "Dashboard", "Modal"],
        applied_note: "✅ Implemented code splitting for large UI sections (+10 pts)",
        missing_note: "❌ Missing code splitting for complex UI elements (-5 pts)",
        recommendation: "- Implement code-splitting for large components to reduce initial load time",
    },
    Heuristic {
        optimization: "PayloadReduction",
        award: 8,
        penalty: 5,
        triggers: &["Table", "List", "Data"],
        applied_note: "✅ Optimized API data fetching to reduce payload size (+8 pts)",
        missing_note: "❌ Not optimizing API data payload size (-5 pts)",
        recommendation: "- Only fetch necessary fields from your API to reduce data transfer",
    },
    Heuristic {
        optimization: "AvoidPolling",
        award: 8,
        penalty: 8,
        triggers: &["Realtime", "Live", "Feed"],
        applied_note: "✅ Using WebSockets/SSE instead of polling (+8 pts)",
        missing_note: "❌ Using polling instead of WebSockets/SSE (-8 pts)",
        recommendation: "- Replace polling with WebSockets or Server-Sent Events for real-time updates",
    },
    Heuristic {
        optimization: "Memoization",
        award: 12,
        penalty: 10,
        triggers: &["List", "Table", "Grid"],
        applied_note: "✅ Using memoization for list/grid items (+12 pts)",
        missing_note: "❌ Missing memoization for list/grid items (-10 pts)",
        recommendation: "- Use React.memo() for list items to prevent unnecessary re-renders",
    },
    Heuristic {
        optimization: "ConditionalRendering",
        award: 8,
        penalty: 5,
        triggers: &["Tab", "Modal", "Accordion"],
        applied_note: "✅ Properly unmounting non-visible components (+8 pts)",
        missing_note: "❌ Using CSS to hide components instead of unmounting (-5 pts)",
        recommendation: "- Unmount non-visible components instead of hiding them with CSS",
    },
    Heuristic {
        optimization: "DebounceStateUpdates",
        award: 8,
        penalty: 5,
        triggers: &["Search", "Filter", "Resize"],
        applied_note: "✅ Debouncing frequent event handlers (+8 pts)",
        missing_note: "❌ Not debouncing frequent events (-5 pts)",
        recommendation: "- Implement debouncing for event handlers that trigger frequent updates",
    },
    Heuristic {
        optimization: "PromoteFlatState",
        award: 8,
        penalty: 5,
        triggers: &["Form", "Filter", "Dashboard"],
        applied_note: "✅ Using flat state structure for better performance (+8 pts)",
        missing_note: "❌ Using deeply nested state structure (-5 pts)",
        recommendation: "- Flatten your state structure to improve performance",
    },
    Heuristic {
        optimization: "PreferCSSTransitions",
        award: 8,
        penalty: 5,
        triggers: &["Animation", "Transition", "Hover"],
        applied_note: "✅ Using CSS for simple animations instead of JS (+8 pts)",
        missing_note: "❌ Using JS for animations that could be CSS (-5 pts)",
        recommendation: "- Use CSS transitions instead of JavaScript for simple animations",
    },
    Heuristic {
        optimization: "HardwareAcceleratedProperties",
        award: 8,
        penalty: 5,
        triggers: &["Animation", "Transition"],
        applied_note: "✅ Using hardware-accelerated properties for animations (+8 pts)",
        missing_note: "❌ Not using hardware-accelerated properties (-5 pts)",
        recommendation: "- Animate transform and opacity properties for better performance",
    },
    Heuristic {
        optimization: "UseCSSVariablesForThemes",
        award: 8,
        penalty: 5,
        triggers: &["Theme", "Dark", "Style"],
        applied_note: "✅ Using CSS variables for theming (+8 pts)",
        missing_note: "❌ Not using CSS variables for theming (-5 pts)",
        recommendation: "- Implement CSS variables for theming to reduce JavaScript overhead",
    },
];

/// Full audit of a plan: best-practices score, baseline-derived page weight
/// and performance scores, the combined eco-grade, notes, recommendations,
/// and the rendered markdown report.
#[must_use]
pub fn audit(plan: &serde_json::Value, baseline: MeasurementBaseline) -> serde_json::Value {
    let components = string_list(plan, "components");
    let optimizations = string_list(plan, "optimizations");

    let (best_practices, notes) = best_practices_score(&components, &optimizations);
    let page_weight = page_weight_score(baseline.page_weight_kb);
    let performance = performance_score(baseline.lcp_seconds, baseline.inp_millis);

    let eco_grade = page_weight * 0.5 + performance * 0.3 + f64::from(best_practices) * 0.2;

    let recommendations: Vec<&str> = HEURISTICS
        .iter()
        .filter(|h| !optimizations.iter().any(|o| o == h.optimization))
        .map(|h| h.recommendation)
        .collect();

    let report = render_report(
        eco_grade,
        page_weight,
        performance,
        best_practices,
        &notes,
        &recommendations,
    );

    serde_json::json!({
        "report_markdown": report,
        "eco_grade": eco_grade,
        "best_practices_score": best_practices,
        "page_weight_score": page_weight,
        "performance_score": performance,
        "notes": notes,
        "recommendations": recommendations,
    })
}

fn best_practices_score(components: &[String], optimizations: &[String]) -> (i32, Vec<String>) {
    let mut score = BASE_SCORE;
    let mut notes = Vec::new();

    for heuristic in &HEURISTICS {
        if optimizations.iter().any(|o| o == heuristic.optimization) {
            score += heuristic.award;
            notes.push(heuristic.applied_note.to_owned());
        } else if heuristic.triggers.is_empty()
            || heuristic
                .triggers
                .iter()
                .any(|t| components.iter().any(|c| c.contains(t)))
        {
            score -= heuristic.penalty;
            notes.push(heuristic.missing_note.to_owned());
        }
    }

    (score.clamp(0, 100), notes)
}

fn page_weight_score(kb: f64) -> f64 {
    if kb < 500.0 {
        100.0
    } else if kb <= 1000.0 {
        85.0
    } else if kb <= 2000.0 {
        60.0
    } else {
        30.0
    }
}

fn performance_score(lcp_seconds: f64, inp_millis: f64) -> f64 {
    let lcp = if lcp_seconds < 2.5 {
        100.0
    } else if lcp_seconds <= 4.0 {
        50.0
    } else {
        0.0
    };
    let inp = if inp_millis < 200.0 {
        100.0
    } else if inp_millis <= 500.0 {
        50.0
    } else {
        0.0
    };
    lcp * 0.6 + inp * 0.4
}

fn render_report(
    eco_grade: f64,
    page_weight: f64,
    performance: f64,
    best_practices: i32,
    notes: &[String],
    recommendations: &[&str],
) -> String {
    let analysis = if notes.is_empty() {
        "No specific notes.".to_owned()
    } else {
        notes.join("\n")
    };
    let advice = if recommendations.is_empty() {
        "No specific recommendations. All sustainable practices are already implemented.".to_owned()
    } else {
        recommendations.join("\n")
    };

    format!(
        "### 🌍 Eco-Grade Report\n\
         \n\
         Your code achieved an Eco-Grade of **{eco_grade:.0}/100**.\n\
         \n\
         ---\n\
         \n\
         #### Score Breakdown:\n\
         * **Page Weight Score:** {page_weight:.0}/100\n\
         * **Performance Score:** {performance:.0}/100\n\
         * **Best Practices Score:** {best_practices}/100\n\
         \n\
         ## Sustainability Analysis:\n\
         {analysis}\n\
         \n\
         ## Recommendations:\n\
         {advice}\n",
    )
}
