use std::sync::Arc;

use greenstack_core::{Skill, SkillContext, SkillError, SkillFuture, SkillInput, SkillOutput};

use crate::auditor::audit;
use crate::codegen::render_component;
use crate::planner::plan_for;

/// Runs the whole pipeline for one prompt: plan, generate, audit.
///
/// Output: `{"generatedCode", "reportMarkdown", "ecoGrade"}`.
pub struct FullStack;

impl Skill for FullStack {
    fn invoke(&self, ctx: Arc<SkillContext>, input: SkillInput) -> SkillFuture {
        Box::pin(async move {
            match input {
                SkillInput::Text(prompt) => {
                    let plan = plan_for(&prompt);
                    let code = render_component(&plan);
                    let report = audit(&plan, ctx.baseline);

                    tracing::debug!(
                        agent = %ctx.agent_name,
                        eco_grade = report["eco_grade"].as_f64(),
                        "pipeline complete"
                    );

                    Ok(SkillOutput::Structured(serde_json::json!({
                        "generatedCode": code,
                        "reportMarkdown": report["report_markdown"],
                        "ecoGrade": report["eco_grade"],
                    })))
                }
                SkillInput::Structured(_) => Err(SkillError::Invalid(
                    "full_stack_agent expects plain text".into(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pipeline_produces_all_three_fields() {
        let ctx = Arc::new(SkillContext::new("t", "0"));
        let out = FullStack
            .invoke(ctx, SkillInput::Text("a photo gallery".into()))
            .await
            .unwrap();

        let SkillOutput::Structured(result) = out else {
            panic!("expected structured output");
        };
        assert!(result["generatedCode"].as_str().unwrap().contains("GeneratedComponent"));
        assert!(result["reportMarkdown"].as_str().unwrap().contains("Eco-Grade Report"));
        assert!(result["ecoGrade"].is_number());
    }

    #[tokio::test]
    async fn grade_matches_direct_audit_of_the_plan() {
        let ctx = Arc::new(SkillContext::new("t", "0"));
        let prompt = "dashboard with live charts";

        let out = FullStack
            .invoke(Arc::clone(&ctx), SkillInput::Text(prompt.into()))
            .await
            .unwrap();
        let SkillOutput::Structured(result) = out else {
            panic!("expected structured output");
        };

        let expected = audit(&plan_for(prompt), ctx.baseline);
        assert_eq!(result["ecoGrade"], expected["eco_grade"]);
    }

    #[tokio::test]
    async fn rejects_structured_input() {
        let ctx = Arc::new(SkillContext::new("t", "0"));
        let err = FullStack
            .invoke(ctx, SkillInput::Structured(serde_json::json!({"prompt": "x"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "full_stack_agent expects plain text");
    }
}
