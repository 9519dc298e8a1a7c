use std::sync::Arc;

use greenstack_core::{Skill, SkillContext, SkillError, SkillFuture, SkillInput, SkillOutput};

/// Renders a self-contained React component from a structured plan.
pub struct CodeGenerator;

impl Skill for CodeGenerator {
    fn invoke(&self, _ctx: Arc<SkillContext>, input: SkillInput) -> SkillFuture {
        Box::pin(async move {
            match input {
                SkillInput::Structured(plan) => Ok(SkillOutput::Text(render_component(&plan))),
                SkillInput::Text(_) => Err(SkillError::Invalid(
                    "executor_agent requires a structured plan".into(),
                )),
            }
        })
    }
}

/// Render the component source. Missing plan keys degrade to empty lists.
#[must_use]
pub fn render_component(plan: &serde_json::Value) -> String {
    let components = string_list(plan, "components");
    let optimizations = string_list(plan, "optimizations");

    format!(
        "import React from 'react';\n\
         \n\
         const GeneratedComponent = () => {{\n\
         \x20 // Components: {}\n\
         \x20 // Optimizations: {}\n\
         \n\
         \x20 return (\n\
         \x20   <div style={{{{padding: '20px'}}}}>\n\
         \x20     <h1>Generated React Component</h1>\n\
         \x20     <p>This component was generated based on the plan.</p>\n\
         \x20   </div>\n\
         \x20 );\n\
         }};\n\
         \n\
         export default GeneratedComponent;\n",
        components.join(", "),
        optimizations.join(", "),
    )
}

pub(crate) fn string_list(plan: &serde_json::Value, key: &str) -> Vec<String> {
    plan.get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
