#![forbid(unsafe_code)]

//! Built-in skills and the default registry wiring.

pub mod auditor;
pub mod codegen;
pub mod orchestrator;
pub mod planner;

use std::sync::Arc;

use greenstack_core::{DEFAULT_SKILL_ID, Projection, SkillDescriptor, SkillRegistry};

pub use auditor::Auditor;
pub use codegen::CodeGenerator;
pub use orchestrator::FullStack;
pub use planner::Planner;

pub const PLANNER_ID: &str = "planner_agent";
pub const EXECUTOR_ID: &str = "executor_agent";
pub const AUDITOR_ID: &str = "auditor_agent";
pub const FULL_STACK_ID: &str = "full_stack_agent";

/// The four built-in skills under their well-known ids, plus the
/// `default_skill` alias for the orchestrator.
#[must_use]
pub fn default_registry() -> SkillRegistry {
    SkillRegistry::builder()
        .register(
            SkillDescriptor {
                id: PLANNER_ID.into(),
                name: "Sustainable Planning Agent".into(),
                description: "Analyzes a user's request and creates a sustainable coding plan"
                    .into(),
                tags: vec!["planning".into(), "sustainability".into()],
                expects_structured_input: false,
            },
            Projection::Field("user_request"),
            Arc::new(Planner),
        )
        .register(
            SkillDescriptor {
                id: EXECUTOR_ID.into(),
                name: "Code Execution Agent".into(),
                description: "Generates React code based on a sustainable plan".into(),
                tags: vec!["react".into(), "code-generation".into()],
                expects_structured_input: true,
            },
            Projection::Whole,
            Arc::new(CodeGenerator),
        )
        .register(
            SkillDescriptor {
                id: AUDITOR_ID.into(),
                name: "Sustainability Auditor".into(),
                description: "Calculates an Eco-Grade based on a provided plan".into(),
                tags: vec!["sustainability".into(), "audit".into()],
                expects_structured_input: true,
            },
            Projection::Whole,
            Arc::new(Auditor),
        )
        .register(
            SkillDescriptor {
                id: FULL_STACK_ID.into(),
                name: "Full Stack Sustainable Agent".into(),
                description:
                    "Orchestrates planning, execution, and auditing of sustainable code generation"
                        .into(),
                tags: vec!["react".into(), "sustainability".into(), "code-generation".into()],
                expects_structured_input: false,
            },
            Projection::Field("prompt"),
            Arc::new(FullStack),
        )
        .alias(DEFAULT_SKILL_ID, FULL_STACK_ID)
        .build()
}
