#![forbid(unsafe_code)]

//! Content model, skill contract, registry, routing errors, and configuration.

pub mod config;
pub mod content;
pub mod registry;
pub mod routing;
pub mod skill;

pub use config::Config;
pub use content::{ContentKind, ContentMode, SkillInput, SkillOutput};
pub use registry::{
    DEFAULT_SKILL_ID, Projection, RegisteredSkill, SkillDescriptor, SkillRegistry,
    SkillRegistryBuilder,
};
pub use routing::RouteError;
pub use skill::{MeasurementBaseline, Skill, SkillContext, SkillError, SkillFuture};
