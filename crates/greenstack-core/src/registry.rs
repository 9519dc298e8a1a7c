use std::collections::HashMap;
use std::sync::Arc;

use crate::content::SkillInput;
use crate::skill::Skill;

/// Registry key the message protocol substitutes when an envelope carries no
/// skill id. Resolved by ordinary lookup like any other entry.
pub const DEFAULT_SKILL_ID: &str = "default_skill";

/// Capability metadata for one skill, built once at startup.
#[derive(Debug, Clone)]
pub struct SkillDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub expects_structured_input: bool,
}

/// How a structured payload is narrowed to the argument a skill expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// The skill consumes the whole mapping.
    Whole,
    /// The skill reads a single string field; missing fields become empty.
    Field(&'static str),
}

impl Projection {
    #[must_use]
    pub fn apply(self, value: &serde_json::Value) -> SkillInput {
        match self {
            Self::Whole => SkillInput::Structured(value.clone()),
            Self::Field(name) => SkillInput::Text(
                value
                    .get(name)
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
            ),
        }
    }
}

/// One registry entry: descriptor, input projection, and the callable.
pub struct RegisteredSkill {
    pub descriptor: SkillDescriptor,
    pub projection: Projection,
    pub skill: Arc<dyn Skill>,
}

impl std::fmt::Debug for RegisteredSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredSkill")
            .field("descriptor", &self.descriptor)
            .field("projection", &self.projection)
            .field("skill", &"<dyn Skill>")
            .finish()
    }
}

/// Static skill lookup shared by both protocol executors.
///
/// Read-only after construction; no runtime registration or removal.
pub struct SkillRegistry {
    skills: HashMap<String, Arc<RegisteredSkill>>,
}

impl SkillRegistry {
    #[must_use]
    pub fn builder() -> SkillRegistryBuilder {
        SkillRegistryBuilder {
            skills: HashMap::new(),
        }
    }

    /// Exact key match; no fuzzy matching, no fallback.
    #[must_use]
    pub fn resolve(&self, skill_id: &str) -> Option<&RegisteredSkill> {
        self.skills.get(skill_id).map(|entry| &**entry)
    }

    /// Descriptors of the registered skills, aliases excluded.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&SkillDescriptor> {
        let mut all: Vec<&SkillDescriptor> = self
            .skills
            .iter()
            .filter(|(key, entry)| **key == entry.descriptor.id)
            .map(|(_, entry)| &entry.descriptor)
            .collect();
        all.sort_by_key(|d| d.id.clone());
        all
    }
}

impl std::fmt::Debug for SkillRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.skills.keys().collect();
        ids.sort();
        f.debug_struct("SkillRegistry").field("ids", &ids).finish()
    }
}

pub struct SkillRegistryBuilder {
    skills: HashMap<String, Arc<RegisteredSkill>>,
}

impl SkillRegistryBuilder {
    #[must_use]
    pub fn register(
        mut self,
        descriptor: SkillDescriptor,
        projection: Projection,
        skill: Arc<dyn Skill>,
    ) -> Self {
        let id = descriptor.id.clone();
        self.skills.insert(
            id,
            Arc::new(RegisteredSkill {
                descriptor,
                projection,
                skill,
            }),
        );
        self
    }

    /// Register `alias` as a second key for an existing entry.
    ///
    /// Unknown targets are skipped with a warning; the alias then resolves
    /// to nothing, same as any unregistered id.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>, target: &str) -> Self {
        let alias = alias.into();
        match self.skills.get(target) {
            Some(entry) => {
                let entry = Arc::clone(entry);
                self.skills.insert(alias, entry);
            }
            None => tracing::warn!("alias {alias} targets unregistered skill {target}"),
        }
        self
    }

    #[must_use]
    pub fn build(self) -> SkillRegistry {
        SkillRegistry {
            skills: self.skills,
        }
    }
}
