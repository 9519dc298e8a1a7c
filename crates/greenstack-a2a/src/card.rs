use greenstack_core::ContentMode;

use crate::types::{AgentCapabilities, AgentCard, AgentSkill};

pub struct AgentCardBuilder {
    name: String,
    description: String,
    url: String,
    version: String,
    capabilities: AgentCapabilities,
    input_modes: Vec<ContentMode>,
    output_modes: Vec<ContentMode>,
    skills: Vec<AgentSkill>,
}

impl AgentCardBuilder {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            url: url.into(),
            version: version.into(),
            capabilities: AgentCapabilities::default(),
            input_modes: Vec::new(),
            output_modes: Vec::new(),
            skills: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    #[must_use]
    pub fn streaming(mut self, enabled: bool) -> Self {
        self.capabilities.streaming = enabled;
        self
    }

    #[must_use]
    pub fn extended_protocol_support(mut self, enabled: bool) -> Self {
        self.capabilities.extended_protocol_support = enabled;
        self
    }

    #[must_use]
    pub fn default_input_modes(mut self, modes: Vec<ContentMode>) -> Self {
        self.input_modes = modes;
        self
    }

    #[must_use]
    pub fn default_output_modes(mut self, modes: Vec<ContentMode>) -> Self {
        self.output_modes = modes;
        self
    }

    #[must_use]
    pub fn skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }

    #[must_use]
    pub fn build(self) -> AgentCard {
        AgentCard {
            name: self.name,
            description: self.description,
            url: self.url,
            version: self.version,
            capabilities: self.capabilities,
            default_input_modes: self.input_modes,
            default_output_modes: self.output_modes,
            skills: self.skills,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_minimal() {
        let card = AgentCardBuilder::new("agent", "http://localhost:9001/", "1.0.0").build();
        assert_eq!(card.name, "agent");
        assert_eq!(card.url, "http://localhost:9001/");
        assert!(card.description.is_empty());
        assert!(!card.capabilities.streaming);
        assert!(!card.capabilities.extended_protocol_support);
        assert!(card.skills.is_empty());
    }

    #[test]
    fn builder_full() {
        let card = AgentCardBuilder::new("Sustainable Planning Agent", "http://localhost:9001/", "1.0.0")
            .description("Creates sustainable coding plans")
            .streaming(false)
            .extended_protocol_support(true)
            .default_input_modes(vec![ContentMode::TextPlain])
            .default_output_modes(vec![ContentMode::StructuredJson])
            .skill(AgentSkill {
                id: "planner_agent".into(),
                name: "Sustainable Planning Agent".into(),
                description: "plans".into(),
                tags: vec!["planning".into()],
                expects_structured_input: false,
            })
            .build();

        assert!(card.capabilities.extended_protocol_support);
        assert_eq!(card.default_input_modes, vec![ContentMode::TextPlain]);
        assert_eq!(card.default_output_modes, vec![ContentMode::StructuredJson]);
        assert_eq!(card.skills.len(), 1);
        assert_eq!(card.skills[0].id, "planner_agent");
    }
}
