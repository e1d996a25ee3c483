//! Agent configuration record.

use serde::{Deserialize, Serialize};

use crate::config::Voice;

/// Voice, greeting and behavioral instructions for the calling agent.
///
/// Built fresh from the form values on every submission. The same JSON shape is
/// used for the local snapshot and the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub voice: Voice,        // Voice used on calls
    pub greeting: String,    // First thing the agent says
    pub instructions: String, // Personality and behavior
}

impl AgentConfig {
    pub fn new(voice: Voice, greeting: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self { voice, greeting: greeting.into(), instructions: instructions.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let config = AgentConfig::new(Voice::Alloy, "hi", "be nice");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, serde_json::json!({ "voice": "alloy", "greeting": "hi", "instructions": "be nice" }));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = serde_json::from_str::<AgentConfig>(r#"{ "voice": "alloy", "greeting": "hi" }"#);
        assert!(result.is_err());
    }
}
