//! Initial values for the agent form.

use super::voices::Voice;

const DEFAULT_GREETING: &str = "Hello! I am your AI voice assistant. \
I am here to assist you with your queries and provide helpful information. \
How can I assist you today?";

const DEFAULT_INSTRUCTIONS: &str = "You are an AI assistant designed to provide accurate and concise responses \
to user queries. Maintain a professional and polite tone, and ensure clarity \
and relevance in your answers. Always strive to assist the user effectively.";

/// Values the form starts with when the user leaves a field unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub voice: Voice,
    pub greeting: String,
    pub instructions: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self { voice: Voice::default(), greeting: DEFAULT_GREETING.to_string(), instructions: DEFAULT_INSTRUCTIONS.to_string() }
    }
}
