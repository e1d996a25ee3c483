//! The agent configuration record sent to the backend.

mod record;

pub use record::AgentConfig;
