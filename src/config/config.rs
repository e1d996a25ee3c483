//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::defaults::FormDefaults;
use super::voices::{self, Voice};
use crate::agent::AgentConfig;

/// Agent customizer configuration.
///
/// The three form inputs are optional; unset ones are filled from [`FormDefaults`].
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "agent-customizer")]
#[command(author, version, about = "Customize your calling AI agent", long_about = None)]
pub struct AppConfig {
    /// List all available voices and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Show detailed information about a specific voice and exit
    #[arg(long)]
    pub voice_info: Option<String>,

    /// Print the last saved settings and exit
    #[arg(long)]
    pub show: bool,

    /// Voice the agent speaks with
    #[arg(long, value_enum)]
    pub voice: Option<Voice>,

    /// First message the agent says to the caller
    #[arg(long, value_parser = parse_non_empty)]
    pub greeting: Option<String>,

    /// Personality and behavior of the agent
    #[arg(long, value_parser = parse_non_empty)]
    pub instructions: Option<String>,

    /// Backend endpoint receiving the settings
    #[arg(long, short = 'u', env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// File holding the last saved settings
    #[arg(long, short = 's', env = "SNAPSHOT_PATH", default_value_os_t = default_snapshot_path())]
    pub snapshot_path: PathBuf,

    /// Phone number of the agent, shown after a successful update
    #[arg(long, env = "AGENT_PHONE")]
    pub agent_phone: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        let config = Self::parse();

        if config.list_voices {
            voices::print_voices();
            std::process::exit(0);
        }

        if let Some(ref voice_name) = config.voice_info {
            match voices::print_voice_info(voice_name) {
                Ok(_) => std::process::exit(0),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        config
    }

    /// Build the record to submit from the form values, falling back to `defaults`.
    pub fn agent_config(&self, defaults: &FormDefaults) -> AgentConfig {
        let voice = self.voice.unwrap_or(defaults.voice);
        if !voice.is_offered() {
            warn!("Voice '{}' is not offered by the form yet, submitting anyway", voice);
        }

        AgentConfig::new(
            voice,
            self.greeting.clone().unwrap_or_else(|| defaults.greeting.clone()),
            self.instructions.clone().unwrap_or_else(|| defaults.instructions.clone()),
        )
    }

    /// Get the validated backend URL.
    pub fn backend_url(&self) -> Result<Url> {
        let raw = self.backend_url.as_deref().ok_or_else(|| anyhow::anyhow!("Backend URL is not set (use --backend-url or BACKEND_URL)"))?;
        let url = Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid backend URL '{}': {}", raw, e))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => anyhow::bail!("Backend URL must use http or https, got '{}'", other),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.backend_url()?;

        if self.snapshot_path.as_os_str().is_empty() {
            anyhow::bail!("Snapshot path must not be empty");
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Backend URL: {}", self.backend_url.as_deref().unwrap_or("<unset>"));
        info!("  Snapshot path: {}", self.snapshot_path.display());
        if let Some(voice) = self.voice {
            info!("  Voice: {}", voice);
        }
        if let Some(ref greeting) = self.greeting {
            info!("  Greeting: {}...", greeting.chars().take(50).collect::<String>());
        }
        if let Some(ref instructions) = self.instructions {
            info!("  Instructions: {}...", instructions.chars().take(50).collect::<String>());
        }
    }
}

/// Get the default snapshot path (~/.agent-customizer/config.json).
fn default_snapshot_path() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        home_dir.join(".agent-customizer").join("config.json")
    } else {
        PathBuf::from("config.json")
    }
}

/// Reject blank form text.
fn parse_non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() { Err("value must not be empty".to_string()) } else { Ok(s.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["agent-customizer", "--snapshot-path", "snap.json"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_unset_fields_use_defaults() {
        let defaults = FormDefaults::default();
        let config = parse(&["--greeting", "hi"]).agent_config(&defaults);
        assert_eq!(config.voice, Voice::Alloy);
        assert_eq!(config.greeting, "hi");
        assert_eq!(config.instructions, defaults.instructions);
    }

    #[test]
    fn test_defaults_are_injected() {
        let defaults = FormDefaults { voice: Voice::Coral, greeting: "hey".into(), instructions: "be brief".into() };
        let config = parse(&[]).agent_config(&defaults);
        assert_eq!(config, AgentConfig::new(Voice::Coral, "hey", "be brief"));
    }

    #[test]
    fn test_voice_flag() {
        let config = parse(&["--voice", "ash"]);
        assert_eq!(config.voice, Some(Voice::Ash));
        assert!(AppConfig::try_parse_from(["agent-customizer", "--voice", "echo"]).is_err());
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(AppConfig::try_parse_from(["agent-customizer", "--greeting", "   "]).is_err());
        assert!(AppConfig::try_parse_from(["agent-customizer", "--instructions", ""]).is_err());
    }

    #[test]
    fn test_backend_url_validation() {
        let mut config = parse(&["--backend-url", "https://example.com/update-config"]);
        assert_eq!(config.backend_url().unwrap().path(), "/update-config");
        assert!(config.validate().is_ok());

        config.backend_url = Some("ftp://example.com".into());
        assert!(config.validate().is_err());

        config.backend_url = Some("not a url".into());
        assert!(config.validate().is_err());

        config.backend_url = None;
        assert!(config.validate().is_err());
    }
}
