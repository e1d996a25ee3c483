//! Agent Customizer - configure a calling AI agent from the command line.
//!
//! Sets the agent's voice, greeting and behavioral instructions, saves them to a
//! local snapshot and pushes them to the agent's backend.

mod agent;
mod config;
mod snapshot;
mod submit;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use config::{AppConfig, FormDefaults};
use snapshot::Snapshot;
use submit::{SubmitError, Submitter};

/// Render the last saved settings as pretty JSON.
fn render_snapshot(snapshot: &Snapshot) -> Result<String> {
    let saved = snapshot.load()?;
    Ok(serde_json::to_string_pretty(&saved)?)
}

/// Messages describing the outcome of a submission.
fn outcome_messages(result: &Result<(), SubmitError>, agent_phone: Option<&str>) -> Vec<String> {
    match result {
        Ok(()) => match agent_phone {
            Some(phone) => vec![format!("✅ Call your agent at {} to test the updated settings!", phone)],
            None => vec!["✅ Backend updated with the new settings".to_string()],
        },
        Err(SubmitError::RemoteRejection { status, body }) => {
            let mut messages = vec![format!("❌ Backend returned an error! Status code: {}", status)];
            if !body.is_empty() {
                messages.push(body.clone());
            }
            messages
        }
        Err(e) => vec!["❌ Failed to save settings or connect to the backend.".to_string(), e.to_string()],
    }
}

/// Build the submitter from the validated configuration.
fn build_submitter(config: &AppConfig, snapshot: Snapshot) -> Result<Submitter> {
    Submitter::new(config.backend_url()?, snapshot)
}

/// Report the outcome of a submission to the user.
fn report(result: &Result<(), SubmitError>, agent_phone: Option<&str>) {
    for message in outcome_messages(result, agent_phone) {
        if result.is_ok() {
            info!("{}", message);
        } else {
            error!("{}", message);
        }
    }
}

fn main() -> Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if config.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    let snapshot = Snapshot::new(&config.snapshot_path);

    if config.show {
        match render_snapshot(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ No saved settings to show: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    info!("📞 Agent Customizer v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }
    config.log_config();

    let submitter = match build_submitter(&config, snapshot) {
        Ok(submitter) => submitter,
        Err(e) => {
            error!("❌ Failed to set up the backend client: {}", e);
            std::process::exit(1);
        }
    };
    let agent_config = config.agent_config(&FormDefaults::default());

    let result = submitter.submit(&agent_config);
    report(&result, config.agent_phone.as_deref());

    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentConfig;
    use crate::config::Voice;

    #[test]
    fn test_success_messages() {
        assert_eq!(outcome_messages(&Ok(()), None), vec!["✅ Backend updated with the new settings"]);
        assert_eq!(
            outcome_messages(&Ok(()), Some("+1 218 757 7870")),
            vec!["✅ Call your agent at +1 218 757 7870 to test the updated settings!"]
        );
    }

    #[test]
    fn test_rejection_messages() {
        let result = Err(SubmitError::RemoteRejection { status: 500, body: "server error".into() });
        assert_eq!(outcome_messages(&result, Some("+1 555")), vec!["❌ Backend returned an error! Status code: 500", "server error"]);

        let result = Err(SubmitError::RemoteRejection { status: 404, body: String::new() });
        assert_eq!(outcome_messages(&result, None), vec!["❌ Backend returned an error! Status code: 404"]);
    }

    #[test]
    fn test_local_write_messages() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let error = Snapshot::new(blocker.join("config.json")).save(&AgentConfig::new(Voice::Alloy, "hi", "be nice")).unwrap_err();

        let messages = outcome_messages(&Err(SubmitError::LocalWrite(error)), None);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], "❌ Failed to save settings or connect to the backend.");
        assert!(messages[1].starts_with("failed to save settings locally: failed to access snapshot"));
    }

    #[test]
    fn test_build_submitter() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let mut config =
            AppConfig::try_parse_from(["agent-customizer", "--backend-url", "http://127.0.0.1:9/update-config"]).unwrap();
        assert!(build_submitter(&config, Snapshot::new(dir.path().join("config.json"))).is_ok());

        config.backend_url = None;
        let err = build_submitter(&config, Snapshot::new(dir.path().join("config.json"))).err().unwrap();
        assert!(err.to_string().contains("Backend URL is not set"));
    }

    #[test]
    fn test_render_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("config.json"));
        assert!(render_snapshot(&snapshot).is_err());

        let config = AgentConfig::new(Voice::Ash, "hi", "be nice");
        snapshot.save(&config).unwrap();
        let rendered = render_snapshot(&snapshot).unwrap();
        assert!(rendered.contains("\"voice\": \"ash\""));
        assert_eq!(serde_json::from_str::<AgentConfig>(&rendered).unwrap(), config);
    }
}
