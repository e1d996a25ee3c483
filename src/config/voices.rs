//! Voice catalogue for the calling agent.
//!
//! The backend accepts three voices. Only `alloy` is currently offered in the form;
//! the others stay valid values so previously saved snapshots keep loading.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Voice used by the agent when speaking to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    /// Neutral, balanced voice (the only one offered today)
    #[default]
    Alloy,
    /// Soft, warm voice
    Ash,
    /// Bright, clear voice
    Coral,
}

/// Catalogue entry describing a voice.
#[derive(Debug, Clone, Copy)]
pub struct VoiceEntry {
    pub voice: Voice,
    pub offered: bool,
    pub description: &'static str,
}

const VOICES: &[VoiceEntry] = &[
    VoiceEntry { voice: Voice::Alloy, offered: true, description: "Neutral and balanced" },
    VoiceEntry { voice: Voice::Ash, offered: false, description: "Soft and warm" },
    VoiceEntry { voice: Voice::Coral, offered: false, description: "Bright and clear" },
];

impl Voice {
    /// Wire name of the voice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Ash => "ash",
            Voice::Coral => "coral",
        }
    }

    /// Whether the form currently offers this voice.
    pub fn is_offered(&self) -> bool {
        entry(*self).offered
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn entry(voice: Voice) -> &'static VoiceEntry {
    // Every variant has a row in VOICES.
    VOICES.iter().find(|e| e.voice == voice).unwrap_or(&VOICES[0])
}

/// Look up a voice by its wire name.
pub fn get_voice(name: &str) -> Option<&'static VoiceEntry> {
    VOICES.iter().find(|e| e.voice.as_str() == name)
}

/// Print all known voices.
pub fn print_voices() {
    println!("═══════════════════════════════════════");
    println!("  Agent Voices");
    println!("═══════════════════════════════════════");
    println!();
    println!("{:<8} {:<8} DESCRIPTION", "VOICE", "OFFERED");
    println!("{}", "─".repeat(40));

    for e in VOICES {
        println!("{:<8} {:<8} {}", e.voice, if e.offered { "yes" } else { "no" }, e.description);
    }

    println!();
    println!("Default: {}", Voice::default());
    println!();
    println!("Usage:");
    println!("  ./agent-customizer --voice alloy");
}

/// Print detailed information about a specific voice.
pub fn print_voice_info(name: &str) -> anyhow::Result<()> {
    let e = get_voice(name).ok_or_else(|| anyhow::anyhow!("Voice '{}' not found. Run with --list-voices to see available voices", name))?;

    println!();
    println!("Voice: {}", e.voice);
    println!("{}", "─".repeat(40));
    println!("Description:   {}", e.description);
    println!("Offered:       {}", if e.offered { "yes" } else { "no" });
    println!();

    Ok(())
}
