//! Transcript persistence — one JSON file per completed interview.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::models::candidate::{CandidateProfile, TurnHistoryEntry};

/// Write-once snapshot of a completed session. Field names match the
/// transcript file format consumed downstream, hence the capitalized keys.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Tech Stack")]
    pub tech_stack: String,
    #[serde(rename = "Experience")]
    pub experience: u32,
    #[serde(rename = "QnA History")]
    pub qna_history: Vec<TurnHistoryEntry>,
}

impl Transcript {
    pub fn new(
        profile: &CandidateProfile,
        history: &[TurnHistoryEntry],
        at: DateTime<Local>,
    ) -> Self {
        Transcript {
            timestamp: at.format("%Y-%m-%d %H:%M:%S").to_string(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.contact_number.clone(),
            position: profile.desired_position.clone(),
            tech_stack: profile.tech_stack.clone(),
            experience: profile.experience_years,
            qna_history: history.to_vec(),
        }
    }
}

/// Writes completed transcripts into a flat directory, one file per session.
#[derive(Debug, Clone)]
pub struct TranscriptWriter {
    dir: PathBuf,
}

impl TranscriptWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persists the transcript as pretty-printed JSON and returns the path.
    /// Creates the directory if absent.
    pub fn write(&self, transcript: &Transcript, at: DateTime<Local>) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create transcript dir {:?}", self.dir))?;

        let path = self.dir.join(format!(
            "{}_{}.json",
            transcript.name.replace(' ', "_"),
            at.format("%Y%m%d_%H%M%S")
        ));

        let json = serde_json::to_string_pretty(transcript)
            .context("Failed to serialize transcript")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write transcript {:?}", path))?;

        info!("Interview saved to {}", path.display());
        Ok(path)
    }
}
