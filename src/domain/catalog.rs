//! Uploaded models and datasets.
//!
//! Field names follow the dashboard's persisted JSON (`camelCase`,
//! `type`), so collections written by the browser app load unchanged.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit lifecycle of an uploaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    /// Upload accepted, bias analysis still running.
    Analyzing,
    /// Analysis finished without findings.
    Complete,
    /// Analysis found bias worth reviewing.
    Flagged,
}

impl std::fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analyzing => write!(f, "analyzing"),
            Self::Complete => write!(f, "complete"),
            Self::Flagged => write!(f, "flagged"),
        }
    }
}

/// An uploaded model under audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    /// Free-form model family, e.g. "Classification".
    #[serde(rename = "type")]
    pub model_type: String,
    pub tags: Vec<String>,
    pub description: String,
    /// Upload date (YYYY-MM-DD).
    pub upload_date: String,
    /// Overall fairness outcome, 0-100. Display only.
    pub fairness_score: u32,
    pub status: ModelStatus,
}

impl Model {
    /// Build the record for a fresh upload: new id, today's date,
    /// analysis pending.
    pub fn uploaded(
        name: impl Into<String>,
        model_type: impl Into<String>,
        tags: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            model_type: model_type.into(),
            tags,
            description: description.into(),
            upload_date: today(),
            fairness_score: 0,
            status: ModelStatus::Analyzing,
        }
    }
}

/// An uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub dataset_type: String,
    pub tags: Vec<String>,
    pub description: String,
    pub upload_date: String,
    pub sample_count: u64,
}

impl Dataset {
    /// Build the record for a fresh dataset upload.
    pub fn uploaded(
        name: impl Into<String>,
        dataset_type: impl Into<String>,
        tags: Vec<String>,
        description: impl Into<String>,
        sample_count: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            dataset_type: dataset_type.into(),
            tags,
            description: description.into(),
            upload_date: today(),
            sample_count,
        }
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
