//! Dashboard summary figures, computed fresh from the collections.

use serde::{Deserialize, Serialize};

use super::catalog::{Dataset, Model};
use super::community::CommunityPost;
use super::profile::UserProfile;
use super::report::AuditReport;

/// Read-only aggregate shown on the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_models: usize,
    pub total_datasets: usize,
    pub total_reports: usize,
    pub total_posts: usize,
    /// Sum of upvotes across all posts.
    pub total_upvotes: u64,
    /// Mean model fairness score; 0.0 with no models.
    pub average_fairness_score: f64,
    /// Profile XP.
    pub xp: u64,
}

pub fn aggregate(
    models: &[Model],
    datasets: &[Dataset],
    reports: &[AuditReport],
    posts: &[CommunityPost],
    profile: &UserProfile,
) -> StoreStats {
    StoreStats {
        total_models: models.len(),
        total_datasets: datasets.len(),
        total_reports: reports.len(),
        total_posts: posts.len(),
        total_upvotes: posts.iter().map(|p| p.upvotes).fold(0, u64::saturating_add),
        average_fairness_score: mean_fairness(models),
        xp: profile.xp,
    }
}

/// Arithmetic mean of fairness scores; never NaN.
#[allow(clippy::cast_precision_loss)]
pub fn mean_fairness(models: &[Model]) -> f64 {
    if models.is_empty() {
        return 0.0;
    }
    let total: u64 = models.iter().map(|m| u64::from(m.fairness_score)).sum();
    total as f64 / models.len() as f64
}
