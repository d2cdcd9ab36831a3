//! Demo data loader.

use tracing::{info, instrument};

use super::store::{EthosStore, StorageKey};
use crate::domain::fixtures;
use crate::domain::profile::{ProfileStats, ProfileUpdate};
use crate::ports::key_value::KeyValueStore;

impl<S: KeyValueStore + ?Sized> EthosStore<S> {
  /// Wipe everything and load the fixed demo set.
  ///
  /// Profile counters are set to the fixture counts directly; xp is
  /// left as it was, unlike a normal `increment_stat`.
  #[instrument(skip(self))]
  pub fn insert_demo_data(&self) {
    self.clear_all_data();

    let models = fixtures::demo_models();
    let datasets = fixtures::demo_datasets();
    let reports = fixtures::demo_reports();
    let posts = fixtures::demo_posts();

    self.replace(StorageKey::Models, &models);
    self.replace(StorageKey::Datasets, &datasets);
    self.replace(StorageKey::Reports, &reports);
    self.replace(StorageKey::Posts, &posts);

    let current = self.get_profile().stats;
    self.update_profile(ProfileUpdate {
      stats: Some(ProfileStats {
        models_audited: models.len() as u64,
        reports_generated: reports.len() as u64,
        community_posts: posts.len() as u64,
        ..current
      }),
      ..ProfileUpdate::default()
    });

    info!(
      models = models.len(),
      datasets = datasets.len(),
      reports = reports.len(),
      posts = posts.len(),
      "Demo data inserted"
    );
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::adapters::persistence::MemoryStore;
  use crate::domain::profile::{ProfileStat, UserProfile};

  #[test]
  fn test_demo_counts_and_profile() {
    let store = EthosStore::new(Arc::new(MemoryStore::new()));
    store.insert_demo_data();

    assert_eq!(store.get_models().len(), 2);
    assert_eq!(store.get_datasets().len(), 2);
    assert_eq!(store.get_reports().len(), 1);
    assert_eq!(store.get_posts().len(), 2);

    let profile = store.get_profile();
    assert_eq!(profile.stats.models_audited, 2);
    assert_eq!(profile.stats.reports_generated, 1);
    assert_eq!(profile.stats.community_posts, 2);
    assert_eq!(profile.stats.upvotes_received, 342);
    assert_eq!(profile.xp, UserProfile::default().xp);
  }

  #[test]
  fn test_demo_replaces_prior_state() {
    let store = EthosStore::new(Arc::new(MemoryStore::new()));
    store.add_model(fixtures::demo_models().remove(1));
    store.increment_stat_by(ProfileStat::ModelsAudited, 4);

    store.insert_demo_data();

    assert_eq!(store.get_models(), fixtures::demo_models());
    // clear_all_data reset the profile, so xp is back to the default
    assert_eq!(store.get_profile().xp, 2847);
  }

  #[test]
  fn test_demo_keeps_posts_newest_first() {
    let store = EthosStore::new(Arc::new(MemoryStore::new()));
    store.insert_demo_data();
    assert_eq!(store.get_posts()[0].id, "demo-post-1");
    let stats = store.get_stats();
    assert_eq!(stats.total_upvotes, 68);
    assert!((stats.average_fairness_score - 66.0).abs() < f64::EPSILON);
  }
}
