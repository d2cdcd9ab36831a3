//! Profile operations: read with defaults, shallow merge, stat increments.

use tracing::{info, instrument};

use super::store::{EthosStore, StorageKey};
use crate::domain::profile::{ProfileStat, ProfileUpdate, UserProfile};
use crate::ports::key_value::KeyValueStore;

impl<S: KeyValueStore + ?Sized> EthosStore<S> {
  /// The stored profile, or the default one. Reading never writes.
  pub fn get_profile(&self) -> UserProfile {
    self
      .get_item(StorageKey::Profile.as_str())
      .unwrap_or_default()
  }

  /// Shallow-merge `update` onto the current profile and persist it.
  ///
  /// `stats` is replaced as a whole; use [`Self::increment_stat_by`]
  /// to bump a single counter.
  #[instrument(skip(self, update))]
  pub fn update_profile(&self, update: ProfileUpdate) -> UserProfile {
    let profile = self.get_profile().merged(update);
    self.set_item(StorageKey::Profile.as_str(), &profile);
    profile
  }

  /// Increment `stat` by one (and xp by 10).
  pub fn increment_stat(&self, stat: ProfileStat) -> UserProfile {
    self.increment_stat_by(stat, 1)
  }

  /// Add `amount` to `stat` and `10 * amount` to xp in one write.
  #[instrument(skip(self))]
  pub fn increment_stat_by(&self, stat: ProfileStat, amount: u64) -> UserProfile {
    let mut profile = self.get_profile();
    profile.record(stat, amount);
    self.set_item(StorageKey::Profile.as_str(), &profile);
    info!(
      value = stat.read(&profile.stats),
      xp = profile.xp,
      "Profile stat incremented"
    );
    profile
  }
}
