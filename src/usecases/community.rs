//! Community board operations: posting, voting, deleting.

use tracing::{debug, instrument};

use super::store::{EthosStore, StorageKey};
use crate::domain::community::{self, CommunityPost, VoteType};
use crate::ports::key_value::KeyValueStore;

impl<S: KeyValueStore + ?Sized> EthosStore<S> {
  /// All posts, newest first.
  pub fn get_posts(&self) -> Vec<CommunityPost> {
    self.list(StorageKey::Posts)
  }

  /// Publish a post at the front of the board.
  #[instrument(skip(self, post), fields(post_id = %post.id))]
  pub fn add_post(&self, post: CommunityPost) {
    let mut posts = self.get_posts();
    posts.insert(0, post); // newest first
    self.replace(StorageKey::Posts, &posts);
  }

  pub fn get_post_by_id(&self, id: &str) -> Option<CommunityPost> {
    self.get_posts().into_iter().find(|p| p.id == id)
  }

  /// Count one vote on `post_id`. Unknown ids change nothing.
  #[instrument(skip(self))]
  pub fn vote_post(&self, post_id: &str, vote: VoteType) {
    let posts = community::vote_in(self.get_posts(), post_id, vote);
    self.replace(StorageKey::Posts, &posts);
  }

  /// Remove the post with `post_id`. Unknown ids change nothing.
  #[instrument(skip(self))]
  pub fn delete_post(&self, post_id: &str) {
    let mut posts = self.get_posts();
    let before = posts.len();
    posts.retain(|p| p.id != post_id);
    self.replace(StorageKey::Posts, &posts);
    debug!(removed = before - posts.len(), "Post delete applied");
  }
}
