//! Community board posts and voting.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author standing shown next to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Expert,
    Contributor,
    Citizen,
}

/// Direction of a vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl std::str::FromStr for VoteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(format!("unknown vote type: {other}")),
        }
    }
}

/// A discussion post. Newest posts sit at the front of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub role: String,
    pub trust_score: u32,
    pub title: String,
    pub summary: String,
    pub upvotes: u64,
    pub downvotes: u64,
    /// Comment count.
    pub comments: u64,
    pub badge: Badge,
    pub timestamp: String,
}

impl CommunityPost {
    /// A new post with no votes or comments, stamped now.
    pub fn draft(
        author: impl Into<String>,
        role: impl Into<String>,
        trust_score: u32,
        badge: Badge,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: author.into(),
            role: role.into(),
            trust_score,
            title: title.into(),
            summary: summary.into(),
            upvotes: 0,
            downvotes: 0,
            comments: 0,
            badge,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Count one vote. Touches exactly one counter.
    pub fn apply_vote(&mut self, vote: VoteType) {
        match vote {
            VoteType::Up => self.upvotes = self.upvotes.saturating_add(1),
            VoteType::Down => self.downvotes = self.downvotes.saturating_add(1),
        }
    }
}

/// Apply `vote` to the post with `post_id`; every other post passes
/// through untouched. Unknown ids leave the list as it was.
pub fn vote_in(posts: Vec<CommunityPost>, post_id: &str, vote: VoteType) -> Vec<CommunityPost> {
    posts
        .into_iter()
        .map(|mut post| {
            if post.id == post_id {
                post.apply_vote(vote);
            }
            post
        })
        .collect()
}
