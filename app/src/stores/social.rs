//! Social feed store

use chrono::Utc;
use fitness_tracker_shared::{new_id, seed, Comment, NewComment, NewPost, Post};
use serde::{Deserialize, Serialize};

/// Persisted feed state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialSnapshot {
    pub posts: Vec<Post>,
}

/// Feed of posts with nested comments
#[derive(Debug, Clone, Default)]
pub struct SocialStore {
    posts: Vec<Post>,
}

impl SocialStore {
    pub fn seeded() -> Self {
        Self {
            posts: seed::posts(),
        }
    }

    pub fn from_snapshot(snapshot: SocialSnapshot) -> Self {
        Self {
            posts: snapshot.posts,
        }
    }

    pub fn snapshot(&self) -> SocialSnapshot {
        SocialSnapshot {
            posts: self.posts.clone(),
        }
    }

    /// The feed, newest post first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_by_id(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn posts_by_user_id(&self, user_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.user_id == user_id).collect()
    }

    /// Prepend a post with no likes and no comments
    pub fn create_post(&mut self, input: NewPost) -> &Post {
        let post = Post {
            id: new_id(),
            user_id: input.user_id,
            username: input.username,
            user_avatar: input.user_avatar,
            content: input.content,
            image_url: input.image_url,
            video_url: input.video_url,
            workout_id: input.workout_id,
            likes: 0,
            comments: Vec::new(),
            timestamp: Utc::now(),
        };
        self.posts.insert(0, post);
        &self.posts[0]
    }

    pub fn like_post(&mut self, post_id: &str) -> Option<u32> {
        let post = self.post_mut(post_id)?;
        post.likes = post.likes.saturating_add(1);
        Some(post.likes)
    }

    /// Decrement the like counter, never below zero
    pub fn unlike_post(&mut self, post_id: &str) -> Option<u32> {
        let post = self.post_mut(post_id)?;
        post.likes = post.likes.saturating_sub(1);
        Some(post.likes)
    }

    /// Append a comment; `None` when the post does not exist
    pub fn add_comment(&mut self, post_id: &str, input: NewComment) -> Option<&Comment> {
        let post = self.post_mut(post_id)?;
        post.comments.push(Comment {
            id: new_id(),
            user_id: input.user_id,
            username: input.username,
            user_avatar: input.user_avatar,
            content: input.content,
            timestamp: Utc::now(),
        });
        post.comments.last()
    }

    fn post_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }
}
