//! Community post board.

use std::fmt;

use crate::constants::{POST_MAX_LENGTH, POST_WARNING_THRESHOLD};
use crate::error::{CampusError, CampusResult};
use crate::pages::escape_html;

/// Tracks a draft against the post length limit. Input past the limit is
/// dropped, like a textarea with `maxlength`.
#[derive(Debug, Clone)]
pub struct CharacterCounter {
    max: usize,
    text: String,
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self::new(POST_MAX_LENGTH)
    }
}

impl CharacterCounter {
    pub fn new(max: usize) -> Self {
        CharacterCounter {
            max,
            text: String::new(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max).collect();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn remaining(&self) -> usize {
        self.max - self.text.chars().count()
    }

    pub fn is_warning(&self) -> bool {
        self.remaining() < POST_WARNING_THRESHOLD
    }
}

impl fmt::Display for CharacterCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} characters remaining", self.remaining())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub body: String,
    pub author: String,
    pub posted: String,
}

impl Post {
    fn new(body: &str) -> Self {
        Post {
            title: "New Post".to_string(),
            body: body.to_string(),
            author: "You".to_string(),
            posted: "Just now".to_string(),
        }
    }

    pub fn body_html(&self) -> String {
        escape_html(&self.body)
    }
}

#[derive(Debug, Default)]
pub struct CommunityPage {
    posts: Vec<Post>,
    draft: CharacterCounter,
}

impl CommunityPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_draft(&mut self, text: &str) {
        self.draft.set_text(text);
    }

    pub fn counter(&self) -> &CharacterCounter {
        &self.draft
    }

    /// Publish the draft at the top of the board and clear it.
    pub fn create_post(&mut self) -> CampusResult<&Post> {
        let body = self.draft.text().trim();
        if body.is_empty() {
            return Err(CampusError::EmptyPost);
        }

        let post = Post::new(body);
        self.posts.insert(0, post);
        self.draft.clear();

        Ok(&self.posts[0])
    }

    /// Newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_counts_down() {
        let mut counter = CharacterCounter::default();
        assert_eq!(counter.to_string(), "280 characters remaining");
        counter.set_text("hello");
        assert_eq!(counter.remaining(), 275);
        assert!(!counter.is_warning());
    }

    #[test]
    fn counter_warns_below_threshold() {
        let mut counter = CharacterCounter::default();
        counter.set_text(&"a".repeat(230));
        assert_eq!(counter.remaining(), 50);
        assert!(!counter.is_warning());
        counter.set_text(&"a".repeat(231));
        assert!(counter.is_warning());
    }

    #[test]
    fn counter_truncates_at_limit() {
        let mut counter = CharacterCounter::new(5);
        counter.set_text("héllo world");
        assert_eq!(counter.text(), "héllo");
        assert_eq!(counter.remaining(), 0);
    }

    #[test]
    fn empty_draft_is_rejected() {
        let mut page = CommunityPage::new();
        page.type_draft("   \n\t");
        assert!(matches!(page.create_post(), Err(CampusError::EmptyPost)));
        assert!(page.posts().is_empty());
    }

    #[test]
    fn posts_are_newest_first_and_clear_draft() {
        let mut page = CommunityPage::new();
        page.type_draft("first");
        page.create_post().unwrap();
        page.type_draft("  second  ");
        let post = page.create_post().unwrap();
        assert_eq!(post.body, "second");
        assert_eq!(post.author, "You");

        let bodies: Vec<&str> = page.posts().iter().map(|p| p.body.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
        assert_eq!(page.counter().remaining(), 280);
    }

    #[test]
    fn post_body_is_escaped_for_html() {
        let mut page = CommunityPage::new();
        page.type_draft("<script>alert(1)</script>");
        let post = page.create_post().unwrap();
        assert_eq!(post.body_html(), "&lt;script&gt;alert(1)&lt;/script&gt;");
    }
}
