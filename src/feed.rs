//! The lecture feed: posts held by some relational store, read back through a [`Stack`] for the
//! listing and through a title [`bst::Tree`] for search.
//!
//! Nothing here keeps an index. Every listing or search starts from a full read of the store,
//! newest first.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::bst;
use crate::config::FeedConfig;
use crate::error::{Result, StoreResult};
use crate::queue::Queue;
use crate::stack::Stack;

/// A row of the posts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Store assigned identifier. Larger is newer.
    pub id: i64,
    /// Headline, also the key used for title search.
    pub title: String,
    /// Body text.
    pub caption: String,
    /// Who wrote it.
    pub author: String,
    /// Free-form category, `"regular"` unless told otherwise.
    pub category: String,
    /// Up-vote tally.
    pub upvotes: u32,
    /// Down-vote tally.
    pub downvotes: u32,
}

/// The fields a client supplies to create a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    /// Headline.
    pub title: String,
    /// Body text.
    pub caption: String,
    /// Author, or the configured default.
    pub author: Option<String>,
    /// Category, or the configured default.
    pub category: Option<String>,
}

/// A partial update. Only the fields that are `Some` change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostEdit {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub caption: Option<String>,
    /// New author.
    pub author: Option<String>,
}

/// A vote on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    /// Adds one to `upvotes`.
    Up,
    /// Adds one to `downvotes`.
    Down,
}

impl FromStr for Vote {
    type Err = Infallible;

    /// `"up"` is an up-vote. Anything else counts as a down-vote.
    fn from_str(way: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if way == "up" { Self::Up } else { Self::Down })
    }
}

/// The relational store the feed reads and writes. Implementations report their own failures
/// as boxed errors, which are passed through unchanged.
pub trait PostStore {
    /// Every post, newest (largest id) first.
    fn newest_first(&self) -> StoreResult<Vec<Post>>;

    /// Posts whose title or caption contains `keyword`, ignoring ASCII case, newest first.
    fn matching(&self, keyword: &str) -> StoreResult<Vec<Post>>;

    /// Inserts a post with zero votes and returns its id. Missing author or category are
    /// already filled in.
    fn create(
        &mut self,
        title: &str,
        caption: &str,
        author: &str,
        category: &str,
    ) -> StoreResult<i64>;

    /// Applies the `Some` fields of `edit` to the post. Unknown ids are ignored.
    fn edit(&mut self, id: i64, edit: &PostEdit) -> StoreResult<()>;

    /// Records a vote. Unknown ids are ignored.
    fn vote(&mut self, id: i64, vote: Vote) -> StoreResult<()>;

    /// Removes a post. Unknown ids are ignored.
    fn delete(&mut self, id: i64) -> StoreResult<()>;
}

/// A [`PostStore`] kept in process memory. Ids count up from 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: BTreeMap<i64, Post>,
    last_id: i64,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

impl PostStore for MemoryStore {
    fn newest_first(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.values().rev().cloned().collect())
    }

    fn matching(&self, keyword: &str) -> StoreResult<Vec<Post>> {
        Ok(self
            .posts
            .values()
            .rev()
            .filter(|p| {
                contains_ignore_ascii_case(&p.title, keyword)
                    || contains_ignore_ascii_case(&p.caption, keyword)
            })
            .cloned()
            .collect())
    }

    fn create(
        &mut self,
        title: &str,
        caption: &str,
        author: &str,
        category: &str,
    ) -> StoreResult<i64> {
        self.last_id += 1;
        let id = self.last_id;
        self.posts.insert(
            id,
            Post {
                id,
                title: title.to_string(),
                caption: caption.to_string(),
                author: author.to_string(),
                category: category.to_string(),
                upvotes: 0,
                downvotes: 0,
            },
        );
        Ok(id)
    }

    fn edit(&mut self, id: i64, edit: &PostEdit) -> StoreResult<()> {
        if let Some(post) = self.posts.get_mut(&id) {
            if let Some(title) = &edit.title {
                post.title.clone_from(title);
            }
            if let Some(caption) = &edit.caption {
                post.caption.clone_from(caption);
            }
            if let Some(author) = &edit.author {
                post.author.clone_from(author);
            }
        }
        Ok(())
    }

    fn vote(&mut self, id: i64, vote: Vote) -> StoreResult<()> {
        if let Some(post) = self.posts.get_mut(&id) {
            match vote {
                Vote::Up => post.upvotes += 1,
                Vote::Down => post.downvotes += 1,
            }
        }
        Ok(())
    }

    fn delete(&mut self, id: i64) -> StoreResult<()> {
        self.posts.remove(&id);
        Ok(())
    }
}

/// Creates a post, filling in the configured author and category when they are missing.
pub fn create_post(
    store: &mut impl PostStore,
    defaults: &FeedConfig,
    post: NewPost,
) -> Result<i64> {
    let author = post.author.as_deref().unwrap_or(&defaults.default_author);
    let category = post.category.as_deref().unwrap_or(&defaults.default_category);
    let id = store.create(&post.title, &post.caption, author, category)?;
    info!(id, title = %post.title, "created post");
    Ok(id)
}

/// Lists every post. The rows come out of the store newest first and are pushed onto a
/// [`Stack`], so reading the stack back yields them oldest first.
pub fn feed(store: &impl PostStore) -> Result<Vec<Post>> {
    let stack: Stack<Post> = store.newest_first()?.into_iter().collect();
    debug!(posts = stack.len(), "built feed stack");
    Ok(stack.iter().cloned().collect())
}

/// Searches post titles. The titles, in feed order, are inserted into a [`bst::Tree`] and every
/// title containing `query` (ignoring case) is returned in depth-first order. A blank query
/// returns nothing without reading the store.
pub fn search_titles(store: &impl PostStore, query: &str) -> Result<Vec<String>> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let titles: bst::Tree<String> = feed(store)?.into_iter().map(|p| p.title).collect();
    let found: Vec<String> = titles.matching(query).cloned().collect();
    debug!(query, titles = titles.len(), found = found.len(), "searched titles");
    Ok(found)
}

/// Title and caption keyword search, delegated to the store, newest first.
pub fn search_posts(store: &impl PostStore, keyword: &str) -> Result<Vec<Post>> {
    Ok(store.matching(keyword.trim())?)
}

/// One card on the lectures page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The post. Interactive demos use negative ids and carry no author or votes.
    pub post: Post,
    /// The caption, `"None"` when it's blank, or `"N/A"` for a demo.
    pub max_value: String,
    /// How many *other* posts mention the first word of this title.
    pub related_count: usize,
}

const DEMOS: [(&str, &str); 5] = [
    (
        "Queue Interactive Demo",
        "Real-time enqueue/dequeue visualization.",
    ),
    ("Stack Interactive Demo", "Push/pop to see LIFO behavior."),
    ("Tree Interactive Demo", "Add nodes to grow a general tree."),
    (
        "Binary Tree Interactive Demo",
        "Insert left/right nodes manually.",
    ),
    (
        "Binary Search Tree Interactive Demo",
        "Automatic BST insertion.",
    ),
];

/// The lectures page: the five interactive demos (ids -1 to -5) followed by the [`feed`].
pub fn lectures(store: &impl PostStore) -> Result<Vec<Entry>> {
    let demos = (1..).zip(DEMOS).map(|(n, (title, caption))| Entry {
        post: Post {
            id: -n,
            title: title.to_string(),
            caption: caption.to_string(),
            author: String::new(),
            category: String::new(),
            upvotes: 0,
            downvotes: 0,
        },
        max_value: "N/A".to_string(),
        related_count: 0,
    });

    let mut entries: Vec<Entry> = demos.collect();
    for post in feed(store)? {
        let related_count = match post.title.split_whitespace().next() {
            Some(word) => store
                .matching(word)?
                .iter()
                .filter(|other| other.id != post.id)
                .count(),
            None => 0,
        };
        let max_value = if post.caption.is_empty() {
            "None".to_string()
        } else {
            post.caption.clone()
        };
        entries.push(Entry {
            post,
            max_value,
            related_count,
        });
    }

    Ok(entries)
}

/// What [`delete_post`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The post was handed to the store for deletion.
    Deleted,
    /// Nothing came out of the queue so nothing was deleted.
    NoOp,
}

/// Deletes a post. The id is queued and dequeued before it reaches the store, mirroring how
/// deletions are demonstrated on the lectures page.
pub fn delete_post(store: &mut impl PostStore, id: i64) -> Result<Deletion> {
    let mut pending = Queue::new();
    pending.enqueue(id);

    let Some(id) = pending.dequeue() else {
        return Ok(Deletion::NoOp);
    };
    store.delete(id)?;
    info!(id, "deleted post");
    Ok(Deletion::Deleted)
}
