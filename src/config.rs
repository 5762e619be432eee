//! Settings for rendering and for the feed. Everything has a default, so an empty (or missing)
//! configuration file is valid.
//!
//! ```toml
//! [render]
//! tree_width = 1200
//! node_radius = 30
//!
//! [feed]
//! default_author = "Staff"
//! ```

use std::{env, fs, path::Path};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;

/// Environment variable naming the configuration file [`Config::load`] reads.
pub const CONFIG_ENV: &str = "DSVIZ_CONFIG";

/// Top level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Geometry of the SVG renderings.
    pub render: RenderConfig,
    /// Defaults for new posts.
    pub feed: FeedConfig,
}

/// Geometry of the SVG renderings, in pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Horizontal pitch of queue cells.
    #[serde(default = "default_queue_cell")]
    pub queue_cell: u32,
    /// Vertical pitch of stack cells.
    #[serde(default = "default_stack_cell")]
    pub stack_cell: u32,
    /// Canvas width for trees.
    #[serde(default = "default_tree_width")]
    pub tree_width: u32,
    /// Canvas height for trees.
    #[serde(default = "default_tree_height")]
    pub tree_height: u32,
    /// Where the root of the level-filled tree and the BST is drawn.
    #[serde(default = "default_tree_top")]
    pub tree_top: u32,
    /// Vertical distance between levels of the level-filled tree and the BST.
    #[serde(default = "default_level_gap")]
    pub level_gap: u32,
    /// Where the root of the hand-built binary tree is drawn.
    #[serde(default = "default_binary_top")]
    pub binary_top: u32,
    /// Vertical distance between levels of the hand-built binary tree.
    #[serde(default = "default_binary_level_gap")]
    pub binary_level_gap: u32,
    /// Radius of a tree node's circle.
    #[serde(default = "default_node_radius")]
    pub node_radius: u32,
}

fn default_queue_cell() -> u32 {
    120
}

fn default_stack_cell() -> u32 {
    80
}

fn default_tree_width() -> u32 {
    1000
}

fn default_tree_height() -> u32 {
    500
}

fn default_tree_top() -> u32 {
    40
}

fn default_level_gap() -> u32 {
    80
}

fn default_binary_top() -> u32 {
    50
}

fn default_binary_level_gap() -> u32 {
    100
}

fn default_node_radius() -> u32 {
    25
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            queue_cell: default_queue_cell(),
            stack_cell: default_stack_cell(),
            tree_width: default_tree_width(),
            tree_height: default_tree_height(),
            tree_top: default_tree_top(),
            level_gap: default_level_gap(),
            binary_top: default_binary_top(),
            binary_level_gap: default_binary_level_gap(),
            node_radius: default_node_radius(),
        }
    }
}

/// Values filled in when a new post leaves them out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedConfig {
    /// Author of a post created without one.
    #[serde(default = "default_author")]
    pub default_author: String,
    /// Category of a post created without one.
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_author() -> String {
    "Anonymous".to_string()
}

fn default_category() -> String {
    "regular".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_author: default_author(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing tables and keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the TOML file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when it isn't set.
    pub fn load() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(path) => {
                info!("Loading configuration from {path}");
                Self::from_file(&path).inspect_err(|e| warn!("Invalid configuration {path}: {e}"))
            }
            Err(_) => {
                info!("{CONFIG_ENV} not set, using default configuration");
                Ok(Self::default())
            }
        }
    }
}
