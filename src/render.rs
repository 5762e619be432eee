//! Turns structure state into standalone SVG documents.
//!
//! Rendering only reads: queues and stacks are walked with their iterators and trees are laid
//! out from a [`Slot`] snapshot. Every value is escaped before it goes into the markup.

use std::fmt::Display;

use crate::config::RenderConfig;
use crate::node::Slot;
use crate::queue::Queue;
use crate::stack::Stack;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Escapes text for use in XML/HTML content or a quoted attribute.
///
/// ```
/// assert_eq!(
///     dsviz::render::escape(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
/// );
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// How far apart children are drawn from their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// Horizontal offset shrinks with depth as `width * 0.4 / level`. Used for the
    /// level-filled tree and the BST.
    ByLevel,
    /// Horizontal offset starts at a fifth of the width and halves every level. Used for the
    /// hand-built binary tree.
    Halving,
}

/// Renders structures as SVG using the configured geometry.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// A renderer with the given geometry.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Draws the queue left to right, front first.
    pub fn queue<T: Display>(&self, queue: &Queue<T>) -> String {
        let cell = self.config.queue_cell;
        let box_width = cell.saturating_sub(20);
        let width = cell.saturating_mul(count(queue.len()).max(1)).max(300);

        let mut parts = vec![open(width, 120)];
        for (i, value) in queue.iter().enumerate() {
            let x = count(i).saturating_mul(cell).saturating_add(20);
            parts.push(format!(
                r##"<rect x="{x}" y="30" width="{box_width}" height="60" rx="8" fill="#4cc9ff" stroke="#fff"/>"##
            ));
            parts.push(label(x.saturating_add(box_width / 2), 65, value));
        }
        parts.push(close());
        parts.concat()
    }

    /// Draws the stack top to bottom, most recently pushed first.
    pub fn stack<T: Display>(&self, stack: &Stack<T>) -> String {
        let cell = self.config.stack_cell;
        let box_height = cell.saturating_sub(20);
        let height = cell
            .saturating_mul(count(stack.len()))
            .saturating_add(20)
            .max(120);

        let mut parts = vec![open(200, height)];
        for (i, value) in stack.iter().enumerate() {
            let y = count(i).saturating_mul(cell).saturating_add(20);
            parts.push(format!(
                r##"<rect x="40" y="{y}" width="120" height="{box_height}" rx="8" fill="#90f1a9" stroke="#fff"/>"##
            ));
            parts.push(label(100, y.saturating_add(box_height / 2 + 6), value));
        }
        parts.push(close());
        parts.concat()
    }

    /// Draws a tree from its snapshot, edges first and then nodes.
    pub fn tree<T: Display>(&self, slots: &[Slot<'_, T>], spread: Spread) -> String {
        let RenderConfig {
            tree_width,
            tree_height,
            node_radius,
            ..
        } = self.config;

        let mut parts = vec![open(tree_width, tree_height)];
        let fill = match spread {
            Spread::ByLevel => "#f8c537",
            Spread::Halving => "#ff6b6b",
        };

        let positions = self.layout(slots, spread);
        for (slot, &(x, y)) in slots.iter().zip(&positions) {
            for (child_x, child_y) in [slot.left, slot.right]
                .into_iter()
                .flatten()
                .filter_map(|id| positions.get(id))
            {
                parts.push(format!(
                    r##"<line x1="{x}" y1="{y}" x2="{child_x}" y2="{child_y}" stroke="#fff"/>"##
                ));
            }
        }
        for (slot, &(x, y)) in slots.iter().zip(&positions) {
            parts.push(format!(
                r##"<circle cx="{x}" cy="{y}" r="{node_radius}" fill="{fill}" stroke="#fff"/>"##
            ));
            parts.push(label(x, y + 6.0, slot.value));
        }

        parts.push(close());
        parts.concat()
    }

    /// Positions each slot, indexed by slot id. The root sits top centre and each child is
    /// offset left or right of its parent by the spread for its level. Each spread has its own
    /// top margin and level gap.
    fn layout<T>(&self, slots: &[Slot<'_, T>], spread: Spread) -> Vec<(f64, f64)> {
        let width = f64::from(self.config.tree_width);
        let (top, gap) = match spread {
            Spread::ByLevel => (self.config.tree_top, self.config.level_gap),
            Spread::Halving => (self.config.binary_top, self.config.binary_level_gap),
        };
        let (top, gap) = (f64::from(top), f64::from(gap));

        let mut positions = vec![(0.0, 0.0); slots.len()];
        let mut pending = Vec::new();
        if !slots.is_empty() {
            pending.push((0, width / 2.0, top, 1u32));
        }

        while let Some((id, x, y, level)) = pending.pop() {
            let Some(slot) = slots.get(id) else {
                continue;
            };
            positions[id] = (x, y);

            let offset = match spread {
                Spread::ByLevel => width * 0.4 / f64::from(level),
                Spread::Halving => (width / 5.0 / 2f64.powi(level as i32 - 1)).floor(),
            };
            if let Some(left) = slot.left {
                pending.push((left, x - offset, y + gap, level + 1));
            }
            if let Some(right) = slot.right {
                pending.push((right, x + offset, y + gap, level + 1));
            }
        }

        positions
    }
}

/// A length as a pixel multiplier, clamped rather than truncated.
fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn open(width: u32, height: u32) -> String {
    format!(r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}">"#)
}

fn close() -> String {
    "</svg>".to_string()
}

fn label<N: Display, T: Display>(x: N, y: N, value: T) -> String {
    format!(
        r##"<text x="{x}" y="{y}" font-size="18" text-anchor="middle" fill="#000">{}</text>"##,
        escape(&value.to_string())
    )
}
