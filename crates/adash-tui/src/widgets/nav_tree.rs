//! Nav tree widget — collapsible tree of views and category leaves in the
//! left pane.
//!
//! Each top-level node is a view (orders, users, documents, notifications);
//! its children are the view's category values plus the `all` leaf. Applying
//! a leaf is the App shell's job — this widget only owns cursor movement,
//! expansion state, and the `●` marker on each view's active filter.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible list.
//! - `→`/`l` expands the focused node; `←`/`h` collapses it.
//! - `Enter`/`Space` on a leaf applies that category filter (handled by the
//!   App shell via [`NavTreeState::cursor_id`]).

use crate::event::{AppEvent, Direction};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use tracing;

// ---------------------------------------------------------------------------
// Tree node
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Stable identifier, `view` for parents and `view/value` for leaves.
    pub id: String,
    /// Human-readable display label.
    pub label: String,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            expanded: true,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }
}

// ---------------------------------------------------------------------------
// Tree state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct NavTreeState {
    pub nodes: Vec<TreeNode>,
    /// Index into the currently-visible (flattened) list.
    pub cursor: usize,
    /// Leaf ids carrying the `●` marker — one per view, the view's applied
    /// filter.
    pub active: Vec<String>,
}

impl NavTreeState {
    /// Return the id of the node at the cursor, if any.
    pub fn cursor_id(&self) -> Option<String> {
        self.visible()
            .into_iter()
            .nth(self.cursor)
            .map(|(_, n)| n.id.clone())
    }

    /// Is the node at the cursor a leaf?
    pub fn cursor_is_leaf(&self) -> bool {
        self.visible()
            .into_iter()
            .nth(self.cursor)
            .map(|(_, n)| n.children.is_empty())
            .unwrap_or(false)
    }

    /// Flatten the tree into `(depth, &node)` pairs, respecting expanded state.
    pub fn visible(&self) -> Vec<(usize, &TreeNode)> {
        flatten(&self.nodes, 0)
    }

    /// Replace the active marker for `view` with `leaf_id`.
    pub fn set_active(&mut self, view: &str, leaf_id: String) {
        let prefix = format!("{view}/");
        self.active.retain(|id| !id.starts_with(&prefix));
        self.active.push(leaf_id);
    }

    /// Handle an [`AppEvent`], mutating state as appropriate.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "nav: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.visible().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "nav: cursor down");
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "nav: expand");
                    set_expanded(&mut self.nodes, &id, true);
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "nav: collapse");
                    set_expanded(&mut self.nodes, &id, false);
                    self.clamp_cursor();
                }
            }
            // Enter on a parent toggles expansion; Enter on a leaf is the
            // App shell's cue to apply the filter, so it never reaches here.
            AppEvent::Enter => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "nav: toggle expand");
                    toggle_expanded(&mut self.nodes, &id);
                    self.clamp_cursor();
                }
            }
            _ => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

// ---------------------------------------------------------------------------
// Recursive tree helpers
// ---------------------------------------------------------------------------

fn flatten(nodes: &[TreeNode], depth: usize) -> Vec<(usize, &TreeNode)> {
    let mut out = Vec::new();
    for node in nodes {
        out.push((depth, node));
        if node.expanded {
            out.extend(flatten(&node.children, depth + 1));
        }
    }
    out
}

/// Set the `expanded` flag on the node with `id`. Returns `true` if found.
fn set_expanded(nodes: &mut [TreeNode], id: &str, expanded: bool) -> bool {
    for node in nodes.iter_mut() {
        if node.id == id {
            node.expanded = expanded;
            return true;
        }
        if set_expanded(&mut node.children, id, expanded) {
            return true;
        }
    }
    false
}

/// Flip the `expanded` flag on the node with `id`. Returns `true` if found.
fn toggle_expanded(nodes: &mut [TreeNode], id: &str) -> bool {
    for node in nodes.iter_mut() {
        if node.id == id {
            node.expanded = !node.expanded;
            return true;
        }
        if toggle_expanded(&mut node.children, id) {
            return true;
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct NavTree<'a> {
    state: &'a NavTreeState,
    focused: bool,
    theme: &'a crate::theme::Theme,
}

impl<'a> NavTree<'a> {
    pub fn new(state: &'a NavTreeState, focused: bool, theme: &'a crate::theme::Theme) -> Self {
        Self {
            state,
            focused,
            theme,
        }
    }
}

impl Widget for NavTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Views").border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let visible = self.state.visible();

        let items: Vec<ListItem> = visible
            .iter()
            .map(|(depth, node)| {
                let indent = "  ".repeat(*depth);
                let expand = if node.children.is_empty() {
                    "  "
                } else if node.expanded {
                    "▼ "
                } else {
                    "▶ "
                };
                let marker = if self.state.active.contains(&node.id) {
                    " ●"
                } else {
                    ""
                };
                ListItem::new(Line::from(format!(
                    "{}{}{}{}",
                    indent, expand, node.label, marker
                )))
            })
            .collect();

        let list =
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
