//! Accordion expansion state for catalog views
//!
//! At most one entity is expanded at a time. Expanding another entity
//! implicitly collapses the previous one. `focus` is used when following a
//! cross-reference: it always expands the target and leaves a scroll request
//! for the renderer to pick up once the expanded entity has been drawn.

/// Which entity, if any, is expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded(String),
}

/// Request to bring an expanded entity into view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
}

/// Expansion state plus the pending scroll request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    state: ExpansionState,
    pending_scroll: Option<ScrollRequest>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    /// The expanded entity id, if any
    pub fn expanded_id(&self) -> Option<&str> {
        match &self.state {
            ExpansionState::Collapsed => None,
            ExpansionState::Expanded(id) => Some(id),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id() == Some(id)
    }

    /// Collapse if `id` is expanded, otherwise expand it
    pub fn toggle(&mut self, id: &str) {
        self.state = if self.is_expanded(id) {
            ExpansionState::Collapsed
        } else {
            ExpansionState::Expanded(id.to_string())
        };
        // a scroll is only valid for the entity that is still expanded
        if let Some(scroll) = &self.pending_scroll {
            if !self.is_expanded(&scroll.target) {
                self.pending_scroll = None;
            }
        }
        tracing::trace!(id, state = ?self.state, "expansion_toggle");
    }

    /// Expand `id` unconditionally and schedule a scroll to it
    pub fn focus(&mut self, id: &str) {
        self.state = ExpansionState::Expanded(id.to_string());
        self.pending_scroll = Some(ScrollRequest {
            target: id.to_string(),
        });
        tracing::trace!(id, "expansion_focus");
    }

    /// Collapse everything and drop any pending scroll
    pub fn collapse(&mut self) {
        self.state = ExpansionState::Collapsed;
        self.pending_scroll = None;
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Hand the pending scroll request to the renderer, once
    ///
    /// Call after the expanded entity has been rendered.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}
