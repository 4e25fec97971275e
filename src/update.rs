//! Update batching: coalesce a run of mutations into one render request.
//!
//! Every multi-step mutation is bracketed by [`UpdateTracker::start`] and
//! [`UpdateTracker::end`]. Brackets nest; only the outermost `end` produces
//! [`RenderRequest`]s, which the screen drains and acts on. A node marked with
//! [`UpdateTracker::set_full_rerender`] during the bracket is re-laid-out, not
//! just repainted.

use std::collections::HashSet;

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// RenderRequest
// ---------------------------------------------------------------------------

/// What the render scheduler must do once a batch closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderRequest {
    /// Repaint the subtree rooted at this node with the current layout.
    ReRender(NodeId),
    /// Re-run layout for the subtree rooted at this node, then repaint.
    FullReRender(NodeId),
}

impl RenderRequest {
    /// The node this request applies to.
    pub fn node(self) -> NodeId {
        match self {
            RenderRequest::ReRender(id) | RenderRequest::FullReRender(id) => id,
        }
    }

    /// Whether this request requires a layout pass.
    pub fn needs_layout(self) -> bool {
        matches!(self, RenderRequest::FullReRender(_))
    }
}

// ---------------------------------------------------------------------------
// UpdateToken
// ---------------------------------------------------------------------------

/// Returned by [`UpdateTracker::start`]; must be handed back to
/// [`UpdateTracker::end`].
#[must_use = "an update bracket must be closed with `end`"]
#[derive(Debug, PartialEq, Eq)]
pub struct UpdateToken {
    node: NodeId,
    outermost: bool,
}

impl UpdateToken {
    /// The node the bracket was opened on.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Whether closing this token will flush render requests.
    pub fn is_outermost(&self) -> bool {
        self.outermost
    }
}

// ---------------------------------------------------------------------------
// UpdateTracker
// ---------------------------------------------------------------------------

/// Depth-counted update brackets plus the queue of pending render requests.
#[derive(Debug, Default)]
pub struct UpdateTracker {
    depth: usize,
    full_rerender: Vec<NodeId>,
    pending: Vec<RenderRequest>,
}

impl UpdateTracker {
    /// Create a tracker with no open bracket and nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an update bracket on `node`.
    pub fn start(&mut self, node: NodeId) -> UpdateToken {
        self.depth += 1;
        UpdateToken {
            node,
            outermost: self.depth == 1,
        }
    }

    /// Close the bracket opened by `token`.
    ///
    /// When this closes the outermost bracket, every node marked for full
    /// re-render yields a [`RenderRequest::FullReRender`]; if the token's own
    /// node was not marked it yields a [`RenderRequest::ReRender`].
    pub fn end(&mut self, token: UpdateToken) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return;
        }
        let marked = std::mem::take(&mut self.full_rerender);
        if !marked.contains(&token.node) {
            self.push(RenderRequest::ReRender(token.node));
        }
        for node in marked {
            self.push(RenderRequest::FullReRender(node));
        }
        log::trace!("update batch on {:?} closed, {} request(s) pending", token.node, self.pending.len());
    }

    /// Mark `node` so the enclosing batch closes with a layout pass.
    ///
    /// Outside any bracket the request is queued immediately.
    pub fn set_full_rerender(&mut self, node: NodeId) {
        if self.depth == 0 {
            self.push(RenderRequest::FullReRender(node));
        } else if !self.full_rerender.contains(&node) {
            self.full_rerender.push(node);
        }
    }

    /// Current bracket nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether a bracket is open.
    pub fn is_updating(&self) -> bool {
        self.depth > 0
    }

    /// Whether any render requests are waiting.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain and return all pending render requests, in order of creation.
    pub fn take_pending(&mut self) -> Vec<RenderRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Forget requests that refer to nodes no longer in `live`.
    pub fn retain_nodes(&mut self, live: &HashSet<NodeId>) {
        self.pending.retain(|r| live.contains(&r.node()));
        self.full_rerender.retain(|n| live.contains(n));
    }

    fn push(&mut self, request: RenderRequest) {
        if !self.pending.contains(&request) {
            self.pending.push(request);
        }
    }
}
