// ABOUTME: Protocol history container with bounded undo/redo and change listeners
// ABOUTME: Each committed edit is a snapshot; listeners see the protocol and its warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Protocol State
//!
//! Mutators are pure, so history is simply a list of protocol snapshots and a
//! cursor into it. Committing after an undo discards the redo tail. The
//! oldest snapshot is dropped once [`MAX_HISTORY`] is exceeded.

use oit_core::models::{Protocol, Warning};
use oit_engine::validate_protocol;
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Snapshots retained for undo, including the current one
pub const MAX_HISTORY: usize = 50;

/// Receives the current protocol and its warnings after every change
pub trait ProtocolListener: Send {
    /// Handle a change
    fn on_change(&self, protocol: &Protocol, warnings: &[Warning]);
}

impl<F> ProtocolListener for F
where
    F: Fn(&Protocol, &[Warning]) + Send,
{
    fn on_change(&self, protocol: &Protocol, warnings: &[Warning]) {
        self(protocol, warnings);
    }
}

/// Handle returned by [`ProtocolState::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Current protocol plus undo/redo history
pub struct ProtocolState {
    history: VecDeque<Protocol>,
    cursor: usize,
    listeners: Vec<(SubscriptionId, Box<dyn ProtocolListener>)>,
    next_subscription: u64,
}

impl fmt::Debug for ProtocolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolState")
            .field("history_len", &self.history.len())
            .field("cursor", &self.cursor)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ProtocolState {
    /// Start a history at `protocol`
    #[must_use]
    pub fn new(protocol: Protocol) -> Self {
        Self {
            history: VecDeque::from([protocol]),
            cursor: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Protocol at the cursor
    #[must_use]
    pub fn get(&self) -> &Protocol {
        // The history is never empty and the cursor always points into it
        &self.history[self.cursor]
    }

    /// Commit a new protocol, discarding any redo tail
    pub fn set(&mut self, protocol: Protocol) {
        self.history.truncate(self.cursor + 1);
        self.history.push_back(protocol);
        while self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        self.cursor = self.history.len() - 1;
        debug!(history_len = self.history.len(), "Protocol committed");
        self.notify();
    }

    /// Run a mutator on the current protocol and commit the result
    ///
    /// Returns whether anything changed; a mutator that rejected its input
    /// leaves no history entry.
    pub fn apply<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&Protocol) -> Protocol,
    {
        let next = edit(self.get());
        if &next == self.get() {
            return false;
        }
        self.set(next);
        true
    }

    /// Step back one snapshot; returns whether the cursor moved
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        self.notify();
        true
    }

    /// Step forward one snapshot; returns whether the cursor moved
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        self.notify();
        true
    }

    /// Whether an earlier snapshot exists
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a later snapshot exists
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Number of retained snapshots
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Validator warnings for the current protocol
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        validate_protocol(self.get())
    }

    /// Register a listener called after every change
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: ProtocolListener + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let protocol = self.get();
        let warnings = validate_protocol(protocol);
        for (_, listener) in &self.listeners {
            listener.on_change(protocol, &warnings);
        }
    }
}
