// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Execution scope identifiers

use std::fmt;
use std::thread::ThreadId;
use uuid::Uuid;

/// Unit of isolation a session is registered under
///
/// A scope is either a worker thread or a logical session handle. At most one
/// session context is current per scope. The variants never compare equal to
/// each other, so a named handle cannot alias a thread scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeId {
    /// A worker thread
    Thread(ThreadId),
    /// A logical session minted by [`ScopeId::new`]
    Logical(Uuid),
    /// A caller-chosen handle (connection id, request id, ...)
    Named(String),
}

impl ScopeId {
    /// Fresh logical-session scope
    pub fn new() -> Self {
        ScopeId::Logical(Uuid::new_v4())
    }

    /// Scope for a caller-chosen handle
    pub fn named(name: impl Into<String>) -> Self {
        ScopeId::Named(name.into())
    }

    /// Scope of the calling thread
    ///
    /// Sessions registered under a thread scope outlive the thread; detach
    /// them before the worker exits.
    pub fn current_thread() -> Self {
        ScopeId::Thread(std::thread::current().id())
    }

    pub fn is_thread(&self) -> bool {
        matches!(self, ScopeId::Thread(_))
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeId::Thread(id) => write!(f, "thread:{:?}", id),
            ScopeId::Logical(id) => write!(f, "{}", id),
            ScopeId::Named(name) => write!(f, "{}", name),
        }
    }
}
