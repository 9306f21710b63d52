// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Session manager keyed by execution scope
//!
//! Replaces an ambient "current session" slot with an explicit registry: the
//! caller names its scope on every lookup, and each scope sees only the
//! context it registered.

use super::compute::ComputePool;
use super::context::SessionContext;
use super::scope::ScopeId;
use crate::auth::Authorizer;
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of the current session per execution scope
///
/// Owns the authorizer and compute pool; contexts it starts reference the
/// authorizer weakly and share the pool.
///
/// Registrations are only removed by [`SessionManager::detach`]. A scope that
/// ends (a worker thread exiting, a connection closing) must detach its
/// session, otherwise the entry stays in the map for the manager's lifetime.
pub struct SessionManager {
    sessions: RwLock<HashMap<ScopeId, Arc<SessionContext>>>,
    authorizer: Option<Arc<dyn Authorizer>>,
    compute_pool: Option<Arc<dyn ComputePool>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            authorizer: None,
            compute_pool: None,
        }
    }

    /// Install the authorizer bound to every session started afterwards
    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Install the pool used for prewarming
    pub fn with_compute_pool(mut self, pool: Arc<dyn ComputePool>) -> Self {
        self.compute_pool = Some(pool);
        self
    }

    /// Create a fresh session and register it as current for `scope`
    ///
    /// A context already registered for the scope is replaced but not
    /// closed; it keeps any compute handle it holds.
    pub fn start(&self, scope: &ScopeId, config: &SessionConfig) -> Arc<SessionContext> {
        let mut context = SessionContext::new(scope.clone(), config);
        if let Some(authorizer) = &self.authorizer {
            context = context.with_authorizer(authorizer);
        }
        if let Some(pool) = &self.compute_pool {
            context = context.with_compute_pool(Arc::clone(pool));
        }
        context.prewarm();

        let context = Arc::new(context);
        let previous = self
            .sessions
            .write()
            .insert(scope.clone(), Arc::clone(&context));

        match previous {
            Some(previous) if previous.has_compute_handle() => {
                log::warn!(
                    "Session {} replaced in scope '{}' while still holding a compute handle",
                    previous.session_id(),
                    scope
                );
            }
            Some(previous) => {
                log::debug!(
                    "Session {} replaced in scope '{}'",
                    previous.session_id(),
                    scope
                );
            }
            None => {}
        }
        log::debug!(
            "Started session {} in scope '{}' (authorization mode: {})",
            context.session_id(),
            scope,
            context.is_authorization_mode_enabled()
        );

        context
    }

    /// Current session for `scope`
    pub fn current(&self, scope: &ScopeId) -> Result<Arc<SessionContext>> {
        self.sessions
            .read()
            .get(scope)
            .cloned()
            .ok_or_else(|| SessionError::NoActiveSession {
                scope: scope.clone(),
            })
    }

    /// Remove the registration for `scope` without closing the context
    ///
    /// Call this when the scope ends; `close` the returned context to give
    /// back its compute handle.
    pub fn detach(&self, scope: &ScopeId) -> Option<Arc<SessionContext>> {
        let detached = self.sessions.write().remove(scope);
        if let Some(context) = &detached {
            log::debug!("Detached session {} from scope '{}'", context.session_id(), scope);
        }
        detached
    }

    pub fn is_active(&self, scope: &ScopeId) -> bool {
        self.sessions.read().contains_key(scope)
    }

    /// Number of scopes with a registered session
    pub fn active_scopes(&self) -> usize {
        self.sessions.read().len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("active_scopes", &self.active_scopes())
            .field("authorizer_installed", &self.authorizer.is_some())
            .field("compute_pool_installed", &self.compute_pool.is_some())
            .finish()
    }
}
