// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Session context carried through command execution

use super::compute::{ComputeHandle, ComputePool};
use super::scope::ScopeId;
use crate::auth::Authorizer;
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, Weak};
use uuid::Uuid;

/// Mutable per-scope session record
///
/// Shared as `Arc<SessionContext>`; the mutable fields sit behind locks so
/// every lookup from the owning scope observes the same state. The authorizer
/// is held weakly: its lifecycle belongs to whoever installed it.
pub struct SessionContext {
    session_id: String,
    scope: ScopeId,
    authorization_mode_enabled: bool,
    authorizer: Option<Weak<dyn Authorizer>>,
    current_database: RwLock<String>,
    compute_pool: Option<Arc<dyn ComputePool>>,
    compute_handle: Mutex<Option<ComputeHandle>>,
    prewarm_enabled: bool,
    prewarm_pool_size: usize,
}

impl SessionContext {
    /// Build a context from configuration without registering it anywhere
    ///
    /// No resources are acquired here; see [`SessionContext::prewarm`].
    pub fn new(scope: ScopeId, config: &SessionConfig) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            scope,
            authorization_mode_enabled: config.authorization_mode_enabled,
            authorizer: None,
            current_database: RwLock::new(config.effective_default_database().to_string()),
            compute_pool: None,
            compute_handle: Mutex::new(None),
            prewarm_enabled: config.prewarm_enabled,
            prewarm_pool_size: config.prewarm_pool_size,
        }
    }

    /// Bind the authorizer consulted by the gate
    pub fn with_authorizer(mut self, authorizer: &Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(Arc::downgrade(authorizer));
        self
    }

    /// Bind the pool used for prewarming and released on close
    pub fn with_compute_pool(mut self, pool: Arc<dyn ComputePool>) -> Self {
        self.compute_pool = Some(pool);
        self
    }

    /// Eagerly acquire compute units if prewarming is enabled
    ///
    /// Failures are logged and swallowed; a session without a prewarmed
    /// handle is still fully usable.
    pub fn prewarm(&self) {
        if !self.prewarm_enabled {
            return;
        }
        let Some(pool) = &self.compute_pool else {
            log::warn!(
                "Prewarm enabled for session {} but no compute pool is configured",
                self.session_id
            );
            return;
        };
        if self.prewarm_pool_size == 0 {
            log::debug!(
                "Prewarm pool size is 0 for session {}, nothing to acquire",
                self.session_id
            );
            return;
        }

        match pool.acquire(self.prewarm_pool_size) {
            Ok(handle) => {
                log::debug!(
                    "Prewarmed {} compute units for session {} (handle {})",
                    handle.units(),
                    self.session_id,
                    handle.id()
                );
                let previous = self.compute_handle.lock().replace(handle);
                if let Some(previous) = previous {
                    pool.release(previous);
                }
            }
            Err(e) => {
                log::warn!("Prewarm failed for session {}: {}", self.session_id, e);
            }
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Scope this context was created for
    pub fn scope(&self) -> &ScopeId {
        &self.scope
    }

    pub fn is_authorization_mode_enabled(&self) -> bool {
        self.authorization_mode_enabled
    }

    /// Live authorizer, if one was bound and is still alive
    pub fn authorizer(&self) -> Option<Arc<dyn Authorizer>> {
        self.authorizer.as_ref().and_then(|weak| weak.upgrade())
    }

    pub fn current_database(&self) -> String {
        self.current_database.read().clone()
    }

    /// Switch the current database
    ///
    /// Blank names are rejected; no existence check is made against any
    /// catalog.
    pub fn set_current_database(&self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SessionError::EmptyDatabaseName);
        }
        log::debug!("Session {} switching database to '{}'", self.session_id, name);
        *self.current_database.write() = name;
        Ok(())
    }

    pub fn prewarm_enabled(&self) -> bool {
        self.prewarm_enabled
    }

    pub fn prewarm_pool_size(&self) -> usize {
        self.prewarm_pool_size
    }

    pub fn has_compute_handle(&self) -> bool {
        self.compute_handle.lock().is_some()
    }

    pub fn compute_handle(&self) -> Option<ComputeHandle> {
        self.compute_handle.lock().clone()
    }

    /// Release the pooled compute handle
    ///
    /// Idempotent. The context stays registered and usable afterwards.
    pub fn close(&self) {
        let handle = self.compute_handle.lock().take();
        let Some(handle) = handle else {
            return;
        };

        log::debug!(
            "Closing session {}: releasing compute handle {}",
            self.session_id,
            handle.id()
        );
        if let Some(pool) = &self.compute_pool {
            pool.release(handle);
        }
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("session_id", &self.session_id)
            .field("scope", &self.scope)
            .field("authorization_mode_enabled", &self.authorization_mode_enabled)
            .field("authorizer_bound", &self.authorizer().is_some())
            .field("current_database", &*self.current_database.read())
            .field("compute_handle", &*self.compute_handle.lock())
            .field("prewarm_enabled", &self.prewarm_enabled)
            .field("prewarm_pool_size", &self.prewarm_pool_size)
            .finish()
    }
}
