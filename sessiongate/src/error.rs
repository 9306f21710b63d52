// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for session and authorization operations

use crate::session::ScopeId;
use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by the session lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `current` was called for a scope that never started a session
    #[error("No active session for scope '{scope}'")]
    NoActiveSession { scope: ScopeId },

    /// The current database cannot be set to an empty name
    #[error("Database name must not be empty")]
    EmptyDatabaseName,
}

/// Failures reported by an authorizer plugin
///
/// Only `Plugin` and `AccessControl` are translated into denials by the gate.
/// `Internal` always propagates to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The authorizer itself failed (misconfigured or unreachable)
    #[error("Authorization plugin error: {0}")]
    Plugin(String),

    /// The principal lacks the privilege for the requested operation
    #[error("Permission denied: {0}")]
    AccessControl(String),

    /// Any other authorizer failure
    #[error("Authorizer failure: {0}")]
    Internal(String),
}

impl AuthorizationError {
    /// The message the authorizer attached to the failure
    pub fn message(&self) -> &str {
        match self {
            AuthorizationError::Plugin(msg)
            | AuthorizationError::AccessControl(msg)
            | AuthorizationError::Internal(msg) => msg,
        }
    }
}

/// Errors raised while loading a [`crate::SessionConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but holds an invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_active_session_names_scope() {
        let err = SessionError::NoActiveSession {
            scope: ScopeId::named("worker-7"),
        };
        assert_eq!(err.to_string(), "No active session for scope 'worker-7'");
    }

    #[test]
    fn test_authorization_error_message_is_raw() {
        let err = AuthorizationError::AccessControl("user bob lacks SELECT on t1".to_string());
        assert_eq!(err.message(), "user bob lacks SELECT on t1");
        assert_eq!(err.to_string(), "Permission denied: user bob lacks SELECT on t1");
    }
}
