// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Authorization gate consulted before a command executes
//!
//! The gate wraps the command tokens into a single [`AuthorizableObject`],
//! asks the session's authorizer, and reports plugin and access-control
//! failures as [`AuthorizationResult::Denied`] instead of errors.
//!
//! When no session is supplied the gate allows everything. Harnesses that run
//! command processors without wiring up a session rely on this, so it is part
//! of the contract and must not be mistaken for a security boundary.

use super::object::{AuthorizableObject, OperationType};
use crate::error::AuthorizationError;
use crate::session::SessionContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a command was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DenialCause {
    /// The authorizer could not perform the check
    PluginError,
    /// The principal lacks the privilege
    AccessControlError,
}

impl fmt::Display for DenialCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialCause::PluginError => write!(f, "plugin error"),
            DenialCause::AccessControlError => write!(f, "access control error"),
        }
    }
}

/// Outcome of [`authorize_command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    Allowed,
    Denied { message: String, cause: DenialCause },
}

impl AuthorizationResult {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AuthorizationResult::Allowed)
    }

    pub fn denial_cause(&self) -> Option<DenialCause> {
        match self {
            AuthorizationResult::Allowed => None,
            AuthorizationResult::Denied { cause, .. } => Some(*cause),
        }
    }

    /// Convert into the response a command processor hands back
    pub fn into_response(self) -> CommandResponse {
        match self {
            AuthorizationResult::Allowed => CommandResponse::success(),
            AuthorizationResult::Denied { message, cause } => CommandResponse {
                response_code: 1,
                error_message: Some(message),
                cause: Some(cause),
            },
        }
    }
}

/// Uniform response of a command processor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub response_code: i32,
    pub error_message: Option<String>,
    pub cause: Option<DenialCause>,
}

impl CommandResponse {
    pub fn success() -> Self {
        Self {
            response_code: 0,
            error_message: None,
            cause: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == 0
    }
}

/// Authorize a command, reporting denials as a value
///
/// - `None` context: `Allowed`
/// - authorization mode disabled: `Allowed`, the authorizer is not consulted
/// - plugin or access-control failure: `Denied` with the matching cause
///
/// An `AuthorizationError::Internal` from the authorizer is returned as `Err`.
pub fn authorize_command<S: AsRef<str>>(
    context: Option<&SessionContext>,
    operation: OperationType,
    command: &[S],
) -> Result<AuthorizationResult, AuthorizationError> {
    let Some(session) = context else {
        return Ok(AuthorizationResult::Allowed);
    };
    if !session.is_authorization_mode_enabled() {
        return Ok(AuthorizationResult::Allowed);
    }

    match check_command(session, operation, command) {
        Ok(()) => Ok(AuthorizationResult::Allowed),
        Err(AuthorizationError::Plugin(message)) => {
            log::warn!(
                "Authorization plugin failed for {} in session {}: {}",
                operation,
                session.session_id(),
                message
            );
            Ok(AuthorizationResult::Denied {
                message,
                cause: DenialCause::PluginError,
            })
        }
        Err(AuthorizationError::AccessControl(message)) => {
            log::debug!(
                "Denied {} in session {}: {}",
                operation,
                session.session_id(),
                message
            );
            Ok(AuthorizationResult::Denied {
                message,
                cause: DenialCause::AccessControlError,
            })
        }
        Err(other) => Err(other),
    }
}

/// Authorize a command, returning the authorizer's failure unconverted
///
/// Same permissive defaults as [`authorize_command`] for a missing context or
/// disabled authorization mode.
pub fn authorize_command_or_fail<S: AsRef<str>>(
    context: Option<&SessionContext>,
    operation: OperationType,
    command: &[S],
) -> Result<(), AuthorizationError> {
    match context {
        Some(session) if session.is_authorization_mode_enabled() => {
            check_command(session, operation, command)
        }
        _ => Ok(()),
    }
}

fn check_command<S: AsRef<str>>(
    session: &SessionContext,
    operation: OperationType,
    command: &[S],
) -> Result<(), AuthorizationError> {
    let authorizer = session.authorizer().ok_or_else(|| {
        AuthorizationError::Plugin(format!(
            "No authorizer available for session {}",
            session.session_id()
        ))
    })?;

    let subject = AuthorizableObject::from_command(command.iter().map(|token| token.as_ref()));
    log::trace!("Checking {} on {}", operation, subject);
    authorizer.check_privileges(operation, std::slice::from_ref(&subject), &[])
}
