// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pluggable authorizer interface

use super::object::{AuthorizableObject, OperationType};
use crate::error::AuthorizationError;

/// A pluggable privilege check
///
/// Implementations decide whether the session's principal may run
/// `operation` reading `inputs` and writing `outputs`. How privileges are
/// modelled is entirely up to the implementation.
///
/// Return `AuthorizationError::AccessControl` when the principal lacks a
/// privilege and `AuthorizationError::Plugin` when the check itself could not
/// be carried out. Anything reported as `Internal` is treated as fatal by the
/// gate.
pub trait Authorizer: Send + Sync {
    fn check_privileges(
        &self,
        operation: OperationType,
        inputs: &[AuthorizableObject],
        outputs: &[AuthorizableObject],
    ) -> Result<(), AuthorizationError>;
}
