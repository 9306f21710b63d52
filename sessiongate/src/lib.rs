// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! sessiongate - per-scope session context and command authorization gate
//!
//! This crate provides the two pieces a command processor consults before it
//! executes anything:
//! - A session context registered per execution scope (worker thread or
//!   logical session handle) carrying the current database, the authorizer
//!   binding and an optional pooled compute handle
//! - An authorization gate that turns command tokens into an authorizable
//!   object, asks the bound authorizer, and reports denials as values
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Command processor (caller)            │
//! └─────────────────────────────────────────┘
//!          │ current(scope)        │ authorize_command(..)
//!          ▼                       ▼
//! ┌──────────────────┐   ┌──────────────────┐
//! │  SessionManager  │──▶│ Authorization    │
//! │  SessionContext  │   │ gate             │
//! └──────────────────┘   └──────────────────┘
//!          │                       │
//!          ▼                       ▼
//!     ComputePool              Authorizer
//! ```
//!
//! # Example
//!
//! ```no_run
//! use sessiongate::{authorize_command, OperationType, ScopeId, SessionConfig, SessionManager};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = SessionManager::new();
//! let scope = ScopeId::current_thread();
//! manager.start(&scope, &SessionConfig::default());
//!
//! let session = manager.current(&scope)?;
//! let decision = authorize_command(Some(session.as_ref()), OperationType::Query, &["t1"])?;
//! assert!(decision.is_allowed());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod session;

pub use auth::{
    authorize_command, authorize_command_or_fail, AuthorizableObject, AuthorizationResult,
    Authorizer, CommandResponse, DenialCause, OperationType, PrivilegeObjectType,
};
pub use config::{SessionConfig, DEFAULT_DATABASE_NAME};
pub use error::{AuthorizationError, ConfigError, Result, SessionError};
pub use session::{
    ComputeHandle, ComputePool, ComputePoolError, ScopeId, SessionContext, SessionManager,
};
