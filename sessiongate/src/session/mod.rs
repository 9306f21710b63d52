// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Session management for command execution
//!
//! This module provides session management functionality for:
//! - Per-scope session contexts with a current database
//! - Explicit scope registration (one current session per scope)
//! - Authorizer binding consulted by the authorization gate
//! - Optional prewarmed compute handles released on close
//!
//! Features supported:
//! - Session start, lookup, detach
//! - Current database switching
//! - Scope isolation between worker threads and logical sessions

pub mod compute;
pub mod context;
pub mod manager;
pub mod scope;

pub use compute::{ComputeHandle, ComputePool, ComputePoolError};
pub use context::SessionContext;
pub use manager::SessionManager;
pub use scope::ScopeId;
