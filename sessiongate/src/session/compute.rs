// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Pooled compute resources
//!
//! The pool lives outside this crate. Sessions only acquire a handle when
//! prewarming and give it back on close.

use thiserror::Error;
use uuid::Uuid;

/// Opaque handle to compute units held by one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeHandle {
    id: String,
    units: usize,
}

impl ComputeHandle {
    pub fn new(units: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            units,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of compute units behind this handle
    pub fn units(&self) -> usize {
        self.units
    }
}

/// Errors a compute pool may report when asked for resources
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputePoolError {
    #[error("Compute pool unavailable: {0}")]
    Unavailable(String),

    #[error("Compute pool exhausted: requested {requested} units")]
    Exhausted { requested: usize },
}

/// Provider of pooled compute resources
pub trait ComputePool: Send + Sync {
    /// Acquire `pool_size` units as a single handle
    fn acquire(&self, pool_size: usize) -> Result<ComputeHandle, ComputePoolError>;

    /// Return a handle previously obtained from `acquire`
    fn release(&self, handle: ComputeHandle);
}
