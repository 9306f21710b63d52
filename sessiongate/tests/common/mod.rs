// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Shared fakes for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use sessiongate::{
    AuthorizableObject, AuthorizationError, Authorizer, ComputeHandle, ComputePool,
    ComputePoolError, OperationType,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What the fake authorizer answers with
#[derive(Debug, Clone)]
pub enum Verdict {
    Allow,
    DenyAccess(String),
    PluginFailure(String),
    Internal(String),
}

/// Authorizer that records every call and answers with a fixed verdict
pub struct RecordingAuthorizer {
    verdict: Verdict,
    calls: Mutex<Vec<(OperationType, Vec<AuthorizableObject>, Vec<AuthorizableObject>)>>,
}

impl RecordingAuthorizer {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(
        &self,
    ) -> Option<(OperationType, Vec<AuthorizableObject>, Vec<AuthorizableObject>)> {
        self.calls.lock().last().cloned()
    }
}

impl Authorizer for RecordingAuthorizer {
    fn check_privileges(
        &self,
        operation: OperationType,
        inputs: &[AuthorizableObject],
        outputs: &[AuthorizableObject],
    ) -> Result<(), AuthorizationError> {
        self.calls
            .lock()
            .push((operation, inputs.to_vec(), outputs.to_vec()));
        match &self.verdict {
            Verdict::Allow => Ok(()),
            Verdict::DenyAccess(msg) => Err(AuthorizationError::AccessControl(msg.clone())),
            Verdict::PluginFailure(msg) => Err(AuthorizationError::Plugin(msg.clone())),
            Verdict::Internal(msg) => Err(AuthorizationError::Internal(msg.clone())),
        }
    }
}

/// Compute pool that counts acquisitions and releases
#[derive(Default)]
pub struct CountingPool {
    fail: bool,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl CountingPool {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl ComputePool for CountingPool {
    fn acquire(&self, pool_size: usize) -> Result<ComputeHandle, ComputePoolError> {
        if self.fail {
            return Err(ComputePoolError::Exhausted {
                requested: pool_size,
            });
        }
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(ComputeHandle::new(pool_size))
    }

    fn release(&self, _handle: ComputeHandle) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
