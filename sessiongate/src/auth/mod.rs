// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command authorization (authorizer plugin seam, subjects, gate)

pub mod authorizer;
pub mod gate;
pub mod object;

pub use authorizer::Authorizer;
pub use gate::{
    authorize_command, authorize_command_or_fail, AuthorizationResult, CommandResponse,
    DenialCause,
};
pub use object::{AuthorizableObject, OperationType, PrivilegeObjectType};
