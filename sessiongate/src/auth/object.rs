// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Operation types and authorizable objects handed to authorizers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of operation a command performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// SELECT and other read queries
    Query,
    /// Filesystem command (`dfs ...`)
    Dfs,
    /// Add a session resource (`add jar ...`)
    Add,
    /// Delete a session resource (`delete jar ...`)
    Delete,
    /// Compile inline code (`compile ...`)
    Compile,
    /// Reset session configuration
    Reset,
    /// Set a session configuration variable
    Set,
    /// `USE <database>`
    SwitchDatabase,
    Explain,
    CreateTable,
    DropTable,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "QUERY",
            OperationType::Dfs => "DFS",
            OperationType::Add => "ADD",
            OperationType::Delete => "DELETE",
            OperationType::Compile => "COMPILE",
            OperationType::Reset => "RESET",
            OperationType::Set => "SET",
            OperationType::SwitchDatabase => "SWITCHDATABASE",
            OperationType::Explain => "EXPLAIN",
            OperationType::CreateTable => "CREATETABLE",
            OperationType::DropTable => "DROPTABLE",
        }
    }
}

impl std::str::FromStr for OperationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QUERY" | "SELECT" => Ok(OperationType::Query),
            "DFS" => Ok(OperationType::Dfs),
            "ADD" => Ok(OperationType::Add),
            "DELETE" => Ok(OperationType::Delete),
            "COMPILE" => Ok(OperationType::Compile),
            "RESET" => Ok(OperationType::Reset),
            "SET" => Ok(OperationType::Set),
            "SWITCHDATABASE" | "USE" => Ok(OperationType::SwitchDatabase),
            "EXPLAIN" => Ok(OperationType::Explain),
            "CREATETABLE" => Ok(OperationType::CreateTable),
            "DROPTABLE" => Ok(OperationType::DropTable),
            _ => Err(format!("Unknown operation type: {}", s)),
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an authorizable object refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivilegeObjectType {
    Database,
    TableOrView,
    Function,
    Uri,
    /// The raw parameters of a command, checked as a single subject
    CommandParams,
}

/// Subject of a privilege check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizableObject {
    object_type: PrivilegeObjectType,
    database: Option<String>,
    object_name: Option<String>,
    command_params: Vec<String>,
}

impl AuthorizableObject {
    /// Wrap a whole command token sequence as one opaque subject
    ///
    /// Tokens are kept in order and not interpreted.
    pub fn from_command<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            object_type: PrivilegeObjectType::CommandParams,
            database: None,
            object_name: None,
            command_params: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn database(name: impl Into<String>) -> Self {
        Self {
            object_type: PrivilegeObjectType::Database,
            database: Some(name.into()),
            object_name: None,
            command_params: Vec::new(),
        }
    }

    pub fn table(database: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            object_type: PrivilegeObjectType::TableOrView,
            database: Some(database.into()),
            object_name: Some(table.into()),
            command_params: Vec::new(),
        }
    }

    pub fn function(database: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            object_type: PrivilegeObjectType::Function,
            database: Some(database.into()),
            object_name: Some(function.into()),
            command_params: Vec::new(),
        }
    }

    /// A filesystem or storage location, e.g. the target of `dfs` or `add jar`
    pub fn uri(location: impl Into<String>) -> Self {
        Self {
            object_type: PrivilegeObjectType::Uri,
            database: None,
            object_name: Some(location.into()),
            command_params: Vec::new(),
        }
    }

    pub fn object_type(&self) -> PrivilegeObjectType {
        self.object_type
    }

    pub fn database_name(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    pub fn command_params(&self) -> &[String] {
        &self.command_params
    }
}

impl fmt::Display for AuthorizableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object_type {
            PrivilegeObjectType::CommandParams => {
                write!(f, "COMMAND_PARAMS [{}]", self.command_params.join(" "))
            }
            _ => {
                write!(f, "{:?}", self.object_type)?;
                if let Some(db) = &self.database {
                    write!(f, " {}", db)?;
                }
                match (&self.database, &self.object_name) {
                    (Some(_), Some(name)) => write!(f, ".{}", name)?,
                    (None, Some(name)) => write!(f, " {}", name)?,
                    _ => {}
                }
                Ok(())
            }
        }
    }
}
