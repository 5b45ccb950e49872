// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Failure of a single call against the cluster API
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unexpected HTTP status {code}: {message}")]
    UnexpectedStatus { code: u16, message: String },

    #[error("failed to encode namespace: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ClusterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClusterError::NotFound(_))
    }
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) => match resp.code {
                404 => ClusterError::NotFound(resp.message),
                409 => ClusterError::Conflict(resp.message),
                401 | 403 => ClusterError::Auth(resp.message),
                code => ClusterError::UnexpectedStatus {
                    code,
                    message: resp.message,
                },
            },
            kube::Error::Auth(e) => ClusterError::Auth(e.to_string()),
            kube::Error::InferConfig(e) => ClusterError::Auth(e.to_string()),
            kube::Error::SerdeError(e) => ClusterError::Encode(e),
            kube::Error::HyperError(e) => ClusterError::Connection(e.to_string()),
            kube::Error::Service(e) => ClusterError::Connection(e.to_string()),
            kube::Error::HttpError(e) => ClusterError::Connection(e.to_string()),
            other => ClusterError::Connection(other.to_string()),
        }
    }
}

/// Failure of one step of the namespace delete sequence
#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("failed to get namespace {name}")]
    Get {
        name: String,
        #[source]
        source: ClusterError,
    },

    #[error("failed to remove finalizers from namespace {name}")]
    RemoveFinalizers {
        name: String,
        #[source]
        source: ClusterError,
    },

    #[error("failed to delete namespace {name}")]
    Delete {
        name: String,
        #[source]
        source: ClusterError,
    },
}

impl DeleteError {
    /// The cluster error that aborted the sequence
    pub fn cause(&self) -> &ClusterError {
        match self {
            DeleteError::Get { source, .. }
            | DeleteError::RemoveFinalizers { source, .. }
            | DeleteError::Delete { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClusterError>;
