// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Entry point shared by the binary and its tests

use anyhow::{Context, Result};
use std::future::Future;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};
use crate::deleter::NamespaceDeleter;
use crate::error::ClusterError;
use crate::kubernetes::ClusterAccessor;

/// What an invocation ended up doing
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// No namespace was named, usage should be shown
    Help,
    Deleted(String),
}

/// Initialize tracing on stderr; `--debug` overrides `RUST_LOG`
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if debug {
        debug!("running in debug mode");
    }
}

/// Delete the configured namespace, connecting to the cluster only when one is named
pub async fn execute<A, F, Fut>(config: &Config, connect: F) -> Result<Outcome>
where
    A: ClusterAccessor,
    F: FnOnce(Backend) -> Fut,
    Fut: Future<Output = std::result::Result<A, ClusterError>>,
{
    let Some(name) = config.namespace.as_deref() else {
        return Ok(Outcome::Help);
    };

    let accessor = connect(config.backend.clone())
        .await
        .context("failed to create cluster client")?;
    info!("Connected to Kubernetes cluster");

    NamespaceDeleter::new(accessor).run(name).await?;

    Ok(Outcome::Deleted(name.to_string()))
}
