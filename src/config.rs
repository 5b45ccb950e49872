// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use http::Uri;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::constants::kubeconfig;
use crate::error::{ClusterError, Result};

/// How the cluster is reached
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    /// Credentials and endpoint from `~/.kube/config`, resolved when connecting
    Kubeconfig,
    /// Plain HTTP through a local API proxy such as `kubectl proxy`
    Proxy(Uri),
}

/// Invocation configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub debug: bool,
    /// Namespace to delete, `None` when no name was given
    pub namespace: Option<String>,
    pub backend: Backend,
}

impl Config {
    /// Resolve configuration from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let backend = match &cli.proxy {
            Some(url) => Backend::Proxy(url.clone()),
            None => Backend::Kubeconfig,
        };

        Config {
            debug: cli.debug,
            namespace: cli.target().map(str::to_string),
            backend,
        }
    }
}

/// `~/.kube/config`
pub fn default_kubeconfig_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ClusterError::Auth("failed to get user home-directory".to_string()))?;
    Ok(home.join(kubeconfig::DIR).join(kubeconfig::FILE))
}
