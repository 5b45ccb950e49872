// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from kube-config or a local API proxy

use crate::config::{default_kubeconfig_path, Backend};
use crate::error::{ClusterError, Result};
use http::Uri;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client for the configured backend
pub async fn create_client(backend: &Backend) -> Result<Client> {
    match backend {
        Backend::Kubeconfig => {
            create_client_from_kubeconfig_file(&default_kubeconfig_path()?).await
        }
        Backend::Proxy(url) => create_proxy_client(url),
    }
}

/// Create a client from the current context of a kube-config file
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn create_client_from_kubeconfig_file(path: &Path) -> Result<Client> {
    info!("Loading kube-config from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        ClusterError::Auth(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    create_client_from_kubeconfig(&kubeconfig).await
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| ClusterError::Auth(format!("Failed to parse kubeconfig: {}", e)))?;

    debug!(
        "Using context {}",
        kubeconfig_parsed
            .current_context
            .as_deref()
            .unwrap_or("<none>")
    );

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| ClusterError::Auth(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| ClusterError::Auth(format!("Failed to create client: {}", e)))
}

/// Create a client that talks plain HTTP to a local API proxy
pub fn create_proxy_client(url: &Uri) -> Result<Client> {
    info!("Using API proxy at {}", url);

    Client::try_from(KConfig::new(url.clone()))
        .map_err(|e| ClusterError::Connection(format!("Failed to create proxy client: {}", e)))
}
