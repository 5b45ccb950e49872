// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace read, finalize and delete calls against the cluster

use crate::constants::FINALIZE_SUBRESOURCE;
use crate::error::{ClusterError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// The cluster operations needed to force a namespace out of Terminating
#[async_trait]
pub trait ClusterAccessor {
    /// Fetch the current state of a namespace
    async fn get_namespace(&self, name: &str) -> Result<Namespace>;

    /// Send the namespace, as given, to its `finalize` sub-resource
    async fn clear_finalizers(&self, namespace: &Namespace) -> Result<Namespace>;

    /// Delete the namespace; succeeds if it is already gone
    async fn delete_namespace(&self, namespace: &Namespace) -> Result<()>;
}

/// [`ClusterAccessor`] backed by a kube client
#[derive(Clone)]
pub struct KubeAccessor {
    namespaces: Api<Namespace>,
}

impl KubeAccessor {
    pub fn new(client: Client) -> Self {
        Self {
            namespaces: Api::all(client),
        }
    }
}

#[async_trait]
impl ClusterAccessor for KubeAccessor {
    #[instrument(skip(self))]
    async fn get_namespace(&self, name: &str) -> Result<Namespace> {
        let namespace = self.namespaces.get(name).await?;
        debug!(
            "Namespace {} has resourceVersion {:?}, phase {:?}",
            name,
            namespace.resource_version(),
            namespace.status.as_ref().and_then(|s| s.phase.as_deref())
        );
        Ok(namespace)
    }

    #[instrument(skip_all, fields(namespace = %namespace.name_any()))]
    async fn clear_finalizers(&self, namespace: &Namespace) -> Result<Namespace> {
        let name = namespace.name_any();
        let body = serde_json::to_vec(namespace)?;
        debug!("PUT {} for namespace {}: {} bytes", FINALIZE_SUBRESOURCE, name, body.len());

        let updated = self
            .namespaces
            .replace_subresource(FINALIZE_SUBRESOURCE, &name, &PostParams::default(), body)
            .await?;

        info!("Finalizers of namespace {} cleared", name);
        Ok(updated)
    }

    #[instrument(skip_all, fields(namespace = %namespace.name_any()))]
    async fn delete_namespace(&self, namespace: &Namespace) -> Result<()> {
        let name = namespace.name_any();

        match self.namespaces.delete(&name, &DeleteParams::default()).await {
            Ok(_) => {
                info!("Delete of namespace {} accepted", name);
                Ok(())
            }
            Err(kube::Error::Api(err)) if err.code == 404 => {
                debug!("Namespace {} already gone", name);
                Ok(())
            }
            Err(e) => Err(ClusterError::from(e)),
        }
    }
}
