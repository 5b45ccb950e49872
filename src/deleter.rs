// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Forces a namespace out of Terminating: get, strip finalizers, finalize, delete.

use crate::error::DeleteError;
use crate::kubernetes::ClusterAccessor;
use k8s_openapi::api::core::v1::Namespace;
use tracing::{debug, info, instrument, warn};

pub struct NamespaceDeleter<A> {
    accessor: A,
}

impl<A: ClusterAccessor> NamespaceDeleter<A> {
    pub fn new(accessor: A) -> Self {
        Self { accessor }
    }

    /// Run the full sequence for one namespace, stopping at the first failing step
    #[instrument(skip(self))]
    pub async fn run(&self, name: &str) -> Result<(), DeleteError> {
        let mut namespace =
            self.accessor
                .get_namespace(name)
                .await
                .map_err(|source| DeleteError::Get {
                    name: name.to_string(),
                    source,
                })?;

        if namespace.metadata.deletion_timestamp.is_none() {
            warn!("Namespace {} is not terminating, it will be deleted", name);
        }

        let removed = strip_finalizers(&mut namespace);
        info!("Removing finalizers {:?} from namespace {}", removed, name);

        self.accessor
            .clear_finalizers(&namespace)
            .await
            .map_err(|source| DeleteError::RemoveFinalizers {
                name: name.to_string(),
                source,
            })?;

        self.accessor
            .delete_namespace(&namespace)
            .await
            .map_err(|source| DeleteError::Delete {
                name: name.to_string(),
                source,
            })?;

        debug!("Namespace {} done", name);
        Ok(())
    }
}

/// Empty both finalizer lists of a namespace, returning the entries removed
pub fn strip_finalizers(namespace: &mut Namespace) -> Vec<String> {
    let mut removed = namespace
        .spec
        .as_mut()
        .and_then(|spec| spec.finalizers.replace(Vec::new()))
        .unwrap_or_default();

    if let Some(meta_finalizers) = namespace.metadata.finalizers.as_mut() {
        removed.append(meta_finalizers);
    }

    removed
}
