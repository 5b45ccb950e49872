// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and namespace access.

pub mod accessor;
pub mod client;

pub use accessor::{ClusterAccessor, KubeAccessor};
pub use client::create_client;
