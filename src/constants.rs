// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Sub-resource of a Namespace that accepts finalizer updates
pub const FINALIZE_SUBRESOURCE: &str = "finalize";

/// Address `kubectl proxy` listens on by default
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8001";

/// Location of the kube-config file, relative to the user's home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
}
