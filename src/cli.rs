// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line definition

use clap::{error::ErrorKind, CommandFactory};
use http::Uri;

use crate::constants::DEFAULT_PROXY_URL;

const AFTER_HELP: &str = "\
Finalizers are removed even when the namespace is not yet Terminating. The namespace \
controller then skips its content cleanup, so resources inside the namespace may be left \
behind. Only use this on namespaces that are stuck.";

#[derive(clap::Parser, Clone, Debug)]
#[clap(
    name = "kube-namespace-deleter",
    version,
    about = "Deletes Kubernetes Namespace stuck in Terminating State",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Name of the Namespace to Delete
    #[arg(short, long)]
    pub namespace: Option<String>,
    /// Set log level to debug
    #[arg(long, global = true)]
    pub debug: bool,
    /// Talk to the cluster through a local API proxy instead of ~/.kube/config
    #[arg(
        long,
        global = true,
        value_name = "URL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_PROXY_URL
    )]
    pub proxy: Option<Uri>,
}

#[derive(clap::Subcommand, Clone, Debug)]
pub enum Commands {
    /// Deletes Kubernetes Namespace stuck in Terminating State
    #[command(after_help = AFTER_HELP)]
    Delete {
        /// Name of the Namespace to Delete
        namespace: String,
    },
}

impl Cli {
    /// Reject a namespace given both through `--namespace` and the `delete` subcommand
    pub fn validate(self) -> Result<Self, clap::Error> {
        if self.namespace.is_some() && self.command.is_some() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "the argument '--namespace <NAMESPACE>' cannot be used with the 'delete' subcommand",
            ));
        }
        Ok(self)
    }

    /// The namespace named by the `delete` subcommand or the `--namespace` flag
    pub fn target(&self) -> Option<&str> {
        match &self.command {
            Some(Commands::Delete { namespace }) => Some(namespace.as_str()),
            None => self.namespace.as_deref().filter(|n| !n.is_empty()),
        }
    }
}
