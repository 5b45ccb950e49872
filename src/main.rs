// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::error;

use kube_namespace_deleter::app::{self, Outcome};
use kube_namespace_deleter::cli::Cli;
use kube_namespace_deleter::config::Config;
use kube_namespace_deleter::error::ClusterError;
use kube_namespace_deleter::kubernetes::{create_client, KubeAccessor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse().validate().unwrap_or_else(|e| e.exit());
    let config = Config::from_cli(&cli);

    // Initialize tracing
    app::init_logging(config.debug);

    let result = app::execute(&config, |backend| async move {
        Ok::<_, ClusterError>(KubeAccessor::new(create_client(&backend).await?))
    })
    .await;

    match result {
        Ok(Outcome::Help) => {
            if let Err(e) = Cli::command().print_help() {
                error!("{:#}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(Outcome::Deleted(name)) => {
            println!("namespace {} deleted successfully", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
