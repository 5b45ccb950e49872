// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod deleter;
pub mod error;
pub mod kubernetes;

#[cfg(test)]
pub mod test_utils;
