//! VDI CLI library — exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;

use anyhow::Result;

use crate::application::services::session::Session;
use crate::commands::session::SessionEnd;
use crate::infra::catalog::SqlCatalog;
use crate::infra::config::Config;
use crate::infra::prompt::TermPrompt;
use crate::infra::provider::HttpProvider;
use crate::output::OutputContext;

/// Load configuration, bootstrap the session, and drive the prompt loop.
///
/// # Errors
///
/// Returns an error when configuration is missing, bootstrap fails against
/// any remote capability, or operator input becomes unreadable.
pub async fn run() -> Result<SessionEnd> {
    let config = Config::from_env()?;
    let provider = HttpProvider::new(&config)?;
    let catalog = SqlCatalog::new(&config);
    let prompt = TermPrompt::new();
    let ctx = OutputContext::new();

    let mut session = Session::new();
    session.bootstrap(&catalog, &provider).await?;

    commands::session::run(&ctx, &mut session, &provider, &provider, &prompt).await
}
