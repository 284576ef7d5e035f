#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Administrative CLI for a LiteLLM proxy.
//!
//! Layout:
//! - `cli.rs`: argument parsing and command dispatch
//! - `client.rs`: session config, errors, and the bearer-authenticated transport
//! - `api/`: resource operations, one method per admin action
//! - `commands/`: command handlers grouped by resource
//! - `confirm.rs`: confirmation prompts for destructive commands
//! - `output.rs`: renderers and formatting helpers
//! - `logging.rs`: tracing subscriber setup
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod api;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod confirm;
pub(crate) mod logging;
pub(crate) mod output;

pub use cli::run;
