//! Output renderers and formatting helpers for CLI commands.
//!
//! Renderers build the complete text before writing anything, so a failure
//! never leaves a half-printed table behind.

use anyhow::anyhow;
use litellm_admin_models::{KeyListEntry, KeyListResponse, Team, TeamSpendSummary};
use serde::Serialize;
use serde_json::Value;

use crate::api::keys::KEY_LIST_PATH;
use crate::api::teams::TEAM_LIST_PATH;
use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult, decode};

/// Characters of a key token shown in listings.
pub(crate) const TOKEN_PREFIX_CHARS: usize = 20;
const ELLIPSIS: &str = "...";
const UNLIMITED: &str = "unlimited";
const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = to_json(value)?;
    println!("{text}");
    Ok(())
}

/// Team listing as printed. JSON mode echoes the server body untouched.
pub(crate) fn team_list_text(listing: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(listing)?)),
        OutputFormat::Table => {
            let teams: Vec<Team> = decode(TEAM_LIST_PATH, listing)?;
            Ok(team_table(&teams))
        }
    }
}

/// Key listing as printed. JSON mode echoes the server body untouched.
pub(crate) fn key_list_text(listing: &Value, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", to_json(listing)?)),
        OutputFormat::Table => {
            let listing: KeyListResponse = decode(KEY_LIST_PATH, listing)?;
            Ok(key_table(listing.keys.as_deref().unwrap_or_default()))
        }
    }
}

pub(crate) fn render_team_spend(rows: &[TeamSpendSummary], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(rows),
        OutputFormat::Table => {
            print!("{}", team_spend_table(rows));
            Ok(())
        }
    }
}

pub(crate) fn render_models(ids: &[String], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => render_json(ids),
        OutputFormat::Table => {
            for id in ids {
                println!("{id}");
            }
            Ok(())
        }
    }
}

#[must_use]
pub(crate) fn team_table(teams: &[Team]) -> String {
    let mut out = format!(
        "{:<40} {:<20} {:<12} {:<12}\n",
        "TEAM ID", "ALIAS", "BUDGET", "SPEND"
    );
    out.push_str(&rule(84));
    for team in teams {
        out.push_str(&format!(
            "{:<40} {:<20} {:<12} {:<12}\n",
            team.team_id.as_deref().unwrap_or(NOT_AVAILABLE),
            team.team_alias.as_deref().unwrap_or(NOT_AVAILABLE),
            format_currency(team.max_budget),
            format_currency(Some(team.spend.unwrap_or(0.0))),
        ));
    }
    out
}

#[must_use]
pub(crate) fn key_table(keys: &[KeyListEntry]) -> String {
    let mut out = format!(
        "{:<25} {:<20} {:<20} {:<12}\n",
        "KEY (truncated)", "ALIAS", "TEAM", "BUDGET"
    );
    out.push_str(&rule(77));
    for key in keys {
        out.push_str(&format!(
            "{:<25} {:<20} {:<20} {:<12}\n",
            redact_token(key.token()),
            key.key_alias().unwrap_or(NOT_AVAILABLE),
            truncate(key.team_id().unwrap_or(NOT_AVAILABLE), 18),
            format_currency(key.max_budget()),
        ));
    }
    out
}

#[must_use]
pub(crate) fn team_spend_table(rows: &[TeamSpendSummary]) -> String {
    let mut out = format!(
        "{:<30} {:<12} {:<12} {:<12}\n",
        "TEAM", "SPEND", "BUDGET", "REMAINING"
    );
    out.push_str(&rule(66));
    for row in rows {
        out.push_str(&format!(
            "{:<30} {:<12} {:<12} {:<12}\n",
            truncate(&row.team_alias, 28),
            format_currency(Some(row.spend)),
            format_currency(row.max_budget),
            format_currency(row.budget_remaining),
        ));
    }
    out
}

/// Dollar amount with two decimals, or `unlimited` when unset.
#[must_use]
pub(crate) fn format_currency(value: Option<f64>) -> String {
    value.map_or_else(|| UNLIMITED.to_string(), |amount| format!("${amount:.2}"))
}

/// Token prefix followed by an ellipsis; the full token is never returned.
#[must_use]
pub(crate) fn redact_token(token: &str) -> String {
    format!("{}{ELLIPSIS}", truncate(token, TOKEN_PREFIX_CHARS))
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

fn rule(width: usize) -> String {
    format!("{}\n", "-".repeat(width))
}
