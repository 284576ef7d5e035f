//! Command-line surface for administering a LiteLLM proxy.

use std::env;
use std::ffi::OsString;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use litellm_admin_models::MemberRole;
use uuid::Uuid;

use crate::client::{AdminClient, CliError, CliResult, SessionConfig, insecure_from_env};
use crate::commands::audit::{handle_all_teams, handle_spend};
use crate::commands::health::{handle_health, handle_models};
use crate::commands::keys::{
    handle_key_create, handle_key_delete, handle_key_info, handle_key_list, handle_key_update,
};
use crate::commands::teams::{
    handle_member_add, handle_member_remove, handle_team_create, handle_team_delete,
    handle_team_info, handle_team_list, handle_team_update,
};
use crate::commands::users::{handle_user_create, handle_user_info, handle_user_list};
use crate::confirm::{Confirm, TerminalPrompt};
use crate::logging::init_logging;

/// Parses CLI arguments, executes the requested command, and reports
/// failures on stderr. Returns the process exit code.
pub async fn run() -> i32 {
    let args: Vec<OsString> = env::args_os().collect();
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(&err, &args),
    };

    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("warning: {err:#}");
    }

    let mut prompt = TerminalPrompt;
    match execute(cli, insecure_from_env(), &mut prompt).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

/// Print a clap parse failure and map it to an exit code.
///
/// Help, version, and unknown subcommands are informational and exit 0;
/// every other parse failure exits 1.
fn report_parse_error(err: &clap::Error, args: &[OsString]) -> i32 {
    let _ = err.print();
    let code = parse_error_exit_code(err.kind());
    if err.kind() == ErrorKind::InvalidSubcommand {
        let resource = help_resource(err, args);
        if let Err(help_err) = print_help(resource.as_deref()) {
            eprintln!("error: {}", help_err.display_message());
        }
    }
    code
}

/// Resource owning an unknown action, such as `team` for `team frobnicate`.
fn help_resource(err: &clap::Error, args: &[OsString]) -> Option<String> {
    let Some(ContextValue::String(invalid)) = err.get(ContextKind::InvalidSubcommand) else {
        return None;
    };
    let position = args
        .iter()
        .position(|arg| arg.to_str() == Some(invalid.as_str()))?;
    let command = Cli::command();
    args.get(1..position)?
        .iter()
        .rev()
        .filter_map(|arg| arg.to_str())
        .find(|arg| {
            command
                .find_subcommand(arg)
                .is_some_and(clap::Command::has_subcommands)
        })
        .map(str::to_string)
}

const fn parse_error_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::InvalidSubcommand => 0,
        _ => 1,
    }
}

/// Print usage for the whole tool, or for one resource when `resource` names it.
fn print_help(resource: Option<&str>) -> CliResult<()> {
    let mut command = Cli::command();
    command.build();
    let mut target = resource
        .and_then(|name| command.find_subcommand(name).cloned())
        .unwrap_or(command);
    target
        .print_help()
        .map_err(|err| CliError::failure(anyhow!("failed to print help: {err}")))
}

pub(crate) async fn execute(
    cli: Cli,
    env_insecure: bool,
    prompt: &mut dyn Confirm,
) -> CliResult<()> {
    let Some(command) = cli.command else {
        return print_help(None);
    };
    if let Some(resource) = command.missing_subcommand() {
        return print_help(Some(resource));
    }

    let config = SessionConfig::new(
        cli.base_url.as_deref(),
        cli.master_key.as_deref(),
        !(cli.insecure || env_insecure),
        cli.output,
        Uuid::new_v4().to_string(),
    )?;
    let client = AdminClient::new(&config)?;
    tracing::debug!(
        command = command_label(&command),
        request_id = %config.request_id,
        "dispatching command"
    );

    dispatch(command, &client, config.output, prompt).await
}

async fn dispatch(
    command: Command,
    client: &AdminClient,
    output: OutputFormat,
    prompt: &mut dyn Confirm,
) -> CliResult<()> {
    match command {
        Command::Team { command: None }
        | Command::Key { command: None }
        | Command::User { command: None }
        | Command::Audit { command: None } => Ok(()),
        Command::Team {
            command: Some(team),
        } => match team {
            TeamCommand::List => handle_team_list(client, output).await,
            TeamCommand::Info(args) => handle_team_info(client, args).await,
            TeamCommand::Create(args) => handle_team_create(client, args, output).await,
            TeamCommand::Update(args) => handle_team_update(client, args).await,
            TeamCommand::Delete(args) => handle_team_delete(client, args, prompt).await,
            TeamCommand::AddMember(args) => {
                handle_member_add(client, &args.team_id, &args.user_id, args.role.into()).await
            }
            TeamCommand::RemoveMember(args) => {
                handle_member_remove(client, &args.team_id, &args.user_id).await
            }
        },
        Command::Key { command: Some(key) } => match key {
            KeyCommand::List(args) => handle_key_list(client, args, output).await,
            KeyCommand::Info(args) => handle_key_info(client, args).await,
            KeyCommand::Create(args) => handle_key_create(client, args, output).await,
            KeyCommand::Update(args) => handle_key_update(client, args).await,
            KeyCommand::Delete(args) => handle_key_delete(client, args, prompt).await,
        },
        Command::User {
            command: Some(user),
        } => match user {
            UserCommand::List => handle_user_list(client).await,
            UserCommand::Info(args) => handle_user_info(client, args).await,
            UserCommand::Create(args) => handle_user_create(client, args).await,
            UserCommand::AddToTeam(args) => {
                handle_member_add(client, &args.team_id, &args.user_id, args.role.into()).await
            }
            UserCommand::RemoveFromTeam(args) => {
                handle_member_remove(client, &args.team_id, &args.user_id).await
            }
        },
        Command::Audit {
            command: Some(audit),
        } => match audit {
            AuditCommand::Spend(args) => handle_spend(client, args).await,
            AuditCommand::AllTeams => handle_all_teams(client, output).await,
        },
        Command::Health => handle_health(client).await,
        Command::Models => handle_models(client, output).await,
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "litellm-admin",
    version,
    about = "Administrative CLI for a LiteLLM proxy"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "LITELLM_API_BASE",
        help = "Base URL of the LiteLLM proxy"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = "LITELLM_MASTER_KEY",
        hide_env_values = true,
        help = "Master key used as the bearer credential"
    )]
    pub(crate) master_key: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render listings"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 'k',
        long,
        global = true,
        help = "Skip TLS certificate verification (also LITELLM_INSECURE=1)"
    )]
    pub(crate) insecure: bool,
    #[arg(short = 'v', long, global = true, help = "Emit debug diagnostics on stderr")]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Manage teams and their members
    Team {
        #[command(subcommand)]
        command: Option<TeamCommand>,
    },
    /// Manage virtual API keys
    Key {
        #[command(subcommand)]
        command: Option<KeyCommand>,
    },
    /// Manage internal users
    User {
        #[command(subcommand)]
        command: Option<UserCommand>,
    },
    /// Spend reporting
    Audit {
        #[command(subcommand)]
        command: Option<AuditCommand>,
    },
    /// Check proxy health
    Health,
    /// List model identifiers available on the proxy
    Models,
}

impl Command {
    /// Resource name when a resource was given without an action.
    const fn missing_subcommand(&self) -> Option<&'static str> {
        match self {
            Self::Team { command: None } => Some("team"),
            Self::Key { command: None } => Some("key"),
            Self::User { command: None } => Some("user"),
            Self::Audit { command: None } => Some("audit"),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum TeamCommand {
    /// List all teams
    List,
    /// Show one team
    Info(TeamInfoArgs),
    /// Create a team
    Create(TeamCreateArgs),
    /// Update a team's alias, budget, or models
    Update(TeamUpdateArgs),
    /// Delete a team
    Delete(TeamDeleteArgs),
    /// Add a user to a team
    AddMember(TeamMemberArgs),
    /// Remove a user from a team
    RemoveMember(TeamMemberRemoveArgs),
}

#[derive(Args, Debug)]
pub(crate) struct TeamInfoArgs {
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
}

#[derive(Args, Debug)]
pub(crate) struct TeamCreateArgs {
    #[arg(help = "Human-readable team alias")]
    pub(crate) alias: String,
    #[arg(long, help = "Budget cap in USD")]
    pub(crate) budget: Option<f64>,
    #[arg(long, value_delimiter = ',', help = "Comma-separated allowed models")]
    pub(crate) models: Vec<String>,
    #[arg(long, help = "Budget reset period, for example 30d")]
    pub(crate) budget_duration: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct TeamUpdateArgs {
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
    #[arg(long)]
    pub(crate) alias: Option<String>,
    #[arg(long)]
    pub(crate) budget: Option<f64>,
    #[arg(long, value_delimiter = ',')]
    pub(crate) models: Option<Vec<String>>,
    #[arg(long)]
    pub(crate) budget_duration: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct TeamDeleteArgs {
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
    #[arg(short = 'f', long, help = "Delete without asking for confirmation")]
    pub(crate) force: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TeamMemberArgs {
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
    #[arg(help = "User identifier")]
    pub(crate) user_id: String,
    #[arg(long, value_enum, default_value_t = RoleArg::User)]
    pub(crate) role: RoleArg,
}

#[derive(Args, Debug)]
pub(crate) struct TeamMemberRemoveArgs {
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
    #[arg(help = "User identifier")]
    pub(crate) user_id: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum KeyCommand {
    /// List keys, optionally for one team
    List(KeyListArgs),
    /// Show one key
    Info(KeyInfoArgs),
    /// Generate a new key
    Create(KeyCreateArgs),
    /// Update a key
    Update(KeyUpdateArgs),
    /// Delete a key
    Delete(KeyDeleteArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct KeyListArgs {
    #[arg(long, help = "Only list keys owned by this team")]
    pub(crate) team: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct KeyInfoArgs {
    #[arg(help = "Key value")]
    pub(crate) key: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct KeyCreateArgs {
    #[arg(long, help = "Team that owns the key")]
    pub(crate) team: Option<String>,
    #[arg(long)]
    pub(crate) alias: Option<String>,
    #[arg(long, help = "Budget cap in USD")]
    pub(crate) budget: Option<f64>,
    #[arg(long, value_delimiter = ',', help = "Comma-separated allowed models")]
    pub(crate) models: Vec<String>,
    #[arg(long, help = "User that owns the key")]
    pub(crate) user: Option<String>,
    #[arg(long, help = "Validity period, for example 30d")]
    pub(crate) duration: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct KeyUpdateArgs {
    #[arg(help = "Key value")]
    pub(crate) key: String,
    #[arg(long)]
    pub(crate) team: Option<String>,
    #[arg(long)]
    pub(crate) alias: Option<String>,
    #[arg(long)]
    pub(crate) budget: Option<f64>,
    #[arg(long, value_delimiter = ',')]
    pub(crate) models: Option<Vec<String>>,
    #[arg(long)]
    pub(crate) duration: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct KeyDeleteArgs {
    #[arg(help = "Key value")]
    pub(crate) key: String,
    #[arg(short = 'f', long, help = "Delete without asking for confirmation")]
    pub(crate) force: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum UserCommand {
    /// List internal users
    List,
    /// Show one user
    Info(UserInfoArgs),
    /// Create a user
    Create(UserCreateArgs),
    /// Add a user to a team
    AddToTeam(UserTeamArgs),
    /// Remove a user from a team
    RemoveFromTeam(UserTeamRemoveArgs),
}

#[derive(Args, Debug)]
pub(crate) struct UserInfoArgs {
    #[arg(help = "User identifier")]
    pub(crate) user_id: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct UserCreateArgs {
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long, help = "Explicit user identifier")]
    pub(crate) user_id: Option<String>,
    #[arg(long, help = "Team the user joins on creation")]
    pub(crate) team: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct UserTeamArgs {
    #[arg(help = "User identifier")]
    pub(crate) user_id: String,
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
    #[arg(long, value_enum, default_value_t = RoleArg::User)]
    pub(crate) role: RoleArg,
}

#[derive(Args, Debug)]
pub(crate) struct UserTeamRemoveArgs {
    #[arg(help = "User identifier")]
    pub(crate) user_id: String,
    #[arg(help = "Team identifier")]
    pub(crate) team_id: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum AuditCommand {
    /// Spend logs, optionally filtered by date range and team
    Spend(SpendArgs),
    /// Spend for every team, highest spender first
    AllTeams,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SpendArgs {
    #[arg(long, value_parser = parse_date, help = "Start date (YYYY-MM-DD)")]
    pub(crate) start: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date, help = "End date (YYYY-MM-DD)")]
    pub(crate) end: Option<NaiveDate>,
    #[arg(long, help = "Only report spend for this team")]
    pub(crate) team: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub(crate) enum RoleArg {
    User,
    Admin,
}

impl From<RoleArg> for MemberRole {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::User => Self::User,
            RoleArg::Admin => Self::Admin,
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|err| format!("invalid date '{input}' (expected YYYY-MM-DD): {err}"))
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Team { command: None } => "team",
        Command::Team {
            command: Some(team),
        } => match team {
            TeamCommand::List => "team_list",
            TeamCommand::Info(_) => "team_info",
            TeamCommand::Create(_) => "team_create",
            TeamCommand::Update(_) => "team_update",
            TeamCommand::Delete(_) => "team_delete",
            TeamCommand::AddMember(_) => "team_add_member",
            TeamCommand::RemoveMember(_) => "team_remove_member",
        },
        Command::Key { command: None } => "key",
        Command::Key { command: Some(key) } => match key {
            KeyCommand::List(_) => "key_list",
            KeyCommand::Info(_) => "key_info",
            KeyCommand::Create(_) => "key_create",
            KeyCommand::Update(_) => "key_update",
            KeyCommand::Delete(_) => "key_delete",
        },
        Command::User { command: None } => "user",
        Command::User {
            command: Some(user),
        } => match user {
            UserCommand::List => "user_list",
            UserCommand::Info(_) => "user_info",
            UserCommand::Create(_) => "user_create",
            UserCommand::AddToTeam(_) => "user_add_to_team",
            UserCommand::RemoveFromTeam(_) => "user_remove_from_team",
        },
        Command::Audit { command: None } => "audit",
        Command::Audit {
            command: Some(audit),
        } => match audit {
            AuditCommand::Spend(_) => "audit_spend",
            AuditCommand::AllTeams => "audit_all_teams",
        },
        Command::Health => "health",
        Command::Models => "models",
    }
}
