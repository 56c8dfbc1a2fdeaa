//! Settings assembly and command routing

use std::env;
use std::process::ExitCode;

use tracing::debug;

use crate::application::ports::{ConfigStore, ExternalNotifier};
use crate::application::{DispatchContext, Dispatcher};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::notification::{
    OutcomeTemplate, Urgency, DEFAULT_FAILURE_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
};
use crate::domain::protocol::ProtocolVariant;
use crate::infrastructure::{
    create_external_notifier, OutputTarget, ProcessEnvironment, TerminalWriter, XdgConfigStore,
};

use super::action_cmd;
use super::args::{Cli, Commands};
use super::diagnose_cmd::handle_diagnose;
use super::info_cmd::handle_info;
use super::presenter::Presenter;
use super::send_cmd::handle_send;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables read on top of the config file
pub const ENV_FORCE_PROTOCOL: &str = "TERMNOTIFY_FORCE_PROTOCOL";
pub const ENV_ENABLE_FALLBACK: &str = "TERMNOTIFY_ENABLE_FALLBACK";
pub const ENV_DEFAULT_TITLE: &str = "TERMNOTIFY_DEFAULT_TITLE";
pub const ENV_DEFAULT_URGENCY: &str = "TERMNOTIFY_DEFAULT_URGENCY";
pub const ENV_OUTPUT: &str = "TERMNOTIFY_OUTPUT";

/// Dispatcher wired to the real process environment and terminal
pub type CliDispatcher = Dispatcher<ProcessEnvironment, TerminalWriter, Box<dyn ExternalNotifier>>;

/// Validated settings for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub context: DispatchContext,
    pub output: OutputTarget,
    pub app_name: String,
    pub template: OutcomeTemplate,
}

impl Settings {
    /// Strictly parse a merged config. Bad values are reported, not ignored.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let forced_protocol = config
            .force_protocol
            .as_deref()
            .map(|s| {
                s.parse::<ProtocolVariant>()
                    .map_err(|e| validation("force_protocol", e.to_string()))
            })
            .transpose()?;

        let default_urgency = config
            .default_urgency
            .as_deref()
            .map(|s| {
                s.parse::<Urgency>()
                    .map_err(|e| validation("default_urgency", e.to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let output = config.output_or_default().parse::<OutputTarget>()?;

        Ok(Self {
            context: DispatchContext {
                forced_protocol,
                fallback_enabled: config.enable_fallback_or_default(),
                default_urgency,
                default_title: Some(config.default_title_or_default().to_string()),
                kind_titles: config.kind_titles_or_default(),
            },
            output,
            app_name: config.app_name_or_default().to_string(),
            template: OutcomeTemplate {
                success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
                failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
                success_title: config.success_title_or_default().to_string(),
                failure_title: config.failure_title_or_default().to_string(),
            },
        })
    }
}

fn validation(key: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message,
    }
}

/// Parse a boolean config value
pub fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}

/// Config layer from `TERMNOTIFY_*` variables
pub fn env_config() -> Result<AppConfig, ConfigError> {
    env_config_from(|name| env::var(name).ok())
}

/// Config layer from an arbitrary variable lookup. Empty values are unset.
pub fn env_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

    let enable_fallback = match get(ENV_ENABLE_FALLBACK) {
        Some(v) => Some(
            parse_bool(&v)
                .map_err(|_| validation(ENV_ENABLE_FALLBACK, format!("'{}' is not a boolean", v)))?,
        ),
        None => None,
    };

    Ok(AppConfig {
        default_title: get(ENV_DEFAULT_TITLE),
        force_protocol: get(ENV_FORCE_PROTOCOL),
        enable_fallback,
        default_urgency: get(ENV_DEFAULT_URGENCY),
        output: get(ENV_OUTPUT),
        ..Default::default()
    })
}

/// Config layer from global command-line flags
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        force_protocol: cli.protocol.map(|p| p.to_string()),
        enable_fallback: if cli.no_fallback { Some(false) } else { None },
        default_urgency: cli.urgency.map(|u| u.to_string()),
        output: cli.output.map(|o| o.to_string()),
        ..Default::default()
    }
}

/// Merge: defaults < file < env < cli
pub fn load_merged_config<S: ConfigStore>(
    store: &S,
    env_config: AppConfig,
    cli_config: AppConfig,
) -> Result<AppConfig, ConfigError> {
    let file_config = store.load()?;

    Ok(AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config))
}

/// Build the dispatcher for the real terminal
pub fn build_dispatcher(settings: &Settings) -> CliDispatcher {
    let notifier = create_external_notifier(&settings.app_name);
    Dispatcher::with_context(
        ProcessEnvironment::new(),
        TerminalWriter::new(settings.output),
        notifier,
        settings.context.clone(),
    )
}

/// Run every command except `config`
pub fn run_notify_command(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new();

    let config = env_config().and_then(|env_config| {
        load_merged_config(&XdgConfigStore::new(), env_config, cli_config(&cli))
    });
    let settings = match config.and_then(|c| Settings::from_config(&c)) {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };
    debug!(context = ?settings.context, output = %settings.output, "settings resolved");

    let mut dispatcher = build_dispatcher(&settings);

    let code = match cli.command {
        Commands::Send(args) => handle_send(&mut dispatcher, &args, &settings.template, &presenter),
        Commands::Info { json } => handle_info(&dispatcher, json, &presenter),
        Commands::Diagnose { skip_interactive } => {
            handle_diagnose(&mut dispatcher, skip_interactive, &mut presenter)
        }
        Commands::Progress { value, state } => {
            action_cmd::handle_progress(&mut dispatcher, value, state, &presenter)
        }
        Commands::Bell => action_cmd::handle_bell(&mut dispatcher, &presenter),
        Commands::Close { id } => action_cmd::handle_close(&mut dispatcher, &id, &presenter),
        Commands::Link { url, text, id } => action_cmd::handle_link(
            &dispatcher,
            &url,
            text.as_deref(),
            id.as_deref(),
            &presenter,
        ),
        Commands::Attention {
            fireworks,
            steal_focus,
        } => action_cmd::handle_attention(&mut dispatcher, fireworks, steal_focus, &presenter),
        Commands::Config { .. } => EXIT_USAGE_ERROR,
    };

    ExitCode::from(code)
}
