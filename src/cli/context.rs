use crate::{
    cli::{commands, output, registry::CommandRegistry},
    config::{Config, ConfigManager},
    errors::{CliError, ExpenseError},
    store::RecordStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
    OneShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` to see available commands.")]
    UnknownCommand(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("exit requested")]
    ExitRequested,
}

/// State shared by every command handler: the loaded records, the effective
/// configuration and the command table.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    store: RecordStore,
    config: Config,
    source: String,
    registry: CommandRegistry,
}

impl ShellContext {
    /// Loads configuration from the application data directory and builds the
    /// record store it points at.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Self::with_config(mode, config)
    }

    pub fn with_config(mode: CliMode, config: Config) -> Result<Self, CliError> {
        if !config.color {
            colored::control::set_override(false);
        }
        let source = config.record_source();
        let store = RecordStore::from_source(source.as_ref())?;
        tracing::info!(
            records = store.len(),
            source = %source.describe(),
            "expense records loaded"
        );
        Ok(Self {
            mode,
            running: true,
            store,
            config,
            source: source.describe(),
            registry: commands::registry(),
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        "expense> ".to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            return Err(CommandError::UnknownCommand(raw.to_string()));
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Prints a failed command and keeps the shell alive.
    pub(crate) fn report_error(&self, err: &CommandError) {
        tracing::warn!(mode = ?self.mode, error = %err, "command failed");
        match err {
            CommandError::UnknownCommand(input) => {
                output::warning(err);
                self.suggest_command(input);
            }
            _ => output::error(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        if let Some(best) = self.registry.suggest(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }
}
