//! Text command parsing.

/// Supported bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Price,
    /// Raw arguments; validated by the router so it can pick the reply.
    Alert {
        args: Vec<String>,
    },
    Monitor,
    Stop,
    Status,
}

/// Parse error for command messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a command.
///
/// A `@botname` suffix on the command is ignored. Command names are
/// case-sensitive.
pub fn parse_command(text: &str) -> Result<Command, CommandParseError> {
    let mut parts = text.split_whitespace();
    let Some(raw_command) = parts.next() else {
        return Err(CommandParseError::NotACommand);
    };
    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/start" => Ok(Command::Start),
        "/help" => Ok(Command::Help),
        "/price" => Ok(Command::Price),
        "/alert" => Ok(Command::Alert {
            args: parts.map(str::to_string).collect(),
        }),
        "/monitor" => Ok(Command::Monitor),
        "/stop" => Ok(Command::Stop),
        "/status" => Ok(Command::Status),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Command menu entries as (command, description).
#[must_use]
pub fn command_menu() -> Vec<(&'static str, &'static str)> {
    vec![
        ("price", "Get current silver spot price"),
        ("alert", "Set price alerts: /alert <high> <low>"),
        ("monitor", "Start periodic price updates"),
        ("stop", "Stop periodic updates"),
        ("status", "Check your alert settings"),
        ("help", "Show all commands"),
    ]
}
