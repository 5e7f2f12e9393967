//! Line protocol of the interactive shell.
//!
//! Lines starting with `:` are commands; anything else is appended to the
//! buffer. `::` at the start escapes a literal leading colon.

use sojson_core::{IndentSize, Msg, OperationKind};
use thiserror::Error;

pub const HELP: &str = "\
Lines without a leading ':' are appended to the buffer.
  :process :format :unescape :validate   select the operation
  :indent <0|2|4|8>                      set the indentation
  :run (:r)                              send the buffer to the service
  :clear (:l)                            empty the buffer
  :paste                                 replace the buffer with the clipboard
  :copy                                  copy the buffer
  :download                              save the buffer to a timestamped file
  :dismiss (:esc)                        hide the current notice
  :show                                  print the buffer
  :help                                  show this help
  :quit (:q)                             leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Append(String),
    Command(ShellCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Select(OperationKind),
    Indent(IndentSize),
    Run,
    Clear,
    Paste,
    Copy,
    Download,
    Dismiss,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// The controller message for commands handled by the state machine.
    pub fn to_msg(self) -> Option<Msg> {
        match self {
            ShellCommand::Select(kind) => Some(Msg::OperationSelected(kind)),
            ShellCommand::Indent(indent) => Some(Msg::IndentSelected(indent)),
            ShellCommand::Run => Some(Msg::ProcessClicked),
            ShellCommand::Clear => Some(Msg::ClearClicked),
            ShellCommand::Paste => Some(Msg::PasteClicked),
            ShellCommand::Copy => Some(Msg::CopyClicked),
            ShellCommand::Download => Some(Msg::DownloadClicked),
            ShellCommand::Dismiss => Some(Msg::DismissClicked),
            ShellCommand::Show | ShellCommand::Help | ShellCommand::Quit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command `:{0}` (try :help)")]
    UnknownCommand(String),
    #[error("{0}")]
    BadArgument(String),
}

pub fn parse_line(line: &str) -> Result<ShellInput, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(literal) = line.strip_prefix("::") {
        return Ok(ShellInput::Append(format!(":{literal}")));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Ok(ShellInput::Append(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next();

    let command = match name.as_str() {
        "indent" => {
            let raw = arg.ok_or_else(|| {
                ShellError::BadArgument("usage: :indent <0|2|4|8>".to_string())
            })?;
            let indent = raw
                .parse::<IndentSize>()
                .map_err(|err| ShellError::BadArgument(err.to_string()))?;
            ShellCommand::Indent(indent)
        }
        "run" | "r" => ShellCommand::Run,
        "clear" | "l" => ShellCommand::Clear,
        "paste" => ShellCommand::Paste,
        "copy" => ShellCommand::Copy,
        "download" | "save" => ShellCommand::Download,
        "dismiss" | "esc" => ShellCommand::Dismiss,
        "show" => ShellCommand::Show,
        "help" | "h" | "?" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        other => match other.parse::<OperationKind>() {
            Ok(kind) => ShellCommand::Select(kind),
            Err(_) => return Err(ShellError::UnknownCommand(other.to_string())),
        },
    };
    Ok(ShellInput::Command(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_appended_verbatim() {
        assert_eq!(
            parse_line("  {\"a\": 1}\n"),
            Ok(ShellInput::Append("  {\"a\": 1}".to_string()))
        );
        assert_eq!(
            parse_line("::not a command"),
            Ok(ShellInput::Append(":not a command".to_string()))
        );
    }

    #[test]
    fn operation_names_select_kinds() {
        assert_eq!(
            parse_line(":Validate"),
            Ok(ShellInput::Command(ShellCommand::Select(OperationKind::Validate)))
        );
        assert_eq!(
            parse_line(":process"),
            Ok(ShellInput::Command(ShellCommand::Select(OperationKind::Process)))
        );
    }

    #[test]
    fn indent_requires_known_width() {
        assert_eq!(
            parse_line(":indent 8"),
            Ok(ShellInput::Command(ShellCommand::Indent(IndentSize::Eight)))
        );
        assert!(matches!(
            parse_line(":indent 5"),
            Err(ShellError::BadArgument(_))
        ));
        assert!(matches!(parse_line(":indent"), Err(ShellError::BadArgument(_))));
    }

    #[test]
    fn shortcuts_map_to_messages() {
        assert_eq!(
            parse_line(":r"),
            Ok(ShellInput::Command(ShellCommand::Run))
        );
        assert_eq!(ShellCommand::Run.to_msg(), Some(Msg::ProcessClicked));
        assert_eq!(ShellCommand::Clear.to_msg(), Some(Msg::ClearClicked));
        assert_eq!(ShellCommand::Quit.to_msg(), None);
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse_line(":minify"),
            Err(ShellError::UnknownCommand("minify".to_string()))
        );
    }
}
