//! Line commands accepted on stdin in headless mode

use teslagrid_app::{Message, ViewMode};
use teslagrid_core::prelude::*;

/// Parse one stdin line into a message.
///
/// Blank lines yield `Ok(None)`. Commands are case-insensitive; the `go`
/// argument is passed through unchanged.
pub fn parse_command(line: &str) -> Result<Option<Message>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, Some(arg.trim())),
        None => (line, None),
    };

    let message = match (command.to_ascii_lowercase().as_str(), arg) {
        ("go", Some(path)) if !path.is_empty() => Message::Navigate(path.to_string()),
        ("next", None) => Message::NavigateNext,
        ("prev", None) => Message::NavigatePrevious,
        ("toggle", None) => Message::ToggleViewMode,
        ("list", None) => Message::SetViewMode(ViewMode::List),
        ("map", None) => Message::SetViewMode(ViewMode::Map),
        ("up", None) => Message::SelectPrevious,
        ("down", None) => Message::SelectNext,
        ("left", None) => Message::HoverPrevious,
        ("right", None) => Message::HoverNext,
        ("assign", None) => Message::AssignSelected,
        ("quit", None) => Message::Quit,
        _ => return Err(Error::unknown_command(line)),
    };

    Ok(Some(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_takes_a_path() {
        assert_eq!(
            parse_command("go /dashboard/forecast").unwrap(),
            Some(Message::Navigate("/dashboard/forecast".to_string()))
        );
        assert_eq!(
            parse_command("  go   /dashboard  ").unwrap(),
            Some(Message::Navigate("/dashboard".to_string()))
        );
    }

    #[test]
    fn test_go_without_path_is_rejected() {
        assert!(matches!(
            parse_command("go"),
            Err(Error::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_simple_commands() {
        let cases = [
            ("next", Message::NavigateNext),
            ("prev", Message::NavigatePrevious),
            ("toggle", Message::ToggleViewMode),
            ("list", Message::SetViewMode(ViewMode::List)),
            ("map", Message::SetViewMode(ViewMode::Map)),
            ("up", Message::SelectPrevious),
            ("down", Message::SelectNext),
            ("left", Message::HoverPrevious),
            ("right", Message::HoverNext),
            ("assign", Message::AssignSelected),
            ("QUIT", Message::Quit),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_command(input).unwrap(), Some(expected), "{input}");
        }
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_unknown_command_keeps_input() {
        let err = parse_command("jump 3").unwrap_err();
        assert_eq!(err.to_string(), "Unknown headless command: jump 3");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_extra_argument_is_rejected() {
        assert!(parse_command("next please").is_err());
    }
}
