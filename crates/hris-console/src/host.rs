//! Terminal stand-ins for the browser host: redirects and shortcut commands

use std::sync::Arc;
use tracing::info;

use hris_core::domain::{AppCommand, KeyPress, KeyTarget};
use hris_core::ports::Redirector;
use hris_core::services::CommandSink;

/// Reports redirects instead of navigating.
pub struct ConsoleRedirector;

impl Redirector for ConsoleRedirector {
    fn redirect(&self, route: &str) {
        info!("Redirect to {}", route);
        println!("-> {}", route);
    }
}

pub fn command_printer() -> CommandSink {
    Arc::new(|command: AppCommand| {
        println!("{}", describe_command(&command));
    })
}

pub fn describe_command(command: &AppCommand) -> String {
    match command {
        AppCommand::Goto(route) => format!("goto {}", route),
        AppCommand::ToggleFullscreen => "toggle fullscreen".to_string(),
        AppCommand::ToggleZenMode => "toggle zen mode".to_string(),
        AppCommand::FocusSearch => "focus search".to_string(),
        AppCommand::GoBack => "go back".to_string(),
        AppCommand::OpenExternal(url) => format!("open {}", url),
    }
}

/// Parse one line of key input. `input:<key>` simulates typing into a text field.
pub fn parse_key_line(line: &str) -> Option<KeyPress> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return None;
    }
    match line.split_once(':') {
        Some(("input", key)) if !key.is_empty() => Some(KeyPress::in_target(key, KeyTarget::Input)),
        _ => Some(KeyPress::new(line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_line() {
        assert_eq!(parse_key_line("g"), Some(KeyPress::new("g")));
        assert_eq!(parse_key_line("Escape\n"), Some(KeyPress::new("Escape")));
        assert_eq!(
            parse_key_line("input:g"),
            Some(KeyPress::in_target("g", KeyTarget::Input))
        );
        assert_eq!(parse_key_line(""), None);
        // A bare colon is still a key
        assert_eq!(parse_key_line(":"), Some(KeyPress::new(":")));
    }

    #[test]
    fn test_describe_command() {
        assert_eq!(describe_command(&AppCommand::Goto("/users".into())), "goto /users");
        assert_eq!(describe_command(&AppCommand::FocusSearch), "focus search");
    }
}
