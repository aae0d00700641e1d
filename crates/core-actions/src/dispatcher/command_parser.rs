//! Structured `:` command parsing.
//!
//! Converts the submitted prompt text (without the leading ':') into a
//! `ParsedCommand`. Matching is exact: no trimming, no abbreviations beyond
//! the option short names. Pure classification; no side effects.

use core_state::BoolOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Write,
    WriteQuit,
    Quit,
    ForceQuit,
    Set(SetCommand),
    Unknown(String),
}

/// Argument of `:set` (also the body of `set` lines in the rc file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetCommand {
    Toggle(BoolOption, bool),
    TabStop(usize),
    Unknown(String),
}

impl SetCommand {
    pub fn parse(sub: &str) -> SetCommand {
        if let Some((opt, value)) = BoolOption::parse_toggle(sub) {
            return SetCommand::Toggle(opt, value);
        }
        if let Some(n) = sub
            .strip_prefix("tabstop=")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            return SetCommand::TabStop(n);
        }
        SetCommand::Unknown(sub.to_string())
    }
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        match raw {
            "w" => ParsedCommand::Write,
            "wq" => ParsedCommand::WriteQuit,
            "q" => ParsedCommand::Quit,
            "q!" => ParsedCommand::ForceQuit,
            _ => match raw.strip_prefix("set ") {
                Some(sub) => ParsedCommand::Set(SetCommand::parse(sub)),
                None => ParsedCommand::Unknown(raw.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_file_commands() {
        assert_eq!(CommandParser::parse("w"), ParsedCommand::Write);
        assert_eq!(CommandParser::parse("wq"), ParsedCommand::WriteQuit);
        assert_eq!(CommandParser::parse("q"), ParsedCommand::Quit);
        assert_eq!(CommandParser::parse("q!"), ParsedCommand::ForceQuit);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(
            CommandParser::parse(" q"),
            ParsedCommand::Unknown(" q".into())
        );
        assert_eq!(
            CommandParser::parse("quit"),
            ParsedCommand::Unknown("quit".into())
        );
        assert_eq!(
            CommandParser::parse("set"),
            ParsedCommand::Unknown("set".into())
        );
    }

    #[test]
    fn parse_set_toggles() {
        for (word, opt, value) in [
            ("number", BoolOption::Number, true),
            ("nu", BoolOption::Number, true),
            ("nonumber", BoolOption::Number, false),
            ("nonu", BoolOption::Number, false),
            ("relativenumber", BoolOption::RelativeNumber, true),
            ("rnu", BoolOption::RelativeNumber, true),
            ("norelativenumber", BoolOption::RelativeNumber, false),
            ("nornu", BoolOption::RelativeNumber, false),
        ] {
            assert_eq!(
                CommandParser::parse(&format!("set {word}")),
                ParsedCommand::Set(SetCommand::Toggle(opt, value)),
                "{word}"
            );
        }
    }

    #[test]
    fn parse_tabstop() {
        assert_eq!(SetCommand::parse("tabstop=4"), SetCommand::TabStop(4));
        assert_eq!(
            SetCommand::parse("tabstop=0"),
            SetCommand::Unknown("tabstop=0".into())
        );
        assert_eq!(
            SetCommand::parse("tabstop=x"),
            SetCommand::Unknown("tabstop=x".into())
        );
        assert_eq!(
            SetCommand::parse("tabstop="),
            SetCommand::Unknown("tabstop=".into())
        );
    }
}
