use regex::Regex;
use reverie_model::auth::Credentials;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Exit,
    Help,
    SignUp(Credentials),
    SignIn(Credentials),
    SignOut,
    Write,
    Title(Option<String>),
    Save,
    Discard,
    Timeline,
    Search(String),
    Mood(String),
    Moods,
    Line(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command /{0}, try /help")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub(crate) const HELP: &str = "\
/signup <email> <password>   create an account
/signin <email> <password>   sign in
/signout                     sign out
/write                       write a new entry, every other line is added to it
/title [title]               set or clear the title of the entry
/save                        analyze and save the entry
/discard                     throw the entry away
/timeline                    show your entries
/search [term]               filter the timeline by text, empty clears
/mood [mood]                 filter the timeline by mood, empty clears
/moods                       list the moods of your entries
/help                        show this help
/exit                        quit";

pub(crate) struct CommandParser {
    regex: Regex,
}

impl CommandParser {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(r"^/(\w+)(?:\s+(.*))?$")?,
        })
    }

    /// Parses a line of input. Lines not starting with a command are text for the draft.
    pub(crate) fn parse(&self, input: &str) -> Result<Command, CommandError> {
        let Some(captures) = self.regex.captures(input.trim_end()) else {
            return Ok(Command::Line(input.to_owned()));
        };
        let command = captures.get(1).map_or("", |m| m.as_str());
        let arg = captures.get(2).map(|m| m.as_str().trim()).filter(|arg| !arg.is_empty());

        let command = match command {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "signup" => Command::SignUp(credentials(arg).ok_or(CommandError::Usage("/signup <email> <password>"))?),
            "signin" => Command::SignIn(credentials(arg).ok_or(CommandError::Usage("/signin <email> <password>"))?),
            "signout" => Command::SignOut,
            "write" => Command::Write,
            "title" => Command::Title(arg.map(ToOwned::to_owned)),
            "save" => Command::Save,
            "discard" => Command::Discard,
            "timeline" => Command::Timeline,
            "search" => Command::Search(arg.unwrap_or_default().to_owned()),
            "mood" => Command::Mood(arg.unwrap_or_default().to_lowercase()),
            "moods" => Command::Moods,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(command)
    }
}

fn credentials(arg: Option<&str>) -> Option<Credentials> {
    let mut parts = arg?.split_whitespace();
    let (Some(email), Some(password), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Some(Credentials::new(email, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Command, CommandError> {
        CommandParser::new().unwrap().parse(input)
    }

    #[test]
    fn test_plain_lines_are_text() {
        assert_eq!(parse("Today was a good day").unwrap(), Command::Line("Today was a good day".into()));
        assert_eq!(parse("  indented / not a command").unwrap(), Command::Line("  indented / not a command".into()));
        assert_eq!(parse("").unwrap(), Command::Line(String::new()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse("/exit").unwrap(), Command::Exit);
        assert_eq!(parse("/save ").unwrap(), Command::Save);
        assert_eq!(parse("/title  Morning walk ").unwrap(), Command::Title(Some("Morning walk".into())));
        assert_eq!(parse("/title").unwrap(), Command::Title(None));
        assert_eq!(parse("/search river").unwrap(), Command::Search("river".into()));
        assert_eq!(parse("/search").unwrap(), Command::Search(String::new()));
        assert_eq!(parse("/mood Calm").unwrap(), Command::Mood("calm".into()));
    }

    #[test]
    fn test_credentials() {
        let Command::SignIn(credentials) = parse("/signin reader@example.com hunter2").unwrap() else {
            panic!("expected sign in");
        };
        assert_eq!(credentials.email, "reader@example.com");
        assert_eq!(credentials.password, "hunter2");

        assert_eq!(
            parse("/signup reader@example.com").unwrap_err(),
            CommandError::Usage("/signup <email> <password>")
        );
        assert!(parse("/signin a b c").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("/dance").unwrap_err(), CommandError::Unknown("dance".into()));
    }
}
