#![forbid(unsafe_code)]

//! Closed-vocabulary command interpreter.
//!
//! A submitted line is echoed after the prompt, lower-cased, and looked up as
//! a whole in the [`CommandTable`]. There is no tokenizing: `"github "` and
//! `"github x"` are unknown commands. The table is built once and never
//! changes afterwards.
//!
//! # Example
//!
//! ```
//! use folio_core::{CommandTable, Interpreter, Transcript};
//!
//! let interpreter = Interpreter::new("user@host ~ %", CommandTable::default());
//! let mut transcript = Transcript::new();
//! interpreter.submit(&mut transcript, "foo");
//! assert_eq!(transcript.lines(), ["user@host ~ % foo", "command not found: foo"]);
//! ```

use crate::config::SiteConfig;
use crate::content::ProfileKind;
use crate::transcript::Transcript;

/// What a recognized keyword does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Append these lines in order.
    Reply(Vec<String>),
    /// Reset the transcript to empty.
    Clear,
}

/// One row of the command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    /// Lower-case keyword.
    pub keyword: String,
    /// One-line description shown by `help`.
    pub summary: String,
    pub action: CommandAction,
}

/// Fixed mapping from keyword to action, in `help` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: Vec<CommandEntry>,
}

impl CommandTable {
    /// Build the six site commands from the config.
    ///
    /// Profile commands are only present for profiles the config lists.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut entries = Vec::with_capacity(6);

        entries.push(CommandEntry {
            keyword: "whoami".into(),
            summary: "About me".into(),
            action: CommandAction::Reply(vec![format!("{} - {}", config.owner, config.tagline)]),
        });

        for kind in [ProfileKind::LeetCode, ProfileKind::GitHub, ProfileKind::LinkedIn] {
            if let Some(link) = config.profile(kind) {
                entries.push(CommandEntry {
                    keyword: kind.keyword().into(),
                    summary: format!("My {} profile", link.label),
                    action: CommandAction::Reply(vec![link.reply_line()]),
                });
            }
        }

        entries.push(CommandEntry {
            keyword: "clear".into(),
            summary: "Clear the terminal".into(),
            action: CommandAction::Clear,
        });

        // `help` lists every entry including itself, so its reply is built last.
        let help_summary = "Show this help message";
        let mut help = Vec::with_capacity(entries.len() + 2);
        help.push("Available commands:".to_string());
        help.extend(
            entries
                .iter()
                .map(|entry| format!("{} - {}", entry.keyword, entry.summary)),
        );
        help.push(format!("help - {help_summary}"));
        entries.push(CommandEntry {
            keyword: "help".into(),
            summary: help_summary.into(),
            action: CommandAction::Reply(help),
        });

        Self { entries }
    }

    /// Look up an already lower-cased keyword.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&CommandAction> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| &entry.action)
    }

    /// Look up raw input, ignoring case.
    #[must_use]
    pub fn resolve(&self, line: &str) -> Option<&CommandAction> {
        self.get(&line.to_lowercase())
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.keyword.as_str())
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// Result of one submission, for callers that want more than the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A reply of `lines` lines was appended after the echo.
    Replied { lines: usize },
    /// The transcript was reset.
    Cleared,
    /// The "not found" line was appended after the echo.
    NotFound,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replied { .. } => "replied",
            Self::Cleared => "cleared",
            Self::NotFound => "not_found",
        }
    }
}

/// Prompt plus command table. Stateless; the caller owns the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    prompt: String,
    table: CommandTable,
    not_found_prefix: Option<String>,
}

impl Interpreter {
    pub fn new(prompt: impl Into<String>, table: CommandTable) -> Self {
        Self {
            prompt: prompt.into(),
            table,
            not_found_prefix: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        let interpreter = Self::new(config.prompt.clone(), CommandTable::from_config(config));
        match &config.not_found_prefix {
            Some(prefix) => interpreter.with_not_found_prefix(prefix.clone()),
            None => interpreter,
        }
    }

    /// Put `prefix: ` in front of the "command not found" message.
    #[must_use]
    pub fn with_not_found_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.not_found_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// The line echoed for `line`.
    #[must_use]
    pub fn echo(&self, line: &str) -> String {
        format!("{} {line}", self.prompt)
    }

    /// The line appended for an unrecognized `line`, original casing kept.
    #[must_use]
    pub fn not_found(&self, line: &str) -> String {
        match &self.not_found_prefix {
            Some(prefix) => format!("{prefix}: command not found: {line}"),
            None => format!("command not found: {line}"),
        }
    }

    /// Echo `line`, then apply whatever it resolves to.
    pub fn submit(&self, transcript: &mut Transcript, line: &str) -> Outcome {
        transcript.push(self.echo(line));

        let outcome = match self.table.resolve(line) {
            Some(CommandAction::Clear) => {
                transcript.clear();
                Outcome::Cleared
            }
            Some(CommandAction::Reply(lines)) => {
                transcript.extend(lines.iter().cloned());
                Outcome::Replied { lines: lines.len() }
            }
            None => {
                transcript.push(self.not_found(line));
                Outcome::NotFound
            }
        };

        tracing::debug!(
            keyword = %line.to_lowercase(),
            outcome = outcome.as_str(),
            transcript_len = transcript.len(),
            "command submitted"
        );
        outcome
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interpreter() -> Interpreter {
        Interpreter::new("user@host ~ %", CommandTable::default())
    }

    #[test]
    fn whoami_after_welcome() {
        let mut transcript = Transcript::with_lines(["Welcome..."]);
        let outcome = interpreter().submit(&mut transcript, "whoami");
        assert_eq!(outcome, Outcome::Replied { lines: 1 });
        assert_eq!(
            transcript.lines(),
            [
                "Welcome...",
                "user@host ~ % whoami",
                "Naman Sharma - Software Developer and Coding Enthusiast",
            ]
        );
    }

    #[test]
    fn unknown_command_on_empty_transcript() {
        let mut transcript = Transcript::new();
        assert_eq!(interpreter().submit(&mut transcript, "foo"), Outcome::NotFound);
        assert_eq!(
            transcript.lines(),
            ["user@host ~ % foo", "command not found: foo"]
        );
    }

    #[test]
    fn empty_line_is_not_found() {
        let mut transcript = Transcript::new();
        interpreter().submit(&mut transcript, "");
        assert_eq!(transcript.lines(), ["user@host ~ % ", "command not found: "]);
    }

    #[test]
    fn not_found_keeps_original_casing() {
        let mut transcript = Transcript::new();
        interpreter().submit(&mut transcript, "FooBar");
        assert_eq!(transcript.last(), Some("command not found: FooBar"));
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed() {
        let mut transcript = Transcript::new();
        assert_eq!(
            interpreter().submit(&mut transcript, " whoami"),
            Outcome::NotFound
        );
        assert_eq!(
            interpreter().submit(&mut transcript, "github "),
            Outcome::NotFound
        );
    }

    #[test]
    fn clear_discards_its_own_echo() {
        let mut transcript = Transcript::with_lines(["a", "b", "c"]);
        assert_eq!(interpreter().submit(&mut transcript, "CLEAR"), Outcome::Cleared);
        assert!(transcript.is_empty());
    }

    #[test]
    fn help_lists_every_command_in_order() {
        let mut transcript = Transcript::new();
        interpreter().submit(&mut transcript, "help");
        assert_eq!(
            transcript.lines(),
            [
                "user@host ~ % help",
                "Available commands:",
                "whoami - About me",
                "leetcode - My LeetCode profile",
                "github - My GitHub profile",
                "linkedin - My LinkedIn profile",
                "clear - Clear the terminal",
                "help - Show this help message",
            ]
        );
    }

    #[test]
    fn profile_commands_print_urls() {
        let mut transcript = Transcript::new();
        let interpreter = interpreter();
        interpreter.submit(&mut transcript, "leetcode");
        interpreter.submit(&mut transcript, "LinkedIn");
        interpreter.submit(&mut transcript, "github");
        assert_eq!(
            transcript.lines(),
            [
                "user@host ~ % leetcode",
                "LeetCode: https://leetcode.com/Naman_Sharma_/",
                "user@host ~ % LinkedIn",
                "LinkedIn: https://www.linkedin.com/in/namansharma12/",
                "user@host ~ % github",
                "GitHub: https://github.com/NamanSharma1201",
            ]
        );
    }

    #[test]
    fn not_found_prefix_from_config() {
        let config = SiteConfig {
            not_found_prefix: Some("zsh".into()),
            ..SiteConfig::default()
        };
        let mut transcript = Transcript::new();
        Interpreter::from_config(&config).submit(&mut transcript, "ls");
        assert_eq!(
            transcript.lines(),
            ["naman@macbook-pro ~ % ls", "zsh: command not found: ls"]
        );
    }

    #[test]
    fn table_has_six_keywords() {
        let table = CommandTable::default();
        let keywords: Vec<_> = table.keywords().collect();
        assert_eq!(
            keywords,
            ["whoami", "leetcode", "github", "linkedin", "clear", "help"]
        );
        assert_eq!(table.get("clear"), Some(&CommandAction::Clear));
        assert_eq!(table.get("CLEAR"), None);
        assert_eq!(table.resolve("CLEAR"), Some(&CommandAction::Clear));
    }

    #[test]
    fn missing_profile_drops_its_command() {
        let mut config = SiteConfig::default();
        config.profiles.retain(|l| l.kind != ProfileKind::LinkedIn);
        let table = CommandTable::from_config(&config);
        assert!(table.get("linkedin").is_none());
        let Some(CommandAction::Reply(help)) = table.get("help") else {
            panic!("help must be a reply");
        };
        assert!(!help.iter().any(|line| line.starts_with("linkedin")));
    }
}
