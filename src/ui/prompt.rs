//! Interactive terminal prompts.

use console::Term;

use super::theme::Theme;
use super::{Answer, Prompt};

/// How many garbled replies to tolerate before falling back to the default.
const MAX_ATTEMPTS: usize = 3;

/// Line-oriented prompt backed by the controlling terminal.
pub struct TerminalPrompt {
    term: Term,
    theme: Theme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    /// Create a prompt on stderr, leaving stdout to step output.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: Theme::detect(),
        }
    }

    fn write_question(&self, rendered: &str) -> bool {
        self.term.write_str(rendered).is_ok()
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str, default: Answer) -> Answer {
        let hint = match default {
            Answer::Yes => "[Y/n]",
            Answer::No => "[y/N]",
        };
        let rendered = format!(
            "{} {} ",
            self.theme.highlight.apply_to(question),
            self.theme.dim.apply_to(hint)
        );

        for _ in 0..MAX_ATTEMPTS {
            if !self.write_question(&rendered) {
                return default;
            }
            let line = match self.term.read_line() {
                Ok(line) => line,
                // Unreadable input stream resolves to the default.
                Err(_) => return default,
            };
            if line.trim().is_empty() {
                return default;
            }
            if let Some(answer) = parse_confirmation(&line) {
                return answer;
            }
        }

        default
    }

    fn ask(&mut self, question: &str) -> String {
        let rendered = format!("{} ", self.theme.highlight.apply_to(question));
        if !self.write_question(&rendered) {
            return String::new();
        }
        self.term
            .read_line()
            .map(|line| line.trim().to_string())
            .unwrap_or_default()
    }
}

/// Parse one line of confirmation input.
///
/// Returns `None` for blank or unrecognized input; the caller decides how
/// to resolve those.
pub fn parse_confirmation(input: &str) -> Option<Answer> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_affirmative_variants() {
        assert_eq!(parse_confirmation("y"), Some(Answer::Yes));
        assert_eq!(parse_confirmation("yes"), Some(Answer::Yes));
        assert_eq!(parse_confirmation("YES"), Some(Answer::Yes));
        assert_eq!(parse_confirmation(" Y "), Some(Answer::Yes));
    }

    #[test]
    fn parses_negative_variants() {
        assert_eq!(parse_confirmation("n"), Some(Answer::No));
        assert_eq!(parse_confirmation("no"), Some(Answer::No));
        assert_eq!(parse_confirmation("No"), Some(Answer::No));
    }

    #[test]
    fn rejects_blank_and_noise() {
        assert_eq!(parse_confirmation(""), None);
        assert_eq!(parse_confirmation("   "), None);
        assert_eq!(parse_confirmation("maybe"), None);
        assert_eq!(parse_confirmation("yep"), None);
    }
}
