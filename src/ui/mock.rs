//! Scripted prompt for tests.

use std::collections::VecDeque;

use super::{Answer, Prompt};

/// A prompt that replays queued answers and records every question asked.
#[derive(Debug, Default)]
pub struct MockPrompt {
    confirms: VecDeque<Answer>,
    replies: VecDeque<String>,
    /// Every question passed to `confirm` or `ask`, in order.
    pub questions: Vec<String>,
}

impl MockPrompt {
    /// Create a prompt with no queued answers; `confirm` resolves to its
    /// default and `ask` to an empty string, like a closed input stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next unanswered `confirm`.
    pub fn push_confirm(&mut self, answer: Answer) -> &mut Self {
        self.confirms.push_back(answer);
        self
    }

    /// Queue a reply for the next unanswered `ask`.
    pub fn push_reply(&mut self, reply: &str) -> &mut Self {
        self.replies.push_back(reply.to_string());
        self
    }
}

impl Prompt for MockPrompt {
    fn confirm(&mut self, question: &str, default: Answer) -> Answer {
        self.questions.push(question.to_string());
        self.confirms.pop_front().unwrap_or(default)
    }

    fn ask(&mut self, question: &str) -> String {
        self.questions.push(question.to_string());
        self.replies.pop_front().unwrap_or_default()
    }
}
