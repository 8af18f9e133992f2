use std::fmt::{Display, Formatter};

use ptransport::Usage;

/// Result of one successful `ask`: the reply text and the usage of that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    pub reply: String,
    pub usage: Usage,
}

impl AskOutcome {
    pub fn new(reply: impl Into<String>, usage: Usage) -> Self {
        Self {
            reply: reply.into(),
            usage,
        }
    }
}

/// Step of an `ask` turn, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AskPhase {
    ExistenceCheck,
    CreateThread,
    SeedSystemPrompt,
    AppendUserMessage,
    LoadHistory,
    Transport,
    AppendReply,
}

impl AskPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExistenceCheck => "existence_check",
            Self::CreateThread => "create_thread",
            Self::SeedSystemPrompt => "seed_system_prompt",
            Self::AppendUserMessage => "append_user_message",
            Self::LoadHistory => "load_history",
            Self::Transport => "transport",
            Self::AppendReply => "append_reply",
        }
    }
}

impl Display for AskPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
