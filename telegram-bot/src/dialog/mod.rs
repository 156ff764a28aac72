//! Menu dialog: states, the transition function and the per-user state store.

mod machine;
mod store;

pub use machine::{parse_input, transition, Command, Input, Outgoing, Transition};
pub use store::DialogStore;

/// Days in a content plan requested from the bot.
pub const BOT_PLAN_DAYS: u32 = 7;

/// Menu entries that ask for a channel username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAction {
    AnalyzeChannel,
    ContentPlan,
    Survey,
}

/// An action waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    AnalyzeChannel { username: String },
    ContentPlan { username: String, days: u32 },
    AnalyzePost { post_id: i64 },
    Survey { username: String },
}

impl PendingAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            PendingAction::AnalyzeChannel { .. } => "analyze_channel",
            PendingAction::ContentPlan { .. } => "generate_content_plan",
            PendingAction::AnalyzePost { .. } => "analyze_post",
            PendingAction::Survey { .. } => "create_survey",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    /// Outside the menu dialog; plain text is ignored.
    #[default]
    Idle,
    Menu,
    AwaitingChannel(ChannelAction),
    AwaitingPostId,
    AwaitingConfirmation(PendingAction),
}
