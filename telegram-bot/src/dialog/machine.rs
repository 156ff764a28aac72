//! Pure dialog transitions: (state, input) → replies, next state, action to run.

use tga_core::normalize_channel_username;

use super::{ChannelAction, DialogState, PendingAction, BOT_PLAN_DAYS};
use crate::core::ReplyKeyboard;
use crate::texts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Menu,
    Cancel,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Text(String),
}

/// `/cmd` or `/cmd@bot_name` (arguments ignored) is a command; anything else is text.
pub fn parse_input(content: &str) -> Input {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Input::Text(trimmed.to_string());
    };
    let word = rest.split_whitespace().next().unwrap_or_default();
    let name = word.split('@').next().unwrap_or_default();
    let command = match name {
        "start" => Command::Start,
        "help" => Command::Help,
        "menu" => Command::Menu,
        "cancel" => Command::Cancel,
        other => Command::Unknown(other.to_string()),
    };
    Input::Command(command)
}

/// One message to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

impl Outgoing {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    fn with_keyboard(text: impl Into<String>, keyboard: ReplyKeyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub replies: Vec<Outgoing>,
    pub next: DialogState,
    /// Confirmed action; its result is sent after `replies`.
    pub execute: Option<PendingAction>,
}

impl Transition {
    fn to(next: DialogState, replies: Vec<Outgoing>) -> Self {
        Self {
            replies,
            next,
            execute: None,
        }
    }
}

pub fn transition(state: &DialogState, input: &Input) -> Transition {
    match input {
        Input::Command(command) => on_command(state, command),
        Input::Text(text) => on_text(state, text),
    }
}

fn on_command(state: &DialogState, command: &Command) -> Transition {
    match command {
        Command::Start => Transition::to(DialogState::Idle, vec![Outgoing::text(texts::START)]),
        Command::Help => Transition::to(DialogState::Idle, vec![Outgoing::text(texts::HELP)]),
        Command::Menu => Transition::to(DialogState::Menu, vec![menu_prompt()]),
        Command::Cancel => Transition::to(
            DialogState::Idle,
            vec![Outgoing::with_keyboard(texts::CANCELLED, ReplyKeyboard::Remove)],
        ),
        Command::Unknown(_) => {
            Transition::to(state.clone(), vec![Outgoing::text(texts::UNKNOWN_COMMAND)])
        }
    }
}

fn on_text(state: &DialogState, text: &str) -> Transition {
    match state {
        DialogState::Idle => Transition::to(DialogState::Idle, Vec::new()),

        DialogState::Menu => match text {
            texts::BUTTON_ANALYZE_CHANNEL => ask_channel(ChannelAction::AnalyzeChannel),
            texts::BUTTON_CONTENT_PLAN => ask_channel(ChannelAction::ContentPlan),
            texts::BUTTON_SURVEY => ask_channel(ChannelAction::Survey),
            texts::BUTTON_ANALYZE_POST => Transition::to(
                DialogState::AwaitingPostId,
                vec![Outgoing::text(texts::ASK_POST_ID)],
            ),
            _ => Transition::to(DialogState::Menu, vec![menu_prompt()]),
        },

        DialogState::AwaitingChannel(kind) => match normalize_channel_username(text) {
            Some(username) => {
                let pending = match kind {
                    ChannelAction::AnalyzeChannel => PendingAction::AnalyzeChannel { username },
                    ChannelAction::ContentPlan => PendingAction::ContentPlan {
                        username,
                        days: BOT_PLAN_DAYS,
                    },
                    ChannelAction::Survey => PendingAction::Survey { username },
                };
                confirm(pending)
            }
            None => ask_channel(*kind),
        },

        DialogState::AwaitingPostId => match text.trim().parse::<i64>() {
            Ok(post_id) => confirm(PendingAction::AnalyzePost { post_id }),
            Err(_) => Transition::to(
                DialogState::AwaitingPostId,
                vec![Outgoing::text(texts::INVALID_POST_ID)],
            ),
        },

        DialogState::AwaitingConfirmation(pending) => match text {
            texts::YES => Transition {
                replies: vec![Outgoing::with_keyboard(texts::WORKING, ReplyKeyboard::Remove)],
                next: DialogState::Idle,
                execute: Some(pending.clone()),
            },
            texts::NO => Transition::to(
                DialogState::Idle,
                vec![Outgoing::with_keyboard(
                    texts::ACTION_CANCELLED,
                    ReplyKeyboard::Remove,
                )],
            ),
            _ => confirm(pending.clone()),
        },
    }
}

fn menu_prompt() -> Outgoing {
    Outgoing::with_keyboard(texts::MENU_PROMPT, texts::menu_keyboard())
}

fn ask_channel(kind: ChannelAction) -> Transition {
    let prompt = match kind {
        ChannelAction::AnalyzeChannel => texts::ASK_CHANNEL_FOR_ANALYSIS,
        ChannelAction::ContentPlan => texts::ASK_CHANNEL_FOR_PLAN,
        ChannelAction::Survey => texts::ASK_CHANNEL_FOR_SURVEY,
    };
    Transition::to(
        DialogState::AwaitingChannel(kind),
        vec![Outgoing::text(prompt)],
    )
}

fn confirm(pending: PendingAction) -> Transition {
    let question = match &pending {
        PendingAction::AnalyzeChannel { username } => texts::confirm_channel_analysis(username),
        PendingAction::ContentPlan { username, .. } => texts::confirm_content_plan(username),
        PendingAction::Survey { username } => texts::confirm_survey(username),
        PendingAction::AnalyzePost { post_id } => texts::confirm_post_analysis(*post_id),
    };
    Transition::to(
        DialogState::AwaitingConfirmation(pending),
        vec![Outgoing::with_keyboard(question, texts::confirm_keyboard())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Input {
        Input::Text(s.to_string())
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("/start"), Input::Command(Command::Start));
        assert_eq!(parse_input(" /menu@analytics_bot "), Input::Command(Command::Menu));
        assert_eq!(parse_input("/help me"), Input::Command(Command::Help));
        assert_eq!(
            parse_input("/foo"),
            Input::Command(Command::Unknown("foo".to_string()))
        );
        assert_eq!(parse_input(" @rustnews "), text("@rustnews"));
    }

    #[test]
    fn test_channel_analysis_flow() {
        let t = transition(&DialogState::Idle, &Input::Command(Command::Menu));
        assert_eq!(t.next, DialogState::Menu);
        assert_eq!(t.replies[0].keyboard, Some(texts::menu_keyboard()));

        let t = transition(&t.next, &text(texts::BUTTON_ANALYZE_CHANNEL));
        assert_eq!(t.next, DialogState::AwaitingChannel(ChannelAction::AnalyzeChannel));
        assert_eq!(t.replies[0].text, texts::ASK_CHANNEL_FOR_ANALYSIS);

        let t = transition(&t.next, &text("@rustnews"));
        let pending = PendingAction::AnalyzeChannel {
            username: "rustnews".to_string(),
        };
        assert_eq!(t.next, DialogState::AwaitingConfirmation(pending.clone()));
        assert_eq!(t.replies[0].text, "Вы хотите проанализировать канал @rustnews?");
        assert_eq!(t.replies[0].keyboard, Some(texts::confirm_keyboard()));

        let t = transition(&t.next, &text(texts::YES));
        assert_eq!(t.next, DialogState::Idle);
        assert_eq!(t.execute, Some(pending));
        assert_eq!(t.replies[0].keyboard, Some(ReplyKeyboard::Remove));
    }

    #[test]
    fn test_content_plan_uses_seven_days() {
        let state = DialogState::AwaitingChannel(ChannelAction::ContentPlan);
        let t = transition(&state, &text("https://t.me/rustnews"));
        assert_eq!(
            t.next,
            DialogState::AwaitingConfirmation(PendingAction::ContentPlan {
                username: "rustnews".to_string(),
                days: 7,
            })
        );
    }

    #[test]
    fn test_post_id_validation() {
        let t = transition(&DialogState::AwaitingPostId, &text("abc"));
        assert_eq!(t.next, DialogState::AwaitingPostId);
        assert_eq!(t.replies[0].text, texts::INVALID_POST_ID);

        let t = transition(&DialogState::AwaitingPostId, &text(" 42 "));
        assert_eq!(
            t.next,
            DialogState::AwaitingConfirmation(PendingAction::AnalyzePost { post_id: 42 })
        );
        assert_eq!(t.replies[0].text, "Вы хотите проанализировать пост с ID 42?");
    }

    #[test]
    fn test_decline_and_cancel_reset_state() {
        let state = DialogState::AwaitingConfirmation(PendingAction::Survey {
            username: "rustnews".to_string(),
        });
        let t = transition(&state, &text(texts::NO));
        assert_eq!(t.next, DialogState::Idle);
        assert_eq!(t.replies[0].text, texts::ACTION_CANCELLED);
        assert!(t.execute.is_none());

        let t = transition(&DialogState::AwaitingPostId, &Input::Command(Command::Cancel));
        assert_eq!(t.next, DialogState::Idle);
        assert_eq!(t.replies[0].text, texts::CANCELLED);
        assert_eq!(t.replies[0].keyboard, Some(ReplyKeyboard::Remove));
    }

    #[test]
    fn test_unknown_command_keeps_state() {
        let state = DialogState::AwaitingChannel(ChannelAction::Survey);
        let t = transition(&state, &Input::Command(Command::Unknown("stats".to_string())));
        assert_eq!(t.next, state);
        assert_eq!(t.replies[0].text, texts::UNKNOWN_COMMAND);
    }

    #[test]
    fn test_unexpected_text_repeats_prompt() {
        let t = transition(&DialogState::Menu, &text("что-то"));
        assert_eq!(t.next, DialogState::Menu);
        assert_eq!(t.replies[0].text, texts::MENU_PROMPT);

        let pending = PendingAction::AnalyzePost { post_id: 5 };
        let t = transition(&DialogState::AwaitingConfirmation(pending.clone()), &text("может быть"));
        assert_eq!(t.next, DialogState::AwaitingConfirmation(pending));
        assert!(t.execute.is_none());

        let t = transition(&DialogState::AwaitingChannel(ChannelAction::Survey), &text("  @ "));
        assert_eq!(t.next, DialogState::AwaitingChannel(ChannelAction::Survey));
        assert_eq!(t.replies[0].text, texts::ASK_CHANNEL_FOR_SURVEY);
    }

    #[test]
    fn test_text_outside_dialog_is_ignored() {
        let t = transition(&DialogState::Idle, &text("hello"));
        assert!(t.replies.is_empty());
        assert_eq!(t.next, DialogState::Idle);
    }
}
