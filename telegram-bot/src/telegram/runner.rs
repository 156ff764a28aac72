//! Update dispatcher: private messages go through the handler chain; channel posts, discussion
//! comments and reaction counts go to the collector; everything else is dropped.

use std::sync::Arc;

use anyhow::Result;
use collector::TelegramDataCollector;
use teloxide::dispatching::{DpHandlerDescription, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::MessageReactionCountUpdated;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::ingest::{channel_info_from_chat, discussion_target, reactions_from, source_message};
use crate::chain::HandlerChain;
use crate::core::ToCoreMessage;

type Branch = dptree::Handler<'static, ResponseResult<()>, DpHandlerDescription>;

/// Runs long polling until Ctrl-C. Without a collector, channel updates are ignored.
#[instrument(skip_all)]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    chain: HandlerChain,
    collector: Option<TelegramDataCollector>,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity resolved");
    }

    let mut handler: UpdateHandler<teloxide::RequestError> = dptree::entry().branch(
        Update::filter_message()
            .filter(|msg: Message| msg.chat.is_private())
            .endpoint(on_private_message),
    );
    let mut deps = dptree::deps![chain];

    match collector {
        Some(collector) => {
            handler = handler.branch(ingest_branches());
            deps.insert(collector);
            info!("Live channel ingestion enabled");
        }
        None => warn!("No collector configured; channel updates will be ignored"),
    }

    Dispatcher::builder(bot, handler)
        .dependencies(deps)
        .default_handler(|update: Arc<Update>| async move {
            debug!(update_id = update.id.0, "Update ignored");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

fn ingest_branches() -> Branch {
    dptree::entry()
        .branch(Update::filter_channel_post().endpoint(on_channel_post))
        .branch(
            Update::filter_message()
                .filter(|msg: Message| discussion_target(&msg).is_some())
                .endpoint(on_discussion_comment),
        )
        .branch(Update::filter_message_reaction_count_updated().endpoint(on_reaction_count))
}

async fn on_private_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    // Actions can take minutes; keep the dispatcher free.
    tokio::spawn(async move {
        debug!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_id = %core_msg.id,
            "step: processing message (handler chain started)"
        );
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
        }
    });
    Ok(())
}

async fn on_channel_post(msg: Message, collector: TelegramDataCollector) -> ResponseResult<()> {
    let channel = channel_info_from_chat(&msg.chat);
    if let Err(e) = collector
        .ingest_channel_post(&channel, &source_message(&msg))
        .await
    {
        error!(error = %e, channel_tg_id = channel.tg_id, "Failed to ingest channel post");
    }
    Ok(())
}

async fn on_discussion_comment(
    msg: Message,
    collector: TelegramDataCollector,
) -> ResponseResult<()> {
    let Some((channel_tg_id, post_tg_id)) = discussion_target(&msg) else {
        return Ok(());
    };
    if let Err(e) = collector
        .ingest_comment(channel_tg_id, post_tg_id, &source_message(&msg))
        .await
    {
        error!(error = %e, channel_tg_id, post_tg_id, "Failed to ingest comment");
    }
    Ok(())
}

async fn on_reaction_count(
    update: MessageReactionCountUpdated,
    collector: TelegramDataCollector,
) -> ResponseResult<()> {
    let (channel_tg_id, post_tg_id) = (update.chat.id.0, update.message_id.0 as i64);
    if let Err(e) = collector
        .ingest_post_reactions(channel_tg_id, post_tg_id, &reactions_from(&update))
        .await
    {
        error!(error = %e, channel_tg_id, post_tg_id, "Failed to ingest reaction counts");
    }
    Ok(())
}
