//! Integration tests for [`telegram_bot::HandlerChain`].
//!
//! Covers: phase order across handlers, before() stopping the chain, Ignore passing to the next
//! handler, and Reply ending the handle phase and reaching every after().

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use telegram_bot::{Chat, Handler, HandlerChain, HandlerResponse, LoggingHandler, Message, User};

fn private_message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("analyst".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

type Log = Arc<Mutex<Vec<String>>>;

/// Records every phase under its name; handle() returns the configured response.
struct Recorder {
    name: &'static str,
    log: Log,
    allow: bool,
    response: HandlerResponse,
}

impl Recorder {
    fn new(name: &'static str, log: &Log, response: HandlerResponse) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
            allow: true,
            response,
        })
    }

    fn blocking(name: &'static str, log: &Log) -> Arc<Self> {
        Arc::new(Self {
            name,
            log: log.clone(),
            allow: false,
            response: HandlerResponse::Continue,
        })
    }
}

#[async_trait]
impl Handler for Recorder {
    async fn before(&self, _message: &Message) -> telegram_bot::Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> telegram_bot::Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> telegram_bot::Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

/// **Test: before runs first→last, handle until Reply, after last→first with the final response.**
#[tokio::test]
async fn test_phase_order_and_reply_reaches_after() {
    let log: Log = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Recorder::new("first", &log, HandlerResponse::Ignore))
        .add_handler(Recorder::new("second", &log, HandlerResponse::Reply("done".to_string())))
        .add_handler(Recorder::new("third", &log, HandlerResponse::Continue));

    let result = chain.handle(&private_message("/menu")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("done".to_string()));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "before_third",
            "handle_first",
            "handle_second",
            "after_third:Reply(\"done\")",
            "after_second:Reply(\"done\")",
            "after_first:Reply(\"done\")",
        ]
    );
}

/// **Test: before() returning false stops the chain; no handle or after runs.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    let log: Log = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Recorder::blocking("gate", &log))
        .add_handler(Recorder::new("dialog", &log, HandlerResponse::Continue));

    let result = chain.handle(&private_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_gate"]);
}

/// **Test: when every handler continues, the final response is Continue.**
#[tokio::test]
async fn test_all_continue() {
    let log: Log = Arc::default();
    let chain = HandlerChain::default()
        .add_handler(Recorder::new("only", &log, HandlerResponse::Continue));

    let result = chain.handle(&private_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(log.lock().unwrap().last().unwrap(), "after_only:Continue");
}
