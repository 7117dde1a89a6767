//! Integration tests for [`parts_bot::HandlerChain`].
//!
//! Covers before stopping the chain, Reply ending the handle phase, and after running in reverse.

mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::message_update;
use parts_bot::{Handler, HandlerChain, HandlerResponse, Message, Reply};

/// Records its phase calls into a shared log and answers handle() with a fixed response.
struct RecordingHandler {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    allow: bool,
    response: HandlerResponse,
}

impl RecordingHandler {
    fn new(name: &'static str, log: Arc<Mutex<Vec<String>>>, response: HandlerResponse) -> Self {
        Self {
            name,
            log,
            allow: true,
            response,
        }
    }

    fn blocking(mut self) -> Self {
        self.allow = false;
        self
    }

    fn push(&self, phase: &str) {
        self.log.lock().unwrap().push(format!("{}:{}", self.name, phase));
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> parts_bot::Result<bool> {
        self.push("before");
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> parts_bot::Result<HandlerResponse> {
        self.push("handle");
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> parts_bot::Result<()> {
        self.push(if matches!(response, HandlerResponse::Reply(_)) {
            "after-reply"
        } else {
            "after"
        });
        Ok(())
    }
}

fn test_message() -> Message {
    message_update(1, "/help").message().cloned().unwrap()
}

/// **Test: Reply ends the handle phase; after runs last→first and sees the reply.**
#[tokio::test]
async fn test_reply_stops_handle_phase() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new("a", log.clone(), HandlerResponse::Continue)))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            HandlerResponse::Reply(Reply::text("hi")),
        )))
        .add_handler(Arc::new(RecordingHandler::new("c", log.clone(), HandlerResponse::Continue)));

    let response = chain.handle(&test_message()).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(Reply::text("hi")));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "a:before",
            "b:before",
            "c:before",
            "a:handle",
            "b:handle",
            "c:after-reply",
            "b:after-reply",
            "a:after-reply",
        ]
    );
}

/// **Test: before returning false stops the chain before any handle.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(
            RecordingHandler::new("gate", log.clone(), HandlerResponse::Continue).blocking(),
        ))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            HandlerResponse::Reply(Reply::text("hi")),
        )));

    let response = chain.handle(&test_message()).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["gate:before"]);
}

/// **Test: an empty chain continues.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let response = HandlerChain::new().handle(&test_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
