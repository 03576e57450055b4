//! Define bot against a local dictionary server
//! Run with: cargo test --test define_http_test

mod common;

use std::sync::Arc;

use common::{closed_port_url, serve_once, with_captured_logs, RecordingSink};
use lookup_bots::bots::DefineHandler;
use lookup_bots::infrastructure::config::HttpConfig;
use lookup_bots::infrastructure::dictionary::{Dictionary, HttpDictionary};
use lookup_bots::infrastructure::http::HttpClient;
use lookup_bots::{BotHandler, LookupError, Message};

fn define_bot(base: &str) -> DefineHandler {
    let http = HttpClient::new(&HttpConfig::default()).unwrap();
    let dictionary = HttpDictionary::new(http, format!("{}/api/v1/dictionary/{{word}}?format=json", base));
    DefineHandler::new(Arc::new(dictionary), 78)
}

#[test]
fn test_definition_reply() {
    let body = r#"[{"type":"noun","defenition":"a greeting","example":"<p>hello there</p>"}]"#;
    let (base, server) = serve_once("200 OK", "application/json", body);

    let sink = RecordingSink::default();
    define_bot(&base).handle_message(&Message::new("Hello"), &sink).unwrap();

    assert_eq!(
        sink.replies(),
        vec!["**Hello**:\n\n* (**noun**) a greeting\n&nbsp;&nbsp;hello there\n"]
    );
    assert_eq!(server.join().unwrap(), "GET /api/v1/dictionary/hello?format=json HTTP/1.1");
}

#[test]
fn test_empty_definition_list() {
    let (base, server) = serve_once("200 OK", "application/json", "[]");

    let sink = RecordingSink::default();
    define_bot(&base).handle_message(&Message::new("word"), &sink).unwrap();

    assert_eq!(sink.replies(), vec!["**word**:\nCould not load definition."]);
    server.join().unwrap();
}

#[test]
fn test_network_error_is_logged_not_raised() {
    let bot = define_bot(&closed_port_url());
    let sink = RecordingSink::default();

    let (result, logs) = with_captured_logs(|| bot.handle_message(&Message::new("word"), &sink));

    assert!(result.is_ok());
    assert_eq!(sink.replies(), vec!["**word**:\nCould not load definition."]);
    assert!(logs.contains("ERROR"), "expected an error log, got: {}", logs);
    assert!(logs.contains("Definition lookup for 'word' failed"));
}

#[test]
fn test_server_error_status() {
    let (base, server) = serve_once("500 Internal Server Error", "text/plain", "boom");

    let http = HttpClient::new(&HttpConfig::default()).unwrap();
    let dictionary = HttpDictionary::new(http, format!("{}/{{word}}", base));

    assert!(matches!(dictionary.lookup("word"), Err(LookupError::Status(500))));
    server.join().unwrap();
}

#[test]
fn test_malformed_json() {
    let (base, server) = serve_once("200 OK", "application/json", "{not json");

    let sink = RecordingSink::default();
    let (_, logs) = with_captured_logs(|| define_bot(&base).handle_message(&Message::new("word"), &sink));

    assert_eq!(sink.replies(), vec!["**word**:\nCould not load definition."]);
    assert!(logs.contains("Failed to decode response"));
    server.join().unwrap();
}

#[test]
fn test_invalid_input_makes_no_request() {
    // Nothing listens here, so a request would surface as a network error
    let bot = define_bot(&closed_port_url());
    let sink = RecordingSink::default();

    let (_, logs) = with_captured_logs(|| {
        for content in ["two words", "n0pe", "   "] {
            bot.handle_message(&Message::new(content), &sink).unwrap();
        }
    });

    assert_eq!(
        sink.replies(),
        vec![
            "Definitions for phrases are not available.",
            "Definitions of words with symbols are not possible.",
            "Please enter a word to define.",
        ]
    );
    assert!(!logs.contains("ERROR"));
}
