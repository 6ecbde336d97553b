//! Conversation session integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{CLAUDE_MODEL, TITAN_MODEL};
    use crate::common::{ResponseFactory, ScriptedGateway, bedrock_config};
    use bedrock_chat::core::session::FAILED_RESPONSE_MESSAGE;
    use bedrock_chat::{
        BedrockGateway, ConversationSession, GenerationParams, MessageRole, ProviderError,
        RejectReason, SendOutcome,
    };
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_conversation_over_bedrock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"titan-text-lite-v1/invoke$"))
            .and(body_partial_json(json!({ "inputText": "Human: hi\n\nAssistant:" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ResponseFactory::titan("Hello")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(r"titan-text-lite-v1/invoke$"))
            .and(body_partial_json(json!({
                "inputText": "Human: hi\n\nAssistant: Hello\n\nHuman: bye\n\nAssistant:"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ResponseFactory::titan("Bye")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway =
            BedrockGateway::new(&bedrock_config(&server.uri()), GenerationParams::default())
                .unwrap();
        let session = ConversationSession::new(std::sync::Arc::new(gateway), TITAN_MODEL);

        assert!(matches!(session.send("hi").await, SendOutcome::Replied(_)));
        assert!(matches!(session.send("bye").await, SendOutcome::Replied(_)));

        let contents: Vec<_> = session
            .messages()
            .into_iter()
            .map(|m| (m.role, m.content))
            .collect();
        assert_eq!(
            contents,
            vec![
                (MessageRole::User, "hi".to_string()),
                (MessageRole::Assistant, "Hello".to_string()),
                (MessageRole::User, "bye".to_string()),
                (MessageRole::Assistant, "Bye".to_string()),
            ]
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_assistant_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let gateway =
            BedrockGateway::new(&bedrock_config(&server.uri()), GenerationParams::default())
                .unwrap();
        let session = ConversationSession::new(std::sync::Arc::new(gateway), CLAUDE_MODEL);

        match session.send("hi").await {
            SendOutcome::Replied(reply) => assert_eq!(reply.content, FAILED_RESPONSE_MESSAGE),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(session.messages().len(), 2);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_unsupported_model_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let gateway =
            BedrockGateway::new(&bedrock_config(&server.uri()), GenerationParams::default())
                .unwrap();
        let session = ConversationSession::new(
            std::sync::Arc::new(gateway),
            "cohere.command-text-v14",
        );

        match session.send("hi").await {
            SendOutcome::Replied(reply) => assert_eq!(reply.content, FAILED_RESPONSE_MESSAGE),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let gateway = ScriptedGateway::with_replies(&["unused"]);
        let session = ConversationSession::with_default_model(gateway.clone());

        assert_eq!(
            session.send("").await,
            SendOutcome::Rejected(RejectReason::EmptyContent)
        );
        assert_eq!(
            session.send(" \n\t").await,
            SendOutcome::Rejected(RejectReason::EmptyContent)
        );
        assert!(session.messages().is_empty());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_select_model_resets_history() {
        let gateway = ScriptedGateway::with_replies(&["one", "two"]);
        let session = ConversationSession::with_default_model(gateway.clone());

        session.send("first").await;
        assert_eq!(session.messages().len(), 2);

        session.select_model(TITAN_MODEL);
        assert!(session.messages().is_empty());
        assert_eq!(session.selected_model(), TITAN_MODEL);

        session.send("second").await;
        let calls = gateway.calls();
        assert_eq!(calls[1].0.len(), 1);
        assert_eq!(calls[1].1, TITAN_MODEL);
    }

    #[tokio::test]
    async fn test_streaming_send_reports_fragments() {
        let gateway = ScriptedGateway::with_replies(&["Hello"]);
        let session = ConversationSession::with_default_model(gateway);

        let mut seen = Vec::new();
        let outcome = session
            .send_streaming("hi", |fragment| seen.push(fragment.to_string()))
            .await;

        assert_eq!(seen.concat(), "Hello");
        match outcome {
            SendOutcome::Replied(reply) => assert_eq!(reply.content, "Hello"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_streaming_send_splits_multibyte_reply() {
        let gateway = ScriptedGateway::with_replies(&["こんにちは"]);
        let session = ConversationSession::with_default_model(gateway);

        let mut seen = Vec::new();
        session
            .send_streaming("hi", |fragment| seen.push(fragment.to_string()))
            .await;

        assert_eq!(seen, vec!["こん".to_string(), "にちは".to_string()]);
    }

    #[tokio::test]
    async fn test_error_then_recovery() {
        let gateway = ScriptedGateway::new();
        gateway.push_error(ProviderError::timeout("scripted", "slow"));
        let session = ConversationSession::with_default_model(gateway.clone());

        session.send("hi").await;
        assert_eq!(session.messages()[1].content, FAILED_RESPONSE_MESSAGE);

        // Failed turns stay in the history sent upstream
        session.send("again").await;
        assert_eq!(gateway.calls()[1].0.len(), 3);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let session = ConversationSession::with_default_model(ScriptedGateway::new());
        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["selectedModel"], bedrock_chat::DEFAULT_MODEL_ID);
        assert_eq!(value["isLoading"], false);
        assert!(value["messages"].as_array().unwrap().is_empty());
    }
}
