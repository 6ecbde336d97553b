//! HTTP surface integration tests
//!
//! Exercises the actix application end to end, including a Bedrock gateway
//! talking to a mocked runtime.

#[cfg(test)]
mod tests {
    use crate::common::eventstream;
    use crate::common::fixtures::{CLAUDE_MODEL, JURASSIC_MODEL};
    use crate::common::{ResponseFactory, ScriptedGateway, bedrock_config};
    use actix_web::{test, web};
    use bedrock_chat::server::server::HttpServer;
    use bedrock_chat::server::state::AppState;
    use bedrock_chat::utils::error::UPSTREAM_FAILURE;
    use bedrock_chat::{BedrockGateway, Config, GenerationParams};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bedrock_state(server: &MockServer) -> web::Data<AppState> {
        let mut config = Config::default();
        config.gateway.bedrock = bedrock_config(&server.uri());
        let gateway =
            BedrockGateway::new(config.bedrock(), GenerationParams::default()).unwrap();
        web::Data::new(AppState::new(config, Arc::new(gateway)))
    }

    #[actix_web::test]
    async fn test_chat_through_bedrock() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"/invoke$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ResponseFactory::claude("Hi there")))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(bedrock_state(&server))).await;
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "modelId": CLAUDE_MODEL
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "response": "Hi there", "modelId": CLAUDE_MODEL }));
    }

    #[actix_web::test]
    async fn test_stream_through_bedrock() {
        let server = MockServer::start().await;
        let frames = eventstream::body(vec![
            eventstream::claude_delta("Hel"),
            eventstream::claude_delta("lo"),
            eventstream::claude_stop(),
        ]);
        Mock::given(method("POST"))
            .and(path_regex(r"/invoke-with-response-stream$"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(frames))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(bedrock_state(&server))).await;
        let req = test::TestRequest::post()
            .uri("/api/chat/stream")
            .set_json(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "modelId": CLAUDE_MODEL
            }))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "data: {\"text\":\"Hel\"}\n\ndata: {\"text\":\"lo\"}\n\ndata: [DONE]\n\n"
        );
    }

    #[actix_web::test]
    async fn test_stream_exception_becomes_error_event() {
        let server = MockServer::start().await;
        let frames = eventstream::body(vec![
            eventstream::claude_delta("Hel"),
            eventstream::exception("modelStreamErrorException", "model crashed"),
        ]);
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(frames))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(bedrock_state(&server))).await;
        let req = test::TestRequest::post()
            .uri("/api/chat/stream")
            .set_json(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "modelId": CLAUDE_MODEL
            }))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = std::str::from_utf8(&body).unwrap();

        assert!(text.starts_with("data: {\"text\":\"Hel\"}\n\n"));
        assert!(text.contains("event: error\n"));
        assert!(!text.contains("[DONE]"));
    }

    #[actix_web::test]
    async fn test_jurassic_stream_is_400() {
        let server = MockServer::start().await;
        let app = test::init_service(HttpServer::create_app(bedrock_state(&server))).await;
        let req = test::TestRequest::post()
            .uri("/api/chat/stream")
            .set_json(json!({
                "messages": [{ "role": "user", "content": "hi" }],
                "modelId": JURASSIC_MODEL
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_bedrock_failure_is_500_with_details() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "The security token included in the request is invalid."
            })))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(bedrock_state(&server))).await;
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(json!({ "message": "hi" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], UPSTREAM_FAILURE);
        assert!(body["details"].as_str().unwrap().contains("security token"));
    }

    #[actix_web::test]
    async fn test_cors_preflight() {
        let state = web::Data::new(AppState::new(Config::default(), ScriptedGateway::new()));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/chat")
            .insert_header(("Origin", "http://localhost:5173"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(
            resp.headers()
                .contains_key("access-control-allow-origin")
        );
    }

    #[actix_web::test]
    async fn test_server_header() {
        let state = web::Data::new(AppState::new(Config::default(), ScriptedGateway::new()));
        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.headers().get("server").unwrap(), "Bedrock-Chat");
    }
}
