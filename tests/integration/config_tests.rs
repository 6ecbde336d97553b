//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use bedrock_chat::config::{Config, UpstreamMode};
    use bedrock_chat::utils::error::GatewayError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_parses() {
        let example = include_str!("../../config/gateway.yaml.example");
        let file = write_config(example);

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 3000);
        assert_eq!(config.upstream().mode, UpstreamMode::Bedrock);
        assert_eq!(config.generation().max_tokens, 2000);
        assert!(config.server().cors.allows_all_origins());
    }

    #[tokio::test]
    async fn test_remote_mode_config() {
        let file = write_config(
            r#"
upstream:
  mode: remote
  remote_url: "https://chat.example.com/prod/chat"
bedrock:
  aws_region: "not-a-region"
"#,
        );

        // The Bedrock section is not used in remote mode
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.upstream().mode, UpstreamMode::Remote);
    }

    #[tokio::test]
    async fn test_invalid_region_rejected() {
        let file = write_config("bedrock:\n  aws_region: \"mars-north-1\"\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
        assert!(err.to_string().contains("bedrock"));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.yaml")).await.unwrap();
        assert_eq!(config.chat().default_model, bedrock_chat::DEFAULT_MODEL_ID);
    }

    #[tokio::test]
    async fn test_malformed_yaml_rejected() {
        let file = write_config("server: [unterminated");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let mut config = Config::default();
        config.gateway.chat.merge_consecutive_roles = true;
        config.gateway.logging.json = true;

        let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert!(reparsed.chat().merge_consecutive_roles);
        assert!(reparsed.logging().json);
    }
}
