// Common utilities for integration tests

use mydex_client::prelude::*;

pub const TOKEN_PATH: &str = "/oauth2/token";
pub const CLIENT_ID: &str = "abcd1234-abcd-1234-abcd-123456abcdef";
pub const CLIENT_SECRET: &str = "s3cret/with:reserved";

/// Builds a configuration whose token and resource endpoints all point at `server_url`
pub fn test_config(server_url: &str, scope: &str) -> Config {
    setup_logger();
    Config {
        credentials: Credentials::new(CLIENT_ID, CLIENT_SECRET),
        oauth: OAuthConfig {
            token_endpoint: format!("{server_url}{TOKEN_PATH}"),
            scope: scope.to_string(),
        },
        rest_api: RestApiConfig {
            mrd_base_url: format!("{server_url}/mrd"),
            pds_base_url: format!("{server_url}/"),
            timeout: 5,
        },
        member: MemberConfig {
            uid: "1234".to_string(),
            key: "ABCDEFGHIJKLMNOP123456789".to_string(),
            connection_id: "1234-45678".to_string(),
            connection_nid: "45678".to_string(),
            connection_token: "abcdefghijklmnopqrstuvwxyz123456789".to_string(),
        },
    }
}

/// Registers a token endpoint answering with `access_token` = `token`
pub async fn mock_token(server: &mut mockito::ServerGuard, token: &str) -> mockito::Mock {
    server
        .mock("POST", TOKEN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"{token}","token_type":"bearer","expires_in":3600}}"#
        ))
        .create_async()
        .await
}
