use mydex_client::application::client::Client;
use mydex_client::application::config::{
    Config, Credentials, MemberConfig, OAuthConfig, RestApiConfig,
};
use mydex_client::error::ErrorKind;

fn test_config() -> Config {
    Config {
        credentials: Credentials::new("client", "secret"),
        oauth: OAuthConfig {
            token_endpoint: "http://localhost/oauth2/token".to_string(),
            scope: "mydex:pdx".to_string(),
        },
        rest_api: RestApiConfig {
            mrd_base_url: "http://localhost/mrd".to_string(),
            pds_base_url: "http://localhost/pds".to_string(),
            timeout: 5,
        },
        member: MemberConfig {
            uid: "1234".to_string(),
            key: "KEY".to_string(),
            connection_id: "1234-45678".to_string(),
            connection_nid: "45678".to_string(),
            connection_token: "token".to_string(),
        },
    }
}

#[test]
fn test_client_keeps_its_config() {
    let config = test_config();
    let client = Client::new(config.clone()).expect("client builds");
    assert_eq!(client.config(), &config);
}

#[test]
fn test_fetch_token_against_unreachable_endpoint() {
    let mut config = test_config();
    // Nothing listens on port 1
    config.oauth.token_endpoint = "http://127.0.0.1:1/oauth2/token".to_string();
    let client = Client::new(config).unwrap();

    let error = tokio_test::block_on(client.fetch_token()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Transport);
}
