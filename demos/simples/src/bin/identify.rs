use mydex_client::constants::{DEFAULT_RETURN_TO, PDX_SCOPE};
use mydex_client::prelude::*;
use mydex_client::utils::config::get_env_or_none;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new().with_scope(PDX_SCOPE);
    let return_to = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RETURN_TO.to_string());

    let mut request = IdentifyRequest::new(
        config.member.connection_nid.clone(),
        &config.member.connection_token,
        return_to,
    );
    if let Some(linking_token) = get_env_or_none::<String>("MYDEX_LINKING_TOKEN") {
        request = request.with_linking_token(linking_token);
    }
    info!("Identify request: {}", request);

    let client = Client::new(config)?;
    match client.identify(&request).await {
        Ok(response) => {
            println!("{}", response.render());
            Ok(())
        }
        Err(e) => {
            error!("Identify request failed: {}", e);
            Err(e.into())
        }
    }
}
