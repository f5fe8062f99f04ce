use mydex_client::prelude::*;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let country_code = std::env::args().nth(1).unwrap_or_else(|| "FR".to_string());
    info!("Starting country lookup for {}", country_code);

    let client = Client::new(Config::for_mrd())?;
    match client.get_country(&country_code).await {
        Ok(response) => {
            println!("{}", response.render());
            Ok(())
        }
        Err(e) => {
            error!("Country lookup failed: {}", e);
            Err(e.into())
        }
    }
}
