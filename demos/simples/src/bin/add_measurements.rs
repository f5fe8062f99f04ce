use mydex_client::constants::ADD_MEASUREMENTS_SCOPE;
use mydex_client::prelude::*;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new().with_scope(ADD_MEASUREMENTS_SCOPE);
    let client = Client::new(config)?;

    let records = vec![MeasurementRecord::new(
        "Mobile",
        "Apple Health Kit",
        "Weight",
        1_648_633_780,
        175.8,
    )];
    info!("Submitting measurements: {:?}", records);

    match client.add_measurements(&records).await {
        Ok(response) => {
            println!("{}", response.render());
            Ok(())
        }
        Err(e) => {
            error!("Adding measurements failed: {}", e);
            Err(e.into())
        }
    }
}
