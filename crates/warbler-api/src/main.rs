//! Warbler API server binary
//!
//! Configuration comes from the environment; see `ApiConfig::from_env`.

use warbler_api::ApiConfig;
use warbler_core::logging_facility;

#[tokio::main]
async fn main() {
    let config = ApiConfig::from_env();
    logging_facility::init(config.log_profile);

    if let Err(e) = warbler_api::serve(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
