use std::env;
use std::error::Error;

use log::debug;

use recipe_import::config::ImportConfig;
use recipe_import::import_recipe_with_config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    let config = ImportConfig::load()?;
    let recipe = import_recipe_with_config(url, &config).await?;
    debug!("{recipe:#?}");

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
