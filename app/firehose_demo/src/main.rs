use framework::asset::asset_path;
use framework::exception::CoreRsResult;
use framework::firehose::client::FirehoseClient;
use framework::json;
use framework::log;
use tracing::info;

use crate::config::AppConfig;
use crate::record::ExampleEvents;

mod config;
mod delivery;
mod record;

#[tokio::main]
async fn main() -> CoreRsResult<()> {
    log::init();

    let config: AppConfig = json::load_file(&asset_path("assets/conf.json")?)?;

    let client = FirehoseClient::new(&config.firehose).await?;

    log::start_action("deliver", async {
        let summary = delivery::run(&client, &mut ExampleEvents::default(), &config.delivery_loop()).await;
        info!(sent = summary.sent, failed = summary.failed, "delivery finished");
        Ok(())
    })
    .await;

    Ok(())
}
