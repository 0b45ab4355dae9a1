use ravewatch::aggregator;
use ravewatch::config::env_loader::load_config;
use ravewatch::store::postgres::PgEventStore;
use ravewatch::sync;
use ravewatch::telemetry;
use ravewatch::venues::liv::LivAdapter;
use ravewatch::venues::tao::TaoGroupAdapter;
use ravewatch::venues::wynn::WynnAdapter;
use ravewatch::venues::zouk::ZoukAdapter;
use ravewatch::venues::Source;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _loki = telemetry::init().await;

    let config = load_config();

    let store = match PgEventStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(err) => {
            error!(%err, "could not open the event store");
            process::exit(1);
        }
    };

    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(ZoukAdapter::new(config.zouk)),
        Box::new(WynnAdapter::new(config.wynn)),
        Box::new(TaoGroupAdapter::new(config.tao)),
        Box::new(LivAdapter::new(config.liv)),
    ];

    let harvest = aggregator::collect_all(&sources).await;

    match sync::replace_all(&harvest.events, &store).await {
        Ok(report) => {
            info!(
                deleted = report.deleted,
                inserted = report.inserted,
                "event collection replaced"
            );
        }
        Err(err) => {
            error!(%err, "sync failed, skipping this cycle");
            process::exit(1);
        }
    }
}
