use crate::config::model::{Config, SourceConfig};
use std::env;

const ZOUK_EVENTS_URL: &str =
    "https://zoukgrouplv.com/wp-admin/admin-ajax.php?action=uvwp_loadmoreevents&venuegroup=all&caldate=";
const WYNN_EVENTS_URL: &str = "https://www.wynnsocial.com/events/";
const TAO_EVENTS_URL: &str = "https://taogroup.com/wp-json/wp/v2/events?event_city%5B%5D=81&filter%5Bmeta_compare%5D=%3E%3D&filter%5Bmeta_key%5D=event_start_date&filter%5Bmeta_value%5D=1720422000000&filter%5Border%5D=asc&filter%5Borderby%5D=meta_value";
const LIV_EVENTS_URL: &str =
    "https://www.livnightclub.com/wp-admin/admin-ajax.php?action=uvpx&uvaction=uwspx_loadevents&venue=livlasvegas&date=";

const WYNN_DENY_LIST: &str = "wynn field club,festival,art of the wild";
const TAO_DENY_LIST: &str = "lavo italian restaurant";

pub fn load_config() -> Config {
    Config {
        zouk: load_source_config("ZOUK", ZOUK_EVENTS_URL, ""),
        wynn: load_source_config("WYNN", WYNN_EVENTS_URL, WYNN_DENY_LIST),
        tao: load_source_config("TAO", TAO_EVENTS_URL, TAO_DENY_LIST),
        liv: load_source_config("LIV", LIV_EVENTS_URL, ""),
        database_url: env::var("DATABASE_URL")
            .unwrap_or_else(|_| panic!("DATABASE_URL must be set.")),
    }
}

fn load_source_config(prefix: &str, default_url: &str, default_deny: &str) -> SourceConfig {
    let events_url = env::var(format!("{}_EVENTS_URL", prefix))
        .unwrap_or_else(|_| default_url.to_string());
    let deny_list = parse_deny_list(
        &env::var(format!("{}_DENY_LIST", prefix)).unwrap_or_else(|_| default_deny.to_string()),
    );

    SourceConfig {
        events_url,
        deny_list,
    }
}

fn parse_deny_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|substring| !substring.is_empty())
        .map(str::to_lowercase)
        .collect()
}
