#[derive(Debug, Clone)]
pub struct Config {
    pub zouk: SourceConfig,
    pub wynn: SourceConfig,
    pub tao: SourceConfig,
    pub liv: SourceConfig,
    pub database_url: String,
}

/// Everything an adapter needs that is deployment-specific: where the feed
/// lives and which club names to throw away.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub events_url: String,
    pub deny_list: Vec<String>,
}
