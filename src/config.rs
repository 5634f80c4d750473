use std::net::SocketAddr;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// Base URL of the venue REST API, without the `/venues` suffix.
    #[clap(env, long, default_value = "http://127.0.0.1:8000/api")]
    pub api_base_url: String,

    #[clap(env, long, default_value = "127.0.0.1:3000")]
    pub bind_addr: SocketAddr,

    /// Comma separated list of origins allowed by CORS.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let config = Config::try_parse_from(["venue-detail-page"]).expect("parse defaults");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "venue-detail-page",
            "--api-base-url",
            "https://venues.example.com/api",
            "--bind-addr",
            "0.0.0.0:8080",
        ])
        .expect("parse flags");
        assert_eq!(config.api_base_url, "https://venues.example.com/api");
        assert_eq!(config.bind_addr.port(), 8080);
    }
}
