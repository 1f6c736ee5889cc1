use tracing::warn;

pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub data_dir: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_HTTP_PORT: u16 = 8080;

    pub fn from_env() -> Self {
        let host = std::env::var("ASTRO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let http_port = std::env::var("ASTRO_HTTP_PORT")
            .unwrap_or_else(|_| Self::DEFAULT_HTTP_PORT.to_string())
            .parse::<u16>()
            .unwrap_or_else(|_| {
                warn!(
                    "ASTRO_HTTP_PORT is not a valid port, falling back to {}",
                    Self::DEFAULT_HTTP_PORT
                );
                Self::DEFAULT_HTTP_PORT
            });
        Self {
            host,
            http_port,
            data_dir: std::env::var("ASTRO_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            allowed_origins: std::env::var("ASTRO_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }
}
