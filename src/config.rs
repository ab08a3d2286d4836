use std::{env, net::SocketAddr, path::PathBuf};

// Runtime configuration, read once at startup. Every value has a
// default so a bare `cargo run` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let data_file = env::var("ANALYTICS_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/analytics.json"));

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], port)),
            data_file,
            static_dir,
        }
    }
}
