#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
}

impl ServerConfig {
    /// Bind address from `VOUCHEX_ADDR`, defaulting to the port the service
    /// has always run on.
    pub fn from_env() -> Self {
        let addr =
            std::env::var("VOUCHEX_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        ServerConfig { addr }
    }
}
