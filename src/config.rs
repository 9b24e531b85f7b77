/// Listener settings. The port is the only thing that ever changes (tests bind
/// an ephemeral one); production always runs on the fixed marketplace port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 9999;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    // Wildcard host is shown as localhost in the banner
    pub fn public_url(&self) -> String {
        let host = if self.host == DEFAULT_HOST { "localhost" } else { self.host.as_str() };
        format!("http://{}:{}", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_9999() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr(), ("0.0.0.0", 9999));
        assert_eq!(cfg.public_url(), "http://localhost:9999");
    }

    #[test]
    fn explicit_host_is_shown_verbatim() {
        let cfg = ServerConfig { host: "127.0.0.1".to_string(), port: 0 };
        assert_eq!(cfg.public_url(), "http://127.0.0.1:0");
    }
}
