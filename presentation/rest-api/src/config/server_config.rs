use std::env;

use super::env::parse_or;

const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_or("SERVICE_PORT", DEFAULT_PORT);

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_format_public_interface_address() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 3000,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
