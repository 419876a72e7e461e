//! Listener address. The service always listens on port 4000 on every
//! interface; there are no flags, environment variables or config files.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: PORT,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_port_4000_on_all_interfaces() {
        assert_eq!(ServerConfig::default().addr().to_string(), "0.0.0.0:4000");
    }
}
