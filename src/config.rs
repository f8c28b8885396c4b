use std::net::{Ipv4Addr, SocketAddr};

pub const HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const PORT: u16 = 8888;

/// Process settings. The stub takes no flags or environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((HOST, PORT)),
        }
    }
}
