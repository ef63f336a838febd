//! Server configuration sourced from the environment.

use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable naming the socket address to bind.
const BIND_ADDR_VAR: &str = "BIND_ADDR";
/// Environment variable overriding the check-in verification delay, in
/// milliseconds.
const RELEASE_DELAY_MS_VAR: &str = "RELEASE_DELAY_MS";

/// Default bind address when [`BIND_ADDR_VAR`] is unset.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
    8080,
);
/// Default verification delay, matching the demo's two-second timer.
const DEFAULT_RELEASE_DELAY: Duration = Duration::from_secs(2);

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    release_delay: Duration,
}

impl ServerConfig {
    /// Construct a configuration with explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, release_delay: Duration) -> Self {
        Self {
            bind_addr,
            release_delay,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Unset variables fall back to defaults; present but malformed values
    /// fail startup rather than being silently ignored.
    pub fn from_env() -> std::io::Result<Self> {
        Ok(Self::new(
            parse_bind_addr(std::env::var(BIND_ADDR_VAR).ok())?,
            parse_release_delay(std::env::var(RELEASE_DELAY_MS_VAR).ok())?,
        ))
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Simulated verification delay applied before funds release.
    #[must_use]
    pub fn release_delay(&self) -> Duration {
        self.release_delay
    }
}

fn parse_bind_addr(value: Option<String>) -> std::io::Result<SocketAddr> {
    match value {
        None => Ok(DEFAULT_BIND_ADDR),
        Some(raw) => raw.parse().map_err(|e| {
            std::io::Error::other(format!("invalid {BIND_ADDR_VAR} value {raw:?}: {e}"))
        }),
    }
}

fn parse_release_delay(value: Option<String>) -> std::io::Result<Duration> {
    match value {
        None => Ok(DEFAULT_RELEASE_DELAY),
        Some(raw) => {
            let millis: u64 = raw.parse().map_err(|e| {
                std::io::Error::other(format!("invalid {RELEASE_DELAY_MS_VAR} value {raw:?}: {e}"))
            })?;
            Ok(Duration::from_millis(millis))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;

    #[test]
    fn absent_values_fall_back_to_defaults() {
        let addr = parse_bind_addr(None).expect("default address");
        assert_eq!(addr, DEFAULT_BIND_ADDR);

        let delay = parse_release_delay(None).expect("default delay");
        assert_eq!(delay, Duration::from_secs(2));
    }

    #[test]
    fn explicit_values_are_parsed() {
        let addr = parse_bind_addr(Some("127.0.0.1:9090".into())).expect("valid address");
        assert_eq!(addr.port(), 9090);

        let delay = parse_release_delay(Some("250".into())).expect("valid delay");
        assert_eq!(delay, Duration::from_millis(250));
    }

    #[test]
    fn malformed_values_fail_startup() {
        assert!(parse_bind_addr(Some("not-an-address".into())).is_err());
        assert!(parse_release_delay(Some("soon".into())).is_err());
    }
}
