//! Per-process configuration loaded from environment variables.
//!
//! | Variable | Used by | Default |
//! |---|---|---|
//! | `LISTEN_ADDR` | every service | `0.0.0.0:50051` .. `0.0.0.0:50054` |
//! | `USER_SERVICE_ADDR` | order, review | required |
//! | `ORDER_SERVICE_ADDR` | payment, review | required |
//!
//! Dependency addresses may be `host:port` or a full `http://` URL. They are
//! read once at startup.

use std::fmt::{self, Display};
use std::net::SocketAddr;
use thiserror::Error;

/// The four deployable services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Identity,
    Order,
    Payment,
    Review,
}

impl ServiceKind {
    pub fn default_listen_addr(self) -> &'static str {
        match self {
            ServiceKind::Identity => "0.0.0.0:50051",
            ServiceKind::Order => "0.0.0.0:50052",
            ServiceKind::Payment => "0.0.0.0:50053",
            ServiceKind::Review => "0.0.0.0:50054",
        }
    }

    /// Services this one calls.
    pub fn dependencies(self) -> &'static [Dependency] {
        match self {
            ServiceKind::Identity => &[],
            ServiceKind::Order => &[Dependency::Identity],
            ServiceKind::Payment => &[Dependency::Order],
            ServiceKind::Review => &[Dependency::Identity, Dependency::Order],
        }
    }
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceKind::Identity => "identity-service",
            ServiceKind::Order => "order-service",
            ServiceKind::Payment => "payment-service",
            ServiceKind::Review => "review-service",
        })
    }
}

/// A service another service calls, addressed through one env variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Identity,
    Order,
}

impl Dependency {
    pub fn env_var(self) -> &'static str {
        match self {
            Dependency::Identity => "USER_SERVICE_ADDR",
            Dependency::Order => "ORDER_SERVICE_ADDR",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{service} requires {var} to be set")]
    Missing {
        service: ServiceKind,
        var: &'static str,
    },

    #[error("LISTEN_ADDR {value:?} is not a socket address: {source}")]
    InvalidListenAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub kind: ServiceKind,
    pub listen_addr: SocketAddr,
    identity_addr: Option<String>,
    order_addr: Option<String>,
}

impl ServiceConfig {
    /// Loads the configuration of `kind` from the process environment.
    pub fn from_env(kind: ServiceKind) -> Result<Self, ConfigError> {
        Self::from_lookup(kind, |var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup(
        kind: ServiceKind,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let listen = read("LISTEN_ADDR").unwrap_or_else(|| kind.default_listen_addr().to_string());
        let listen_addr = listen
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: listen.clone(),
                source,
            })?;

        let mut config = Self {
            kind,
            listen_addr,
            identity_addr: None,
            order_addr: None,
        };
        for &dependency in kind.dependencies() {
            let addr = read(dependency.env_var()).ok_or(ConfigError::Missing {
                service: kind,
                var: dependency.env_var(),
            })?;
            match dependency {
                Dependency::Identity => config.identity_addr = Some(addr),
                Dependency::Order => config.order_addr = Some(addr),
            }
        }
        Ok(config)
    }

    /// Address of `dependency`. Fails if this service does not use it.
    pub fn dependency_addr(&self, dependency: Dependency) -> Result<&str, ConfigError> {
        let addr = match dependency {
            Dependency::Identity => self.identity_addr.as_deref(),
            Dependency::Order => self.order_addr.as_deref(),
        };
        addr.ok_or(ConfigError::Missing {
            service: self.kind,
            var: dependency.env_var(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_default_listen_addrs() {
        let config = ServiceConfig::from_lookup(ServiceKind::Identity, env(&[])).unwrap();
        assert_eq!(config.listen_addr.port(), 50051);

        let config = ServiceConfig::from_lookup(
            ServiceKind::Review,
            env(&[
                ("USER_SERVICE_ADDR", "localhost:50051"),
                ("ORDER_SERVICE_ADDR", "localhost:50052"),
            ]),
        )
        .unwrap();
        assert_eq!(config.listen_addr.port(), 50054);
        assert_eq!(
            config.dependency_addr(Dependency::Identity).unwrap(),
            "localhost:50051"
        );
        assert_eq!(
            config.dependency_addr(Dependency::Order).unwrap(),
            "localhost:50052"
        );
    }

    #[test]
    fn test_missing_dependency_fails() {
        let err = ServiceConfig::from_lookup(ServiceKind::Payment, env(&[])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                var: "ORDER_SERVICE_ADDR",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "payment-service requires ORDER_SERVICE_ADDR to be set"
        );

        let err = ServiceConfig::from_lookup(
            ServiceKind::Order,
            env(&[("USER_SERVICE_ADDR", "  ")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_listen_addr_override_and_validation() {
        let config = ServiceConfig::from_lookup(
            ServiceKind::Identity,
            env(&[("LISTEN_ADDR", "127.0.0.1:9000")]),
        )
        .unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9000");

        let err = ServiceConfig::from_lookup(
            ServiceKind::Identity,
            env(&[("LISTEN_ADDR", "not-an-addr")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidListenAddr { .. }));
    }

    #[test]
    fn test_unused_dependency_is_reported() {
        let config = ServiceConfig::from_lookup(
            ServiceKind::Payment,
            env(&[("ORDER_SERVICE_ADDR", "http://order:50052")]),
        )
        .unwrap();
        assert!(config.dependency_addr(Dependency::Identity).is_err());
    }
}
