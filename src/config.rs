// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server configuration
//!
//! Loaded from environment variables:
//!
//! | Variable | Default |
//! |---|---|
//! | `PACKET_API_LISTEN` | `127.0.0.1:8080` |
//! | `PACKET_API_METADATA_DEVICE` | unset (metadata answers 404) |
//! | `PACKET_API_ISCSI_IQN` | built-in target name |
//! | `PACKET_API_ISCSI_PORTALS` | `10.144.32.8,10.144.48.8` |
//!
//! Empty values count as unset.

use std::net::{IpAddr, SocketAddr};

use crate::domain::{DeviceId, TransportInfo};
use crate::errors::ConfigError;

pub const LISTEN_VAR: &str = "PACKET_API_LISTEN";
pub const METADATA_DEVICE_VAR: &str = "PACKET_API_METADATA_DEVICE";
pub const ISCSI_IQN_VAR: &str = "PACKET_API_ISCSI_IQN";
pub const ISCSI_PORTALS_VAR: &str = "PACKET_API_ISCSI_PORTALS";

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Deployment-time settings of the mock API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds
    pub listen: SocketAddr,
    /// Device whose metadata `/metadata` serves
    pub metadata_device: Option<DeviceId>,
    /// Transport details reported for every attachment
    pub transport: TransportInfo,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8080)),
            metadata_device: None,
            transport: TransportInfo::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let listen_raw = get(LISTEN_VAR).unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen = listen_raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| invalid(LISTEN_VAR, &listen_raw, e))?;

        let metadata_device = get(METADATA_DEVICE_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<DeviceId>()
                    .map_err(|e| invalid(METADATA_DEVICE_VAR, &raw, e))
            })
            .transpose()?;

        let mut transport = TransportInfo::default();
        if let Some(iqn) = get(ISCSI_IQN_VAR) {
            transport.iqn = iqn.trim().to_string();
        }
        if let Some(raw) = get(ISCSI_PORTALS_VAR) {
            transport.endpoints = parse_portals(&raw)?;
        }

        Ok(Self {
            listen,
            metadata_device,
            transport,
        })
    }
}

fn parse_portals(raw: &str) -> Result<[IpAddr; 2], ConfigError> {
    let addrs = raw
        .split(',')
        .map(|part| part.trim().parse::<IpAddr>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(ISCSI_PORTALS_VAR, raw, e))?;
    <[IpAddr; 2]>::try_from(addrs).map_err(|addrs| {
        invalid(
            ISCSI_PORTALS_VAR,
            raw,
            format!("expected exactly 2 addresses, got {}", addrs.len()),
        )
    })
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let device = DeviceId::new();
        let config = load(&[
            (LISTEN_VAR, "0.0.0.0:9090"),
            (METADATA_DEVICE_VAR, &device.to_string()),
            (ISCSI_IQN_VAR, "iqn.2024-01.test:t"),
            (ISCSI_PORTALS_VAR, "192.0.2.1, 192.0.2.2"),
        ])
        .unwrap();
        assert_eq!(config.listen.port(), 9090);
        assert_eq!(config.metadata_device, Some(device));
        assert_eq!(config.transport.iqn, "iqn.2024-01.test:t");
        assert_eq!(config.transport.endpoints[1].to_string(), "192.0.2.2");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = load(&[(METADATA_DEVICE_VAR, ""), (LISTEN_VAR, " ")]).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_rejects_malformed_device_id() {
        let err = load(&[(METADATA_DEVICE_VAR, "device-1")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: METADATA_DEVICE_VAR,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_wrong_portal_count() {
        assert!(load(&[(ISCSI_PORTALS_VAR, "192.0.2.1")]).is_err());
        assert!(load(&[(ISCSI_PORTALS_VAR, "192.0.2.1,192.0.2.2,192.0.2.3")]).is_err());
        assert!(load(&[(ISCSI_PORTALS_VAR, "192.0.2.1,nope")]).is_err());
    }

    #[test]
    fn test_rejects_bad_listen_address() {
        assert!(load(&[(LISTEN_VAR, "localhost")]).is_err());
    }
}
