use crate::{
	dynamo_util::DynamoEndpoint,
	error::{Error, Result},
};
use std::net::SocketAddr;

pub const DEFAULT_USERS_TABLE: &str = "users";
pub const DEFAULT_CHATS_TABLE: &str = "chats";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// runtime settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
	/// fcm server key
	pub fcm_api_key: String,
	pub users_table: String,
	pub chats_table: String,
	pub listen_addr: SocketAddr,
	pub dynamo: DynamoEndpoint,
}

impl Config {
	/// # Errors
	/// fails if `FCM_API_KEY` is missing or `LISTEN_ADDR` is no socket address
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	fn from_lookup(
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<Self> {
		let fcm_api_key = lookup("FCM_API_KEY")
			.filter(|key| !key.is_empty())
			.ok_or_else(|| {
				Error::Config("FCM_API_KEY not set".to_string())
			})?;

		let listen_addr = lookup("LISTEN_ADDR")
			.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
		let listen_addr = listen_addr.parse().map_err(|_| {
			Error::Config(format!("invalid LISTEN_ADDR: {}", listen_addr))
		})?;

		Ok(Self {
			fcm_api_key,
			users_table: lookup("USERS_TABLE")
				.unwrap_or_else(|| DEFAULT_USERS_TABLE.to_string()),
			chats_table: lookup("CHATS_TABLE")
				.unwrap_or_else(|| DEFAULT_CHATS_TABLE.to_string()),
			listen_addr,
			dynamo: DynamoEndpoint::from_lookup(&lookup),
		})
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::*;
	use pretty_assertions::assert_eq;
	use std::collections::HashMap;

	fn lookup(
		vars: &[(&str, &str)],
	) -> impl Fn(&str) -> Option<String> {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect();
		move |key| vars.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let config =
			Config::from_lookup(lookup(&[("FCM_API_KEY", "key")]))
				.unwrap();

		assert_eq!(config.fcm_api_key, "key");
		assert_eq!(config.users_table, "users");
		assert_eq!(config.chats_table, "chats");
		assert_eq!(config.listen_addr.port(), 8080);
		assert_eq!(config.dynamo, DynamoEndpoint::Aws);
	}

	#[test]
	fn test_overrides() {
		let config = Config::from_lookup(lookup(&[
			("FCM_API_KEY", "key"),
			("USERS_TABLE", "prod-users"),
			("CHATS_TABLE", "prod-chats"),
			("LISTEN_ADDR", "127.0.0.1:9000"),
			("DDB_LOCAL", "1"),
			("DDB_URL", "http://ddb:8000"),
		]))
		.unwrap();

		assert_eq!(
			config.dynamo,
			DynamoEndpoint::Local("http://ddb:8000".to_string())
		);

		assert_eq!(config.users_table, "prod-users");
		assert_eq!(config.chats_table, "prod-chats");
		assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9000");
	}

	#[test]
	fn test_missing_api_key() {
		assert!(Config::from_lookup(lookup(&[])).is_err());
		assert!(
			Config::from_lookup(lookup(&[("FCM_API_KEY", "")])).is_err()
		);
	}

	#[test]
	fn test_invalid_listen_addr() {
		let res = Config::from_lookup(lookup(&[
			("FCM_API_KEY", "key"),
			("LISTEN_ADDR", "nowhere"),
		]));

		assert!(matches!(res, Err(Error::Config(_))));
	}
}
