mod dynamodb;
mod in_memory;

pub use dynamodb::DynamoUserDB;
pub use in_memory::InMemoryUserDB;

use crate::error::Result;
use async_trait::async_trait;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct User {
	pub id: String,
	pub name: Option<String>,
	/// absent if the user never registered a device
	pub fcm_token: Option<String>,
}

impl User {
	#[must_use]
	pub fn new(id: &str) -> Self {
		Self {
			id: id.to_string(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_name(mut self, name: &str) -> Self {
		self.name = Some(name.to_string());
		self
	}

	#[must_use]
	pub fn with_token(mut self, token: &str) -> Self {
		self.fcm_token = Some(token.to_string());
		self
	}
}

/// read access to the users collection
#[async_trait]
pub trait UserDB: Send + Sync {
	/// `Ok(None)` if no user document exists for `id`
	async fn get_user(&self, id: &str) -> Result<Option<User>>;
}
