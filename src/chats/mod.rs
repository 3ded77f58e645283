mod dynamodb;
mod in_memory;

pub use dynamodb::DynamoChatDB;
pub use in_memory::InMemoryChatDB;

use crate::error::Result;
use async_trait::async_trait;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Chat {
	pub id: String,
	/// participant user ids, two for every well formed chat
	pub users: Vec<String>,
}

impl Chat {
	#[must_use]
	pub fn new(id: &str, users: &[&str]) -> Self {
		Self {
			id: id.to_string(),
			users: users.iter().map(|u| (*u).to_string()).collect(),
		}
	}

	/// the first participant that is not `sender_id`
	#[must_use]
	pub fn recipient_of(&self, sender_id: &str) -> Option<&str> {
		self.users
			.iter()
			.map(String::as_str)
			.find(|user| *user != sender_id)
	}
}

/// read access to the chats collection
#[async_trait]
pub trait ChatDB: Send + Sync {
	/// `Ok(None)` if no chat document exists for `id`
	async fn get_chat(&self, id: &str) -> Result<Option<Chat>>;
}
