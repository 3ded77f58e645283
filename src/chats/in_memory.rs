use super::{Chat, ChatDB};
use crate::error::Result;
use async_trait::async_trait;
use std::{collections::HashMap, iter::FromIterator, sync::Arc};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryChatDB {
	pub db: Arc<Mutex<HashMap<String, Chat>>>,
}

impl FromIterator<Chat> for InMemoryChatDB {
	fn from_iter<T: IntoIterator<Item = Chat>>(iter: T) -> Self {
		let chats = iter
			.into_iter()
			.map(|chat| (chat.id.clone(), chat))
			.collect();

		Self {
			db: Arc::new(Mutex::new(chats)),
		}
	}
}

#[async_trait]
impl ChatDB for InMemoryChatDB {
	async fn get_chat(&self, id: &str) -> Result<Option<Chat>> {
		Ok(self.db.lock().await.get(id).cloned())
	}
}
