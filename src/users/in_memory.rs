use super::{User, UserDB};
use crate::error::Result;
use async_trait::async_trait;
use std::{collections::HashMap, iter::FromIterator, sync::Arc};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserDB {
	pub db: Arc<Mutex<HashMap<String, User>>>,
}

impl FromIterator<User> for InMemoryUserDB {
	fn from_iter<T: IntoIterator<Item = User>>(iter: T) -> Self {
		let users = iter
			.into_iter()
			.map(|user| (user.id.clone(), user))
			.collect();

		Self {
			db: Arc::new(Mutex::new(users)),
		}
	}
}

#[async_trait]
impl UserDB for InMemoryUserDB {
	async fn get_user(&self, id: &str) -> Result<Option<User>> {
		let db = self.db.lock().await;
		Ok(db.get(id).cloned())
	}
}
