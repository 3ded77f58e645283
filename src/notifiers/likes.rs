use super::{NotificationKind, OnCreate, Recipient};
use crate::{error::Result, push::PushDispatcher, users::UserDB};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

pub const LIKE_TITLE: &str = "New like 💗";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCreated {
	/// like document id, taken from the event path
	#[serde(skip)]
	pub id: String,
	pub from_user_id: String,
	pub to_user_id: String,
}

/// tells the liked user who liked them
pub struct LikeNotifier {
	users: Arc<dyn UserDB>,
	dispatcher: PushDispatcher,
}

impl LikeNotifier {
	#[must_use]
	pub fn new(users: Arc<dyn UserDB>, dispatcher: PushDispatcher) -> Self {
		Self { users, dispatcher }
	}
}

#[async_trait]
impl OnCreate for LikeNotifier {
	type Event = LikeCreated;

	#[instrument(skip(self))]
	async fn on_create(&self, event: &LikeCreated) -> Result<()> {
		let (from, to) = tokio::try_join!(
			self.users.get_user(&event.from_user_id),
			self.users.get_user(&event.to_user_id)
		)?;
		let from = Recipient::from(from);
		let to = Recipient::from(to);

		self.dispatcher
			.dispatch(
				to.token(),
				LIKE_TITLE,
				&format!("{} likes you!", from.name()),
				[
					("type", NotificationKind::Like.as_ref()),
					("userId", event.from_user_id.as_str()),
				],
			)
			.await;

		Ok(())
	}
}
