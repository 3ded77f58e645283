use super::{NotificationKind, OnCreate, Recipient};
use crate::{
	chats::ChatDB, error::Result, push::PushDispatcher, users::UserDB,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

/// longest message text shown unmodified in a notification
pub const PREVIEW_MAX_CHARS: usize = 80;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreated {
	/// parent chat id, taken from the event path
	#[serde(skip)]
	pub chat_id: String,
	/// message document id, taken from the event path
	#[serde(skip)]
	pub id: String,
	pub sender_id: String,
	pub text: String,
}

/// shortens `text` to at most `PREVIEW_MAX_CHARS` characters
#[must_use]
pub fn preview(text: &str) -> String {
	if text.chars().count() <= PREVIEW_MAX_CHARS {
		return text.to_string();
	}

	let mut preview: String = text
		.chars()
		.take(PREVIEW_MAX_CHARS - ELLIPSIS.len())
		.collect();
	preview.push_str(ELLIPSIS);
	preview
}

/// forwards a new chat message to the other participant
pub struct MessageNotifier {
	users: Arc<dyn UserDB>,
	chats: Arc<dyn ChatDB>,
	dispatcher: PushDispatcher,
}

impl MessageNotifier {
	#[must_use]
	pub fn new(
		users: Arc<dyn UserDB>,
		chats: Arc<dyn ChatDB>,
		dispatcher: PushDispatcher,
	) -> Self {
		Self {
			users,
			chats,
			dispatcher,
		}
	}
}

#[async_trait]
impl OnCreate for MessageNotifier {
	type Event = MessageCreated;

	#[instrument(skip(self, event), fields(chat = %event.chat_id))]
	async fn on_create(&self, event: &MessageCreated) -> Result<()> {
		let chat = match self.chats.get_chat(&event.chat_id).await? {
			Some(chat) => chat,
			None => {
				tracing::debug!("chat not found");
				return Ok(());
			}
		};

		let recipient_id = match chat.recipient_of(&event.sender_id) {
			Some(id) => id,
			None => {
				tracing::debug!("no recipient in chat");
				return Ok(());
			}
		};

		let sender =
			Recipient::from(self.users.get_user(&event.sender_id).await?);
		let recipient =
			Recipient::from(self.users.get_user(recipient_id).await?);

		self.dispatcher
			.dispatch(
				recipient.token(),
				sender.name(),
				&preview(&event.text),
				[
					("type", NotificationKind::Message.as_ref()),
					("chatId", event.chat_id.as_str()),
				],
			)
			.await;

		Ok(())
	}
}
