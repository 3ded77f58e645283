//! handlers for document creation events. each one reads the users it
//! needs and hands the resulting notifications to the `PushDispatcher`.

pub mod likes;
pub mod matches;
pub mod messages;

pub use likes::{LikeCreated, LikeNotifier};
pub use matches::{MatchCreated, MatchNotifier};
pub use messages::{MessageCreated, MessageNotifier};

use crate::{
	chats::ChatDB,
	error::Result,
	push::PushDispatcher,
	users::{User, UserDB},
};
use async_trait::async_trait;
use std::sync::Arc;
use strum::AsRefStr;

/// shown in place of a user without a (non empty) name
pub const PLACEHOLDER_NAME: &str = "Someone";

/// value of the `type` entry in a notification's data
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
	Match,
	Message,
	Like,
}

/// handler invoked once per created document
#[async_trait]
pub trait OnCreate: Send + Sync {
	type Event: Send + Sync;

	/// # Errors
	/// failed reads are returned, delivery failures never are
	async fn on_create(&self, event: &Self::Event) -> Result<()>;
}

/// a possibly missing user document as seen by a notification
#[derive(Debug)]
pub struct Recipient(Option<User>);

impl From<Option<User>> for Recipient {
	fn from(user: Option<User>) -> Self {
		Self(user)
	}
}

impl Recipient {
	#[must_use]
	pub fn name(&self) -> &str {
		self.0
			.as_ref()
			.and_then(|user| user.name.as_deref())
			.filter(|name| !name.is_empty())
			.unwrap_or(PLACEHOLDER_NAME)
	}

	#[must_use]
	pub fn token(&self) -> Option<&str> {
		self.0.as_ref().and_then(|user| user.fcm_token.as_deref())
	}
}

/// all handlers, sharing one set of stores and one dispatcher
pub struct Notifiers {
	pub matches: Arc<MatchNotifier>,
	pub messages: Arc<MessageNotifier>,
	pub likes: Arc<LikeNotifier>,
}

impl Notifiers {
	#[must_use]
	pub fn new(
		users: Arc<dyn UserDB>,
		chats: Arc<dyn ChatDB>,
		dispatcher: PushDispatcher,
	) -> Self {
		Self {
			matches: Arc::new(MatchNotifier::new(
				users.clone(),
				dispatcher.clone(),
			)),
			messages: Arc::new(MessageNotifier::new(
				users.clone(),
				chats,
				dispatcher.clone(),
			)),
			likes: Arc::new(LikeNotifier::new(users, dispatcher)),
		}
	}
}
