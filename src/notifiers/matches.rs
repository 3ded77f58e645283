use super::{NotificationKind, OnCreate, Recipient};
use crate::{error::Result, push::PushDispatcher, users::UserDB};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

pub const MATCH_TITLE: &str = "It's a match! 💕";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCreated {
	/// match document id, taken from the event path
	#[serde(skip)]
	pub id: String,
	pub user_a: String,
	pub user_b: String,
}

/// tells both users of a new match about each other
pub struct MatchNotifier {
	users: Arc<dyn UserDB>,
	dispatcher: PushDispatcher,
}

impl MatchNotifier {
	#[must_use]
	pub fn new(users: Arc<dyn UserDB>, dispatcher: PushDispatcher) -> Self {
		Self { users, dispatcher }
	}
}

#[async_trait]
impl OnCreate for MatchNotifier {
	type Event = MatchCreated;

	#[instrument(skip(self))]
	async fn on_create(&self, event: &MatchCreated) -> Result<()> {
		let (user_a, user_b) = tokio::try_join!(
			self.users.get_user(&event.user_a),
			self.users.get_user(&event.user_b)
		)?;
		let a = Recipient::from(user_a);
		let b = Recipient::from(user_b);

		let data = [
			("type", NotificationKind::Match.as_ref()),
			("matchId", event.id.as_str()),
		];
		let body_a = format!("{} liked you too!", b.name());
		let body_b = format!("{} liked you too!", a.name());

		tokio::join!(
			self.dispatcher.dispatch(a.token(), MATCH_TITLE, &body_a, data),
			self.dispatcher.dispatch(b.token(), MATCH_TITLE, &body_b, data)
		);

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::*;
	use crate::{
		push::testing::{RecordingSender, RejectingSender},
		users::{InMemoryUserDB, User},
	};
	use pretty_assertions::assert_eq;

	fn event() -> MatchCreated {
		MatchCreated {
			id: "m1".to_string(),
			user_a: "a".to_string(),
			user_b: "b".to_string(),
		}
	}

	#[tokio::test]
	async fn test_notifies_both_users() {
		let users: InMemoryUserDB = vec![
			User::new("a").with_name("Alice").with_token("tA"),
			User::new("b").with_token("tB"),
		]
		.into_iter()
		.collect();
		let sender = Arc::new(RecordingSender::default());
		let notifier = MatchNotifier::new(
			Arc::new(users),
			PushDispatcher::new(sender.clone()),
		);

		notifier.on_create(&event()).await.unwrap();

		let mut sent = sender.sent().await;
		sent.sort_by(|x, y| x.token.cmp(&y.token));
		assert_eq!(sent.len(), 2);

		assert_eq!(sent[0].token, "tA");
		assert_eq!(sent[0].title, MATCH_TITLE);
		assert_eq!(sent[0].body, "Someone liked you too!");

		assert_eq!(sent[1].token, "tB");
		assert_eq!(sent[1].title, MATCH_TITLE);
		assert_eq!(sent[1].body, "Alice liked you too!");

		for notification in &sent {
			assert_eq!(notification.data["type"], "match");
			assert_eq!(notification.data["matchId"], "m1");
		}
	}

	#[tokio::test]
	async fn test_missing_user_still_notifies_other() {
		let users: InMemoryUserDB =
			vec![User::new("b").with_name("Bea").with_token("tB")]
				.into_iter()
				.collect();
		let sender = Arc::new(RecordingSender::default());
		let notifier = MatchNotifier::new(
			Arc::new(users),
			PushDispatcher::new(sender.clone()),
		);

		notifier.on_create(&event()).await.unwrap();

		let sent = sender.sent().await;
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].token, "tB");
		assert_eq!(sent[0].body, "Someone liked you too!");
	}

	#[tokio::test]
	async fn test_failed_delivery_does_not_affect_other() {
		let users: InMemoryUserDB = vec![
			User::new("a").with_name("Alice").with_token("tA"),
			User::new("b").with_name("Bea").with_token("tB"),
		]
		.into_iter()
		.collect();
		let sender = Arc::new(RejectingSender {
			token: "tA".to_string(),
			inner: RecordingSender::default(),
		});
		let notifier = MatchNotifier::new(
			Arc::new(users),
			PushDispatcher::new(sender.clone()),
		);

		notifier.on_create(&event()).await.unwrap();

		let sent = sender.inner.sent().await;
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].token, "tB");
		assert_eq!(sent[0].body, "Alice liked you too!");
	}

	#[test]
	fn test_event_from_json() {
		let event: MatchCreated =
			serde_json::from_str(r#"{"userA":"a","userB":"b"}"#).unwrap();

		assert_eq!(
			event,
			MatchCreated {
				id: String::new(),
				user_a: "a".to_string(),
				user_b: "b".to_string(),
			}
		);
	}
}
