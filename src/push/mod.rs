mod firebase;

pub use firebase::FcmPushSender;

use crate::error::Result;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

pub const DEFAULT_SOUND: &str = "default";

/// platform specific delivery hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformHints {
	/// android: deliver with high priority
	pub high_priority: bool,
	/// apns: alert sound to play
	pub sound: String,
}

impl PlatformHints {
	/// high priority on android, default alert sound on ios
	#[must_use]
	pub fn alert() -> Self {
		Self {
			high_priority: true,
			sound: DEFAULT_SOUND.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
	pub token: String,
	pub title: String,
	pub body: String,
	pub data: HashMap<String, String>,
	pub hints: PlatformHints,
}

/// delivery of a single notification to the push service
#[async_trait]
pub trait PushSender: Send + Sync {
	async fn send(&self, notification: &Notification) -> Result<()>;
}

#[derive(Clone)]
pub struct PushDispatcher {
	sender: Arc<dyn PushSender>,
}

impl PushDispatcher {
	#[must_use]
	pub fn new(sender: Arc<dyn PushSender>) -> Self {
		Self { sender }
	}

	/// best effort delivery of one notification.
	///
	/// a missing or empty `token` is a silent no-op. every value in `data`
	/// is sent as its string representation. delivery errors are logged
	/// and never returned.
	pub async fn dispatch<I, K, V>(
		&self,
		token: Option<&str>,
		title: &str,
		body: &str,
		data: I,
	) where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: ToString,
	{
		let token = match token.filter(|token| !token.is_empty()) {
			Some(token) => token,
			None => return,
		};

		let notification = Notification {
			token: token.to_string(),
			title: title.to_string(),
			body: body.to_string(),
			data: data
				.into_iter()
				.map(|(key, value)| (key.into(), value.to_string()))
				.collect(),
			hints: PlatformHints::alert(),
		};

		if let Err(e) = self.try_dispatch(&notification).await {
			tracing::warn!("push send failed: {}", e);
		}
	}

	/// # Errors
	/// any error of the push service
	pub async fn try_dispatch(
		&self,
		notification: &Notification,
	) -> Result<()> {
		self.sender.send(notification).await
	}
}
