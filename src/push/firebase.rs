use super::{Notification, PushSender};
use crate::error::{Error, Result};
use async_trait::async_trait;
use fcm::{
	Client, ErrorReason, FcmResponse, Message, MessageBuilder,
	NotificationBuilder, Priority,
};

/// sends notifications through the fcm http api
pub struct FcmPushSender {
	client: Client,
	api_key: String,
}

impl FcmPushSender {
	#[must_use]
	pub fn new(api_key: String) -> Self {
		Self {
			client: Client::new(),
			api_key,
		}
	}

	fn message<'a>(
		&'a self,
		notification: &'a Notification,
	) -> Result<Message<'a>> {
		let mut payload = NotificationBuilder::new();

		//note: title/body are what ios shows, sound only applies to apns
		payload.title(notification.title.as_str());
		payload.body(notification.body.as_str());
		payload.sound(notification.hints.sound.as_str());

		let mut builder =
			MessageBuilder::new(&self.api_key, &notification.token);
		builder.data(&notification.data)?;
		builder.notification(payload.finalize());
		if notification.hints.high_priority {
			builder.priority(Priority::High);
		}

		Ok(builder.finalize())
	}
}

// a rejected token still answers with 200, the reason is per result
fn rejection(response: FcmResponse) -> Option<ErrorReason> {
	let results = response.results.unwrap_or_default();
	response
		.error
		.or_else(|| results.into_iter().find_map(|result| result.error))
}

#[async_trait]
impl PushSender for FcmPushSender {
	async fn send(&self, notification: &Notification) -> Result<()> {
		let message = self.message(notification)?;
		let response = self.client.send(message).await?;

		tracing::debug!("fcm: {:?}", response);

		match rejection(response) {
			Some(reason) => {
				Err(Error::PushRejected(format!("{:?}", reason)))
			}
			None => Ok(()),
		}
	}
}
