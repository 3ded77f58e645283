//! http intake for document creation events:
//! * POST triggers/matches/{matchId}
//! * POST triggers/chats/{chatId}/messages/{messageId}
//! * POST triggers/likes/{likeId}
//! * GET status

use crate::notifiers::{
	LikeCreated, LikeNotifier, MatchCreated, MatchNotifier,
	MessageCreated, MessageNotifier, Notifiers, OnCreate,
};
use std::{convert::Infallible, sync::Arc};
use warp::{
	filters::BoxedFilter, hyper::StatusCode, reply::Response, Filter,
	Rejection, Reply,
};

pub fn create_filter(
	notifiers: &Notifiers,
) -> BoxedFilter<(Box<dyn Reply>,)> {
	let on_match = warp::path!("triggers" / "matches" / String)
		.and(warp::post())
		.and(warp::body::json::<MatchCreated>())
		.map(|id: String, event: MatchCreated| MatchCreated { id, ..event })
		.and(with_handler(notifiers.matches.clone()))
		.and_then(handle_event::<MatchNotifier>);

	let on_message =
		warp::path!("triggers" / "chats" / String / "messages" / String)
			.and(warp::post())
			.and(warp::body::json::<MessageCreated>())
			.map(
				|chat_id: String, id: String, event: MessageCreated| {
					MessageCreated { chat_id, id, ..event }
				},
			)
			.and(with_handler(notifiers.messages.clone()))
			.and_then(handle_event::<MessageNotifier>);

	let on_like = warp::path!("triggers" / "likes" / String)
		.and(warp::post())
		.and(warp::body::json::<LikeCreated>())
		.map(|id: String, event: LikeCreated| LikeCreated { id, ..event })
		.and(with_handler(notifiers.likes.clone()))
		.and_then(handle_event::<LikeNotifier>);

	let status = warp::path!("status").and(warp::get()).map(warp::reply);

	on_match
		.or(on_message)
		.or(on_like)
		.or(status)
		.map(|reply| -> Box<dyn Reply> { Box::new(reply) })
		.boxed()
}

fn with_handler<H: Send + Sync + 'static>(
	handler: Arc<H>,
) -> impl Filter<Extract = (Arc<H>,), Error = Infallible> + Clone {
	warp::any().map(move || handler.clone())
}

// read failures answer 500 so the event source can retry the event
async fn handle_event<H: OnCreate + 'static>(
	event: H::Event,
	handler: Arc<H>,
) -> Result<Response, Rejection> {
	match handler.on_create(&event).await {
		Ok(()) => Ok(warp::reply().into_response()),
		Err(err) => {
			tracing::error!("event handling failed: {}", err);

			Ok(warp::reply::with_status(
				String::from("failed to handle event"),
				StatusCode::INTERNAL_SERVER_ERROR,
			)
			.into_response())
		}
	}
}
