#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::perf)]
#![deny(clippy::nursery)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::needless_update)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::upper_case_acronyms)]

pub mod chats;
pub mod config;
pub mod dynamo_util;
pub mod error;
pub mod notifiers;
pub mod push;
pub mod rejection;
pub mod triggers;
pub mod users;

use notifiers::Notifiers;
use std::net::SocketAddr;
use tracing::Span;
use warp::{
	trace::{Info, Trace},
	Filter,
};

#[must_use]
pub fn trace_request() -> Trace<impl Fn(Info) -> Span + Clone> {
	warp::trace::trace(|info: Info| {
		tracing::info_span!(
			"http",
			path = %info.path(),
		)
	})
}

/// serves the trigger routes until the process ends
pub async fn initialize_server(
	notifiers: &Notifiers,
	addr: impl Into<SocketAddr> + Send,
) {
	let log = warp::log::custom(move |info| {
		tracing::info!(
			target: "http",
			path = %info.path(),
			method = %info.method(),
			elapsed = %info.elapsed().as_micros(),
			status = %info.status(),
		);
	});

	let routes = triggers::create_filter(notifiers)
		.with(log)
		.with(trace_request())
		.recover(rejection::handle_rejection);

	warp::serve(routes).run(addr).await;
}
