use std::convert::Infallible;
use warp::{
	filters::body::BodyDeserializeError, hyper::StatusCode, Rejection,
	Reply,
};

#[allow(clippy::missing_errors_doc)]
pub async fn handle_rejection(
	err: Rejection,
) -> Result<impl Reply, Infallible> {
	if err.is_not_found() {
		return Ok(warp::reply::with_status(
			String::from("not found"),
			StatusCode::NOT_FOUND,
		));
	}

	if let Some(body_error) = err.find::<BodyDeserializeError>() {
		tracing::debug!("invalid event body: {}", body_error);

		return Ok(warp::reply::with_status(
			String::from("invalid event body"),
			StatusCode::BAD_REQUEST,
		));
	}

	tracing::error!("unhandled rejection {:?}", err);

	Ok(warp::reply::with_status(
		String::new(),
		StatusCode::INTERNAL_SERVER_ERROR,
	))
}
