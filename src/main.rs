use match_notify::{
	chats::DynamoChatDB,
	config::Config,
	dynamo_util,
	notifiers::Notifiers,
	push::{FcmPushSender, PushDispatcher},
	users::DynamoUserDB,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let config = Config::from_env()?;

	let db = dynamo_util::db_init(&config.dynamo)?;
	let users = DynamoUserDB::new(&config.users_table, db.clone()).await?;
	let chats = DynamoChatDB::new(&config.chats_table, db).await?;

	let dispatcher = PushDispatcher::new(Arc::new(FcmPushSender::new(
		config.fcm_api_key.clone(),
	)));

	let notifiers =
		Notifiers::new(Arc::new(users), Arc::new(chats), dispatcher);

	tracing::info!("listening on {}", config.listen_addr);

	match_notify::initialize_server(&notifiers, config.listen_addr)
		.await;

	Ok(())
}
