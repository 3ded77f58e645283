use super::{User, UserDB};
use crate::{
	dynamo_util::{db_key, string_attr, table_init, DynamoHashMap},
	error::{Error, Result},
};
use async_trait::async_trait;
use rusoto_dynamodb::{DynamoDb, DynamoDbClient, GetItemInput};
use std::convert::TryFrom;
use tracing::instrument;

#[derive(Clone)]
pub struct DynamoUserDB {
	db: DynamoDbClient,
	table: String,
}

impl DynamoUserDB {
	/// create new `DynamoUserDB` instance reusing an existing db client connection
	///
	/// # Errors
	///
	/// local table init could fail creating the table, the check
	/// for the existance of the remote table could fail
	pub async fn new(
		table_name: &str,
		db: DynamoDbClient,
	) -> Result<Self> {
		table_init(&db, table_name).await?;
		Ok(Self {
			db,
			table: table_name.to_string(),
		})
	}

	#[instrument(skip(self), err)]
	async fn load(&self, key: &str) -> Result<Option<User>> {
		let output = self
			.db
			.get_item(GetItemInput {
				table_name: self.table.clone(),
				key: db_key("id", key),
				..GetItemInput::default()
			})
			.await?;

		output.item.map(User::try_from).transpose()
	}
}

impl TryFrom<DynamoHashMap> for User {
	type Error = Error;

	fn try_from(attributes: DynamoHashMap) -> Result<Self> {
		Ok(Self {
			id: string_attr(&attributes, "id")
				.ok_or(Error::DynamoDeserialize("id"))?,
			name: string_attr(&attributes, "name"),
			fcm_token: string_attr(&attributes, "fcmToken"),
		})
	}
}

#[async_trait]
impl UserDB for DynamoUserDB {
	async fn get_user(&self, id: &str) -> Result<Option<User>> {
		self.load(id).await
	}
}
