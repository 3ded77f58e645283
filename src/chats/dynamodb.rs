use super::{Chat, ChatDB};
use crate::{
	dynamo_util::{db_key, string_attr, table_init, DynamoHashMap},
	error::{Error, Result},
};
use async_trait::async_trait;
use rusoto_dynamodb::{
	AttributeValue, DynamoDb, DynamoDbClient, GetItemInput,
};
use std::convert::TryFrom;
use tracing::instrument;

#[derive(Clone)]
pub struct DynamoChatDB {
	db: DynamoDbClient,
	table: String,
}

impl DynamoChatDB {
	/// # Errors
	/// Returns an error if the table is not initiated
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
	async fn load(&self, key: &str) -> Result<Option<Chat>> {
		let output = self
			.db
			.get_item(GetItemInput {
				table_name: self.table.clone(),
				key: db_key("id", key),
				..GetItemInput::default()
			})
			.await?;

		output.item.map(Chat::try_from).transpose()
	}
}

// participants are written either as a list or as a string set
fn participants(attr: &AttributeValue) -> Vec<String> {
	if let Some(list) = attr.l.as_ref() {
		return list.iter().filter_map(|v| v.s.clone()).collect();
	}

	attr.ss.clone().unwrap_or_default()
}

impl TryFrom<DynamoHashMap> for Chat {
	type Error = Error;

	fn try_from(attributes: DynamoHashMap) -> Result<Self> {
		Ok(Self {
			id: string_attr(&attributes, "id")
				.ok_or(Error::DynamoDeserialize("id"))?,
			users: attributes
				.get("users")
				.map(participants)
				.unwrap_or_default(),
		})
	}
}

#[async_trait]
impl ChatDB for DynamoChatDB {
	async fn get_chat(&self, id: &str) -> Result<Option<Chat>> {
		self.load(id).await
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::*;
	use pretty_assertions::assert_eq;

	fn string(value: &str) -> AttributeValue {
		AttributeValue {
			s: Some(value.to_string()),
			..AttributeValue::default()
		}
	}

	#[test]
	fn test_decode_list() {
		let mut item = db_key("id", "c1");
		item.insert(
			"users".to_string(),
			AttributeValue {
				l: Some(vec![string("u1"), string("u2")]),
				..AttributeValue::default()
			},
		);

		assert_eq!(
			Chat::try_from(item).unwrap(),
			Chat::new("c1", &["u1", "u2"])
		);
	}

	#[test]
	fn test_decode_string_set() {
		let mut item = db_key("id", "c1");
		item.insert(
			"users".to_string(),
			AttributeValue {
				ss: Some(vec!["u1".to_string(), "u2".to_string()]),
				..AttributeValue::default()
			},
		);

		assert_eq!(Chat::try_from(item).unwrap().users, vec!["u1", "u2"]);
	}

	#[test]
	fn test_decode_no_users() {
		let chat = Chat::try_from(db_key("id", "c1")).unwrap();

		assert!(chat.users.is_empty());
	}
}
