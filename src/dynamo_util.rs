use crate::error::{Error, Result};
use rusoto_core::{
	credential::{DefaultCredentialsProvider, StaticProvider},
	HttpClient, Region,
};
use rusoto_dynamodb::{
	AttributeDefinition, AttributeValue, CreateTableInput, DynamoDb,
	DynamoDbClient, KeySchemaElement, ListTablesInput,
	ProvisionedThroughput,
};
use std::collections::HashMap;

pub type DynamoHashMap = HashMap<String, AttributeValue>;

#[must_use]
pub fn db_key(key: &str, value: &str) -> DynamoHashMap {
	let mut attrs = HashMap::with_capacity(1);
	attrs.insert(
		key.to_string(),
		AttributeValue {
			s: Some(value.to_string()),
			..AttributeValue::default()
		},
	);
	attrs
}

/// optional string attribute, `None` if missing or not of type `S`
#[must_use]
pub fn string_attr(map: &DynamoHashMap, name: &str) -> Option<String> {
	map.get(name).and_then(|attr| attr.s.clone())
}

pub const DEFAULT_LOCAL_URL: &str = "http://localhost:8000";

/// where the dynamodb api is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamoEndpoint {
	/// aws with default credentials and region
	Aws,
	/// a local dynamodb, tables are created on demand
	Local(String),
}

impl DynamoEndpoint {
	/// `DDB_LOCAL` switches to a local setup at `DDB_URL`
	#[must_use]
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub(crate) fn from_lookup(
		lookup: impl Fn(&str) -> Option<String>,
	) -> Self {
		if lookup("DDB_LOCAL").is_none() {
			return Self::Aws;
		}

		Self::Local(
			lookup("DDB_URL")
				.unwrap_or_else(|| DEFAULT_LOCAL_URL.to_string()),
		)
	}

	#[must_use]
	pub const fn is_local(&self) -> bool {
		matches!(self, Self::Local(_))
	}
}

/// checks that `table` exists. in a local setup a missing table is
/// created with `id`(string hash) as the primary key
/// # Errors
/// fails with network errors or if the table is missing remotely
pub async fn table_init<DB>(db: &DB, table: &str) -> Result<()>
where
	DB: DynamoDb + Clone + Send + Sync,
{
	if table_exists(db, table).await? {
		return Ok(());
	}

	if !DynamoEndpoint::from_env().is_local() {
		return Err(Error::TableNotFound(table.to_string()));
	}

	create_id_table(db, table).await
}

async fn table_exists<DB>(db: &DB, table: &str) -> Result<bool>
where
	DB: DynamoDb + Clone + Send + Sync,
{
	let mut start: Option<String> = None;

	loop {
		let page = db
			.list_tables(ListTablesInput {
				limit: None,
				exclusive_start_table_name: start.clone(),
			})
			.await?;

		if page.table_names.unwrap_or_default().iter().any(|n| n == table)
		{
			tracing::trace!("db table exists: {}", table);
			return Ok(true);
		}

		// stop once the listing no longer advances
		match page.last_evaluated_table_name {
			Some(next) if start.as_ref() != Some(&next) => {
				start = Some(next);
			}
			_ => return Ok(false),
		}
	}
}

async fn create_id_table<DB>(db: &DB, table: &str) -> Result<()>
where
	DB: DynamoDb + Clone + Send + Sync,
{
	tracing::info!("create table: {}", table);

	let _res = db
		.create_table(CreateTableInput {
			table_name: table.into(),
			key_schema: vec![KeySchemaElement {
				attribute_name: "id".into(),
				key_type: "HASH".into(),
			}],
			attribute_definitions: vec![AttributeDefinition {
				attribute_name: "id".into(),
				attribute_type: "S".into(),
			}],
			provisioned_throughput: Some(ProvisionedThroughput {
				read_capacity_units: 1,
				write_capacity_units: 1,
			}),
			..CreateTableInput::default()
		})
		.await?;

	tracing::info!("table created: {}", table);

	Ok(())
}

/// create new dynamodb connection for `endpoint`
///
/// # Errors
///
/// http connections can fail
pub fn db_init(endpoint: &DynamoEndpoint) -> Result<DynamoDbClient> {
	let dispatcher = HttpClient::new()?;

	match endpoint {
		DynamoEndpoint::Local(url) => {
			tracing::info!("ddb url: {}", url);

			Ok(DynamoDbClient::new_with(
				dispatcher,
				StaticProvider::new_minimal(
					"foo".to_string(),
					"bar".to_string(),
				),
				Region::Custom {
					name: "local".into(),
					endpoint: url.clone(),
				},
			))
		}
		DynamoEndpoint::Aws => Ok(DynamoDbClient::new_with(
			dispatcher,
			DefaultCredentialsProvider::new()?,
			Region::default(),
		)),
	}
}
