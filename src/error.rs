use rusoto_core::{
	credential::CredentialsError, request::TlsError, RusotoError,
};
use rusoto_dynamodb::{CreateTableError, GetItemError, ListTablesError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
	#[error("aws error: {0}")]
	RusotoGetItem(#[from] RusotoError<GetItemError>),

	#[error("aws error: {0}")]
	RusotoListTables(#[from] RusotoError<ListTablesError>),

	#[error("aws error: {0}")]
	RusotoCreateTable(#[from] RusotoError<CreateTableError>),

	#[error("aws error: {0}")]
	RusotoCredentials(#[from] CredentialsError),

	#[error("aws error: {0}")]
	RusotoTls(#[from] TlsError),

	#[error("table {0} not found")]
	TableNotFound(String),

	#[error("DynamoDeserializeError for field: {0}")]
	DynamoDeserialize(&'static str),

	#[error("fcm error: {0}")]
	Fcm(#[from] fcm::FcmError),

	#[error("push rejected: {0}")]
	PushRejected(String),

	#[error("serde json error {0}")]
	SerdeJson(#[from] serde_json::Error),

	#[error("config error: {0}")]
	Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
