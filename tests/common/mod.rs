#![allow(dead_code)]

use json::{object, JsonValue};
use mockito::{mock, Matcher};
use rusoto_core::{credential::StaticProvider, HttpClient, Region};
use rusoto_dynamodb::DynamoDbClient;

/// client talking to the mockito server, with `table` already listed
pub fn create_test_ddb_client(table: &str) -> (DynamoDbClient, mockito::Mock) {
	let _ = tracing_subscriber::fmt::try_init();

	let data = object! {
		LastEvaluatedTableName: "string",
		TableNames: [table]
	};

	// `new` of every dynamo store will call `ListTables`
	let mock = mock_ddb_request_ok("ListTables", data);
	let db = DynamoDbClient::new_with(
		HttpClient::new().unwrap(),
		StaticProvider::new_minimal(
			"foo".to_string(),
			"bar".to_string(),
		),
		Region::Custom {
			name: "local".into(),
			endpoint: mockito::server_url(),
		},
	);

	(db, mock)
}

pub fn mock_ddb_request_ok(
	endpoint: &str,
	res: JsonValue,
) -> mockito::Mock {
	mock_ddb_request(endpoint, None, res, 200)
}

/// `GetItem` answered only for requests whose body mentions `key`
pub fn mock_get_item(
	key: &str,
	res: JsonValue,
	status: usize,
) -> mockito::Mock {
	mock_ddb_request("GetItem", Some(key), res, status)
}

fn mock_ddb_request(
	endpoint: &str,
	body_contains: Option<&str>,
	res: JsonValue,
	status: usize,
) -> mockito::Mock {
	let body = body_contains.map_or(Matcher::Any, |key| {
		Matcher::Regex(format!("\"{}\"", key))
	});

	mock("POST", "/")
		.match_header(
			"x-amz-target",
			format!("DynamoDB_20120810.{}", endpoint).as_str(),
		)
		.match_body(body)
		.with_status(status)
		.with_body(res.dump())
		.create()
}
