// HiveSQL access: SQL-over-HTTP queries against the indexed Hive chain.
//
// The endpoint accepts a POST with `{ "query": "<sql>" }` and answers with a
// JSON array of row objects. Each submodule handles one piece of that:
// the HTTP client, the query text, and the row types.

pub mod client;
pub mod models;
pub mod queries;
