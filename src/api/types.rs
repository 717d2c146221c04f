use serde::Deserialize;
use serde_json::{Map, Value};

/// Open key-value property bag; the backend enforces no schema and neither do we.
pub type Properties = Map<String, Value>;

/// Node as returned by the query backend. `labels` is ordered; the first
/// entry (if any) is the node's primary type tag.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawNode {
	pub id: String,
	#[serde(default)]
	pub labels: Vec<String>,
	#[serde(default)]
	pub properties: Properties,
}

/// Relationship as returned by the query backend. `start_node`/`end_node`
/// share the node identifier space, rendered numeric on the wire.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationship {
	pub id: String,
	pub start_node: i64,
	pub end_node: i64,
	#[serde(rename = "type")]
	pub rel_type: String,
	#[serde(default)]
	pub properties: Properties,
}

/// Full payload of a fraud-cycles query.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawData {
	#[serde(default)]
	pub nodes: Vec<RawNode>,
	#[serde(default)]
	pub relationships: Vec<RawRelationship>,
}

/// A named, backend-stored detection pattern. `cypher_query` is opaque to the
/// client and passed through unparsed.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Motif {
	pub id: i64,
	pub name: String,
	pub description: String,
	pub cypher_query: String,
	pub active: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_camel_case_payload() {
		let json = r#"{
			"nodes": [
				{"id": "1", "labels": ["Account"], "properties": {"accountNumber": "ACC1"}},
				{"id": "2", "labels": [], "properties": {}}
			],
			"relationships": [
				{"id": "r1", "startNode": 1, "endNode": 2, "type": "SENT", "properties": {}}
			]
		}"#;
		let data: RawData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].labels, vec!["Account"]);
		assert_eq!(
			data.nodes[0].properties.get("accountNumber"),
			Some(&Value::String("ACC1".into()))
		);
		assert_eq!(data.relationships[0].start_node, 1);
		assert_eq!(data.relationships[0].end_node, 2);
		assert_eq!(data.relationships[0].rel_type, "SENT");
	}

	#[test]
	fn missing_fields_default_to_empty() {
		let data: RawData = serde_json::from_str("{}").unwrap();
		assert!(data.nodes.is_empty());
		assert!(data.relationships.is_empty());

		let node: RawNode = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
		assert!(node.labels.is_empty());
		assert!(node.properties.is_empty());
	}

	#[test]
	fn decodes_motif_catalog_entry() {
		let json = r#"{
			"id": 3,
			"name": "Circular payments",
			"description": "Funds returning to origin within 4 hops",
			"cypherQuery": "MATCH (a)-[:SENT*3..4]->(a) RETURN a",
			"active": true
		}"#;
		let motif: Motif = serde_json::from_str(json).unwrap();
		assert_eq!(motif.id, 3);
		assert!(motif.active);
		assert!(motif.cypher_query.starts_with("MATCH"));
	}
}
