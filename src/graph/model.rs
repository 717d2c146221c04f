use crate::api::{Properties, RawData};

/// Primary type tag used when a raw node carries no labels.
pub const UNKNOWN_TAG: &str = "Unknown";

/// Renderer-agnostic node derived from a `RawNode`. Immutable once built;
/// positions live in the simulation, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub type_tag: String,
	pub properties: Properties,
}

/// Directed edge between two node ids of the same build. Endpoints are not
/// validated; a dangling edge is carried through as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub source_id: String,
	pub target_id: String,
	pub relation_type: String,
}

/// The immutable node/edge structure produced per fetch. Replaced wholesale
/// on every new query result, never patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl GraphModel {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.edges.is_empty()
	}
}

/// Build a [`GraphModel`] from a raw backend payload.
///
/// Total and side-effect-free: no deduplication, no endpoint validation, no
/// schema checks. Input order is preserved and identical input always yields
/// a structurally equal model. Relationship endpoints reference node ids
/// rendered as decimal strings, not positions in the node list.
pub fn build(raw: &RawData) -> GraphModel {
	let nodes = raw
		.nodes
		.iter()
		.map(|node| GraphNode {
			id: node.id.clone(),
			type_tag: node
				.labels
				.first()
				.cloned()
				.unwrap_or_else(|| UNKNOWN_TAG.to_string()),
			properties: node.properties.clone(),
		})
		.collect();

	let edges = raw
		.relationships
		.iter()
		.map(|rel| GraphEdge {
			source_id: rel.start_node.to_string(),
			target_id: rel.end_node.to_string(),
			relation_type: rel.rel_type.clone(),
		})
		.collect();

	GraphModel { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{RawNode, RawRelationship};
	use serde_json::json;

	fn raw_node(id: &str, labels: &[&str]) -> RawNode {
		RawNode {
			id: id.to_string(),
			labels: labels.iter().map(|l| l.to_string()).collect(),
			properties: Default::default(),
		}
	}

	fn raw_rel(id: &str, start: i64, end: i64, rel_type: &str) -> RawRelationship {
		RawRelationship {
			id: id.to_string(),
			start_node: start,
			end_node: end,
			rel_type: rel_type.to_string(),
			properties: Default::default(),
		}
	}

	#[test]
	fn single_account_node() {
		let mut node = raw_node("1", &["Account"]);
		node.properties
			.insert("accountNumber".into(), json!("ACC1"));
		let raw = RawData {
			nodes: vec![node],
			relationships: vec![],
		};

		let model = build(&raw);
		assert_eq!(model.nodes.len(), 1);
		assert_eq!(model.nodes[0].type_tag, "Account");
		assert_eq!(model.nodes[0].properties.get("accountNumber"), Some(&json!("ACC1")));
		assert!(model.edges.is_empty());
	}

	#[test]
	fn node_count_matches_input_with_unique_ids() {
		let raw = RawData {
			nodes: (0..17).map(|i| raw_node(&i.to_string(), &["Account"])).collect(),
			relationships: vec![],
		};
		assert_eq!(build(&raw).nodes.len(), raw.nodes.len());
	}

	#[test]
	fn empty_labels_yield_unknown_tag() {
		let raw = RawData {
			nodes: vec![raw_node("9", &[])],
			relationships: vec![],
		};
		assert_eq!(build(&raw).nodes[0].type_tag, UNKNOWN_TAG);
	}

	#[test]
	fn secondary_labels_are_ignored() {
		let raw = RawData {
			nodes: vec![raw_node("1", &["Transaction", "Flagged"])],
			relationships: vec![],
		};
		assert_eq!(build(&raw).nodes[0].type_tag, "Transaction");
	}

	#[test]
	fn endpoints_are_decimal_strings_of_node_refs() {
		let raw = RawData {
			nodes: vec![raw_node("41", &["Account"]), raw_node("42", &["Account"])],
			relationships: vec![raw_rel("r1", 41, 42, "SENT")],
		};
		let model = build(&raw);
		let edge = &model.edges[0];
		assert_eq!(edge.source_id, "41");
		assert_eq!(edge.target_id, "42");
		assert_eq!(edge.relation_type, "SENT");
		assert_eq!(edge.source_id.parse::<i64>().unwrap(), 41);
	}

	#[test]
	fn dangling_edge_survives_build() {
		let raw = RawData {
			nodes: vec![raw_node("1", &["Account"])],
			relationships: vec![raw_rel("r1", 1, 2, "SENT")],
		};
		let model = build(&raw);
		assert_eq!(model.edges[0].target_id, "2");
		assert!(model.nodes.iter().all(|n| n.id != "2"));
	}

	#[test]
	fn build_is_deterministic_under_structural_equality() {
		let raw = RawData {
			nodes: vec![raw_node("1", &["Account"]), raw_node("2", &[])],
			relationships: vec![raw_rel("r1", 1, 2, "SENT"), raw_rel("r2", 2, 1, "REPAID")],
		};
		assert_eq!(build(&raw), build(&raw));
	}

	#[test]
	fn input_order_is_preserved() {
		let raw = RawData {
			nodes: vec![raw_node("3", &[]), raw_node("1", &[]), raw_node("2", &[])],
			relationships: vec![raw_rel("b", 1, 2, "SENT"), raw_rel("a", 2, 3, "SENT")],
		};
		let model = build(&raw);
		let ids: Vec<_> = model.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["3", "1", "2"]);
		assert_eq!(model.edges[0].source_id, "1");
		assert_eq!(model.edges[1].source_id, "2");
	}

	#[test]
	fn default_model_is_empty() {
		assert!(GraphModel::default().is_empty());
	}
}
