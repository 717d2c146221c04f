use std::hash::{DefaultHasher, Hash, Hasher};

use serde_json::Value;

use super::model::{GraphEdge, GraphNode, UNKNOWN_TAG};

/// Fallback palette for type tags without a bespoke style, bucketed by tag.
const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

const FALLBACK_RADIUS: f64 = 7.0;
const PLACEHOLDER: &str = "N/A";

/// Display attributes for one node, recomputed per frame at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeEncoding {
	pub display_label: String,
	pub fill_color: String,
	pub radius: f64,
}

/// Display attributes for one edge. Uniform across relation types.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeEncoding {
	pub label: String,
	pub curvature: f64,
	pub arrow_length: f64,
}

/// How a styled type derives its on-canvas label.
enum LabelRule {
	/// Verbatim string property, e.g. an account number.
	Property(&'static str),
	/// Numeric property rendered as `£` with thousands separators.
	Currency(&'static str),
}

struct TypeStyle {
	tag: &'static str,
	fill: &'static str,
	radius: f64,
	label: LabelRule,
	tooltip_prefix: &'static str,
}

/// Type tag → encoding table. Adding a styled entity type is one row here,
/// not a new conditional in the renderer.
const TYPE_STYLES: &[TypeStyle] = &[
	TypeStyle {
		tag: "Account",
		fill: "orange",
		radius: 14.0,
		label: LabelRule::Property("accountNumber"),
		tooltip_prefix: "Account",
	},
	TypeStyle {
		tag: "Transaction",
		fill: "lightblue",
		radius: 9.0,
		label: LabelRule::Currency("amountPaid"),
		tooltip_prefix: "Txn",
	},
];

fn style_for(tag: &str) -> Option<&'static TypeStyle> {
	TYPE_STYLES.iter().find(|s| s.tag == tag)
}

// A raw label list like `[""]` yields an empty tag; fall back to the sentinel
// so labels stay non-empty.
fn fallback_tag(node: &GraphNode) -> &str {
	if node.type_tag.is_empty() {
		UNKNOWN_TAG
	} else {
		&node.type_tag
	}
}

fn fallback_color(tag: &str) -> &'static str {
	let mut hasher = DefaultHasher::new();
	tag.hash(&mut hasher);
	COLORS[(hasher.finish() % COLORS.len() as u64) as usize]
}

fn styled_label(rule: &LabelRule, node: &GraphNode) -> String {
	match rule {
		LabelRule::Property(key) => match node.properties.get(*key) {
			Some(Value::String(s)) if !s.is_empty() => s.clone(),
			Some(Value::Number(n)) => n.to_string(),
			_ => PLACEHOLDER.to_string(),
		},
		LabelRule::Currency(key) => node
			.properties
			.get(*key)
			.and_then(Value::as_f64)
			.map(format_currency)
			.unwrap_or_else(|| PLACEHOLDER.to_string()),
	}
}

/// Resolve a node's display attributes from its type tag and properties.
/// Total: missing properties degrade to a placeholder, never a panic, and
/// the label is always non-empty.
pub fn encode(node: &GraphNode) -> NodeEncoding {
	match style_for(&node.type_tag) {
		Some(style) => NodeEncoding {
			display_label: styled_label(&style.label, node),
			fill_color: style.fill.to_string(),
			radius: style.radius,
		},
		None => {
			let tag = fallback_tag(node);
			NodeEncoding {
				display_label: tag.to_string(),
				fill_color: fallback_color(tag).to_string(),
				radius: FALLBACK_RADIUS,
			}
		}
	}
}

/// Hover text for a node, e.g. `Account: ACC1` or `Txn: £1,250`.
pub fn encode_tooltip(node: &GraphNode) -> String {
	match style_for(&node.type_tag) {
		Some(style) => format!("{}: {}", style.tooltip_prefix, styled_label(&style.label, node)),
		None => format!("{} {}", fallback_tag(node), node.id),
	}
}

/// Resolve an edge's display attributes. The fixed curvature keeps parallel
/// and opposite edges between the same endpoints visually separate.
pub fn encode_edge(edge: &GraphEdge) -> EdgeEncoding {
	EdgeEncoding {
		label: edge.relation_type.clone(),
		curvature: 0.25,
		arrow_length: 10.0,
	}
}

/// `£` amount with thousands separators; decimals only when the amount has a
/// fractional part.
pub fn format_currency(amount: f64) -> String {
	let negative = amount < 0.0;
	let cents = (amount.abs() * 100.0).round() as u64;
	let (whole, frac) = (cents / 100, cents % 100);

	let digits = whole.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}

	let sign = if negative { "-" } else { "" };
	if frac == 0 {
		format!("{sign}£{grouped}")
	} else {
		format!("{sign}£{grouped}.{frac:02}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn node(tag: &str, props: &[(&str, Value)]) -> GraphNode {
		GraphNode {
			id: "1".to_string(),
			type_tag: tag.to_string(),
			properties: props
				.iter()
				.map(|(k, v)| (k.to_string(), v.clone()))
				.collect(),
		}
	}

	#[test]
	fn account_labeled_by_account_number() {
		let enc = encode(&node("Account", &[("accountNumber", json!("ACC1"))]));
		assert_eq!(enc.display_label, "ACC1");
		assert_eq!(enc.fill_color, "orange");
		assert!(enc.radius > FALLBACK_RADIUS);
	}

	#[test]
	fn transaction_labeled_by_formatted_amount() {
		let enc = encode(&node("Transaction", &[("amountPaid", json!(1250750.5))]));
		assert_eq!(enc.display_label, "£1,250,750.50");
		assert_eq!(enc.fill_color, "lightblue");
	}

	#[test]
	fn transaction_is_smaller_than_account() {
		let txn = encode(&node("Transaction", &[]));
		let account = encode(&node("Account", &[]));
		assert!(txn.radius < account.radius);
	}

	#[test]
	fn missing_expected_property_yields_placeholder_not_panic() {
		let enc = encode(&node("Transaction", &[]));
		assert_eq!(enc.display_label, "N/A");
		let enc = encode(&node("Account", &[]));
		assert_eq!(enc.display_label, "N/A");
	}

	#[test]
	fn encode_is_total_for_arbitrary_tags_and_properties() {
		let enc = encode(&node("SharedDevice", &[("weird", json!({"nested": []}))]));
		assert!(!enc.display_label.is_empty());
		assert_eq!(enc.display_label, "SharedDevice");
	}

	#[test]
	fn fallback_color_is_deterministic_per_tag() {
		let a = encode(&node("Device", &[]));
		let b = encode(&node("Device", &[]));
		assert_eq!(a.fill_color, b.fill_color);
		assert!(COLORS.contains(&a.fill_color.as_str()));
	}

	#[test]
	fn empty_type_tag_still_gets_nonempty_label() {
		let n = node("", &[]);
		let enc = encode(&n);
		assert_eq!(enc.display_label, UNKNOWN_TAG);
		assert_eq!(enc.fill_color, fallback_color(UNKNOWN_TAG));
		assert_eq!(encode_tooltip(&n), "Unknown 1");
	}

	#[test]
	fn unknown_tag_gets_neutral_encoding() {
		let enc = encode(&node(crate::graph::UNKNOWN_TAG, &[]));
		assert_eq!(enc.display_label, "Unknown");
		assert_eq!(enc.radius, FALLBACK_RADIUS);
	}

	#[test]
	fn tooltips_for_styled_and_fallback_types() {
		let acc = node("Account", &[("accountNumber", json!("ACC9"))]);
		assert_eq!(encode_tooltip(&acc), "Account: ACC9");

		let txn = node("Transaction", &[("amountPaid", json!(42))]);
		assert_eq!(encode_tooltip(&txn), "Txn: £42");

		let other = node("Device", &[]);
		assert_eq!(encode_tooltip(&other), "Device 1");

		let bare = node("Transaction", &[]);
		assert_eq!(encode_tooltip(&bare), "Txn: N/A");
	}

	#[test]
	fn edge_encoding_is_uniform() {
		let edge = GraphEdge {
			source_id: "1".into(),
			target_id: "2".into(),
			relation_type: "SENT".into(),
		};
		let enc = encode_edge(&edge);
		assert_eq!(enc.label, "SENT");
		assert_eq!(enc.curvature, 0.25);
		assert_eq!(enc.arrow_length, 10.0);
	}

	#[test]
	fn currency_grouping_edge_cases() {
		assert_eq!(format_currency(0.0), "£0");
		assert_eq!(format_currency(999.0), "£999");
		assert_eq!(format_currency(1000.0), "£1,000");
		assert_eq!(format_currency(1234567.0), "£1,234,567");
		assert_eq!(format_currency(0.5), "£0.50");
		assert_eq!(format_currency(19.999), "£20");
		assert_eq!(format_currency(-1500.25), "-£1,500.25");
	}
}
