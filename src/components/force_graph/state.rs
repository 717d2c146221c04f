use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{GraphEdge, GraphModel, GraphNode, LayoutTuning, Simulation, encode};

/// Minimum pick radius so small fallback nodes stay clickable.
const HIT_RADIUS_MIN: f64 = 10.0;

const NODE_MASS: f32 = 10.0;
const SEED_RING_RADIUS: f64 = 100.0;

/// Per-edge payload carried through the simulation for rendering.
#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub edge: GraphEdge,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

/// Simulation state behind the canvas: the force graph itself plus view
/// transform and interaction bookkeeping. Owns node positions; the rest of
/// the app treats them as advisory.
pub struct ForceGraphState {
	pub graph: ForceGraph<GraphNode, EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	model: GraphModel,
	tuning: LayoutTuning,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	pub fn new(model: &GraphModel, tuning: LayoutTuning, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(Self::parameters(tuning)),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			model: GraphModel::default(),
			tuning,
			edges: Vec::new(),
		};
		state.replace_model(model);
		state
	}

	fn parameters(tuning: LayoutTuning) -> SimulationParameters {
		// Spring stiffness falls off with the target rest length; the
		// constant reproduces 0.05 at the default 150px distance.
		SimulationParameters {
			force_charge: tuning.repulsion.abs() as f32,
			force_spring: (7.5 / tuning.link_distance.max(1.0)) as f32,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}

	/// Swap in a freshly built model, keeping positions for node ids that
	/// survive the swap so the layout does not jump.
	pub fn replace_model(&mut self, model: &GraphModel) {
		let positions = self.positions_by_id();
		self.model = model.clone();
		self.rebuild(&positions);
	}

	fn positions_by_id(&self) -> HashMap<String, (f32, f32, bool)> {
		let mut map = HashMap::new();
		self.graph.visit_nodes(|node| {
			map.insert(
				node.data.user_data.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});
		map
	}

	fn rebuild(&mut self, positions: &HashMap<String, (f32, f32, bool)>) {
		let mut graph = ForceGraph::new(Self::parameters(self.tuning));
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let count = self.model.nodes.len().max(1);

		for (i, node) in self.model.nodes.iter().enumerate() {
			let (x, y, is_anchor) = positions.get(&node.id).copied().unwrap_or_else(|| {
				let angle = (i as f64) * 2.0 * PI / count as f64;
				(
					(self.width / 2.0 + SEED_RING_RADIUS * angle.cos()) as f32,
					(self.height / 2.0 + SEED_RING_RADIUS * angle.sin()) as f32,
					false,
				)
			});
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: NODE_MASS,
				is_anchor,
				user_data: node.clone(),
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		// The model keeps dangling edges; they simply get no spring here.
		for edge in &self.model.edges {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(edge.source_id.as_str()),
				id_to_idx.get(edge.target_id.as_str()),
			) {
				graph.add_edge(
					src,
					tgt,
					EdgeData {
						user_data: EdgeInfo { edge: edge.clone() },
					},
				);
				edges.push((src, tgt));
			}
		}

		self.graph = graph;
		self.edges = edges;
		self.hover = HoverState::default();
		self.drag = DragState::default();
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		(
			gx * self.transform.k + self.transform.x,
			gy * self.transform.k + self.transform.y,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let hit = encode(&node.data.user_data).radius.max(HIT_RADIUS_MIN);
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < hit {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

impl Simulation for ForceGraphState {
	fn set_repulsion(&mut self, strength: f64) {
		if self.tuning.repulsion != strength {
			self.tuning.repulsion = strength;
			let positions = self.positions_by_id();
			self.rebuild(&positions);
		}
	}

	fn set_link_distance(&mut self, length: f64) {
		if self.tuning.link_distance != length {
			self.tuning.link_distance = length;
			let positions = self.positions_by_id();
			self.rebuild(&positions);
		}
	}

	fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
