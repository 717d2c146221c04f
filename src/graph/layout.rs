/// Built-in charge strength of the rendering stack, kept for reference so the
/// tuned defaults stay meaningfully stronger.
pub const BUILTIN_REPULSION: f64 = -30.0;
/// Built-in per-edge target length, see [`BUILTIN_REPULSION`].
pub const BUILTIN_LINK_DISTANCE: f64 = 30.0;

/// Minimal surface the layout controller needs from a force simulation.
/// Keeps the controller testable without a canvas or a real physics engine.
pub trait Simulation {
	fn set_repulsion(&mut self, strength: f64);
	fn set_link_distance(&mut self, length: f64);
	fn tick(&mut self, dt: f32);
}

/// Force-simulation tuning. Defaults push nodes further apart than the
/// built-ins so dense fraud-ring subgraphs stay legible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutTuning {
	/// Inter-node charge; negative repels.
	pub repulsion: f64,
	/// Target rest length per edge.
	pub link_distance: f64,
}

impl Default for LayoutTuning {
	fn default() -> Self {
		Self {
			repulsion: -300.0,
			link_distance: 150.0,
		}
	}
}

/// Owns the tuning parameters and re-applies them to the simulation whenever
/// the rendering surface mounts or the displayed graph model is replaced.
/// Node positions remain simulation state; the controller never reads them.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutController {
	tuning: LayoutTuning,
}

impl LayoutController {
	pub fn new(tuning: LayoutTuning) -> Self {
		Self { tuning }
	}

	pub fn tuning(&self) -> LayoutTuning {
		self.tuning
	}

	/// Push the tuning into the simulation. Setters overwrite rather than
	/// accumulate, so repeated application cannot drift.
	pub fn apply(&self, sim: &mut dyn Simulation) {
		sim.set_repulsion(self.tuning.repulsion);
		sim.set_link_distance(self.tuning.link_distance);
	}
}
