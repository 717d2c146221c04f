//! The graph pipeline: raw payload → model → visual encoding → layout tuning.

pub mod encode;
pub mod layout;
pub mod model;

pub use encode::{EdgeEncoding, NodeEncoding, encode, encode_edge, encode_tooltip};
pub use layout::{LayoutController, LayoutTuning, Simulation};
pub use model::{GraphEdge, GraphModel, GraphNode, UNKNOWN_TAG, build};
