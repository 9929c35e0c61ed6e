// pr_model: projected model snapshot for rendering and picking

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PrVertex {
	// screen space position after the perspective divide
	pub pos: [f32; 2],
	// rotated z before the divide, used for pick tie breaking
	pub depth: f32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PrConstraint {
	pub ps: [usize; 2],
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PrModel {
	pub vertices: Vec<PrVertex>,
	pub constraints: Vec<PrConstraint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
	pub model: usize,
	pub particle: usize,
}
