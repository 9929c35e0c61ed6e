use crate::model::Model;
use crate::particle::Particle;
use crate::V3;
use protocol::pr_model::{PrConstraint, PrModel, PrVertex};
use protocol::view::View;

// rotated, scaled copies of the raw positions, order preserved.
// three chained 2d rotations with cross-term reuse; the second step
// consumes xz, the third consumes yx and xy, and the output vertex is
// (zx, zy, yz). this is a fixed composition, not an axis-major matrix
// product, and it is re-evaluated from the raw positions every call.
pub fn calc_3d(particles: &[Particle], view: &View) -> Vec<V3> {
	let (xsin, xcos) = view.angle[0].sin_cos();
	let (ysin, ycos) = view.angle[1].sin_cos();
	let (zsin, zcos) = view.angle[2].sin_cos();
	particles
		.iter()
		.map(|p| {
			let v = p.pos * view.scale;
			let xy = xcos * v[1] - xsin * v[2];
			let xz = xsin * v[1] + xcos * v[2];
			let yz = ycos * xz - ysin * v[0];
			let yx = ysin * xz + ycos * v[0];
			let zx = zcos * yx - zsin * xy;
			let zy = zsin * yx + zcos * xy;
			V3::new(zx, zy, yz)
		})
		.collect()
}

// full frame snapshot: every vertex through the perspective divide,
// every live constraint as an index pair for line drawing
pub fn pr_model(model: &Model, view: &View) -> PrModel {
	let vertices = calc_3d(&model.particles, view)
		.into_iter()
		.map(|v| {
			let s = view.to_screen(v);
			PrVertex {
				pos: [s[0], s[1]],
				depth: v[2],
			}
		})
		.collect();
	let constraints = model
		.constraints
		.iter()
		.map(|c| PrConstraint { ps: c.ps })
		.collect();
	PrModel {
		vertices,
		constraints,
	}
}
