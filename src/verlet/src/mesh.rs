use rand::Rng;

use crate::model::Model;
use crate::V3;

// x columns by y rows in the z = 0 plane, spacing size, top row
// pinned, horizontal and vertical links
pub fn new_cloth(x: usize, y: usize, size: f32) -> Model {
	let mut model = Model::default();
	for idx in 0..x {
		for idy in 0..y {
			model.create_particle(
				size * idx as f32,
				size * idy as f32,
				0.0,
				idy == 0,
			);
		}
	}
	for idx in 1..x {
		for idy in 0..y {
			model.create_constraint(idx * y + idy, (idx - 1) * y + idy);
		}
	}
	for idx in 0..x {
		for idy in 1..y {
			model.create_constraint(idx * y + idy, idx * y + idy - 1);
		}
	}
	model
}

// n particles scattered in a sphere, linked to every neighbour closer
// than link
pub fn new_net(n: usize, radius: f32, link: f32) -> Model {
	let mut rng = rand::thread_rng();
	let mut model = Model::default();
	for _ in 0..n {
		let p = loop {
			let p = V3::new(
				rng.gen_range(-radius..radius),
				rng.gen_range(-radius..radius),
				rng.gen_range(-radius..radius),
			);
			if p.magnitude() <= radius {
				break p;
			}
		};
		model.create_particle(p[0], p[1], p[2], false);
	}
	model.create_constraints_within(link);
	model
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_cloth_shape() {
		let x = 5;
		let y = 4;
		let model = new_cloth(x, y, 10.0);
		assert_eq!(model.particles.len(), x * y);
		assert_eq!(model.constraints.len(), (x - 1) * y + x * (y - 1));
		for c in model.constraints.iter() {
			assert!((c.l0 - 10.0).abs() < 1e-5);
		}
	}

	#[test]
	fn test_cloth_top_row_locked() {
		let model = new_cloth(3, 3, 10.0);
		for (i, p) in model.particles.iter().enumerate() {
			assert_eq!(p.lock, i % 3 == 0);
		}
	}

	#[test]
	fn test_net() {
		let model = new_net(40, 50.0, 20.0);
		assert_eq!(model.particles.len(), 40);
		for p in model.particles.iter() {
			assert!(p.pos.magnitude() <= 50.0);
		}
		for c in model.constraints.iter() {
			assert!(c.l0 < 20.0);
			let d = (model.particles[c.ps[0]].pos
				- model.particles[c.ps[1]].pos)
				.magnitude();
			assert!((c.l0 - d).abs() < 1e-5);
		}
	}
}
