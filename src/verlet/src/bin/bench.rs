use std::time::SystemTime;

use verlet::mesh;

fn main() {
	let mut model = mesh::new_cloth(60, 40, 10.0).with_tear_distance(60.0);
	let rframes = 1000;
	let start = SystemTime::now();
	for _ in 0..rframes {
		model.update_frame();
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!(
		"{} particles, {} constraints left, {:.3}ms per frame",
		model.particles.len(),
		model.constraints.len(),
		duration as f32 / 1e3 / rframes as f32,
	);
}
