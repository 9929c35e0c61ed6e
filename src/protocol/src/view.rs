use crate::{V2, V3};

#[derive(Clone, Debug)]
pub struct View {
	pub scale: f32,
	pub angle: V3,
	pub fov: f32,
	pub offset: V2,
}

impl Default for View {
	fn default() -> Self {
		Self {
			scale: 1.0,
			angle: V3::zeros(),
			fov: 1500.0,
			offset: V2::zeros(),
		}
	}
}

impl View {
	pub fn with_scale(mut self, scale: f32) -> Self {
		self.scale = scale;
		self
	}

	pub fn with_fov(mut self, fov: f32) -> Self {
		self.fov = fov;
		self
	}

	pub fn with_offset(mut self, x: f32, y: f32) -> Self {
		self.offset = V2::new(x, y);
		self
	}

	pub fn rotate_camera(&mut self, delta: V3) {
		self.angle += delta;
	}

	// perspective divide; z below -fov flips the projection, unguarded
	pub fn to_screen(&self, v: V3) -> V2 {
		let k = self.fov / (self.fov + v[2]);
		V2::new(v[0] * k + self.offset[0], v[1] * k + self.offset[1])
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_to_screen_flat() {
		// z = 0 leaves x/y untouched apart from the offset
		let view = View::default().with_offset(100.0, 50.0);
		let s = view.to_screen(V3::new(3.0, -2.0, 0.0));
		assert!((s[0] - 103.0).abs() < 1e-6);
		assert!((s[1] - 48.0).abs() < 1e-6);
	}

	#[test]
	fn test_to_screen_depth() {
		// positive z shrinks toward the offset origin
		let view = View::default();
		let s = view.to_screen(V3::new(300.0, 0.0, 1500.0));
		assert!((s[0] - 150.0).abs() < 1e-3);
	}

	#[test]
	fn test_rotate_camera() {
		let mut view = View::default();
		view.rotate_camera(V3::new(0.1, 0.2, 0.0));
		view.rotate_camera(V3::new(0.1, -0.1, 0.3));
		assert!((view.angle[0] - 0.2).abs() < 1e-6);
		assert!((view.angle[1] - 0.1).abs() < 1e-6);
		assert!((view.angle[2] - 0.3).abs() < 1e-6);
	}
}
