use crate::V3;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
	pub pos: V3,
	pub ppos: V3,
	pub lock: bool,
}

impl Particle {
	pub fn new(pos: V3, lock: bool) -> Self {
		Self {
			pos,
			ppos: pos,
			lock,
		}
	}

	pub fn add_pos(&mut self, dp: V3) {
		self.pos += dp;
	}

	pub fn offset_pos(&mut self, dp: V3) {
		self.pos += dp;
		self.ppos += dp;
	}

	pub fn reset_pos(&mut self, p: V3) {
		self.pos = p;
		self.ppos = p;
	}

	// position verlet: pos - ppos stands in for velocity.
	// friction damps x/z only, gravity lands on y unscaled.
	// a locked particle snaps back to ppos, undoing any displacement
	// applied since the last step.
	pub fn update(&mut self, friction: f32, gravity: f32) {
		if self.lock {
			self.pos = self.ppos;
			return;
		}
		let d = self.pos - self.ppos;
		self.ppos = self.pos;
		self.pos[0] += d[0] * friction;
		self.pos[1] += d[1] + gravity;
		self.pos[2] += d[2] * friction;
	}
}
