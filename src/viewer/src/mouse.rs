use protocol::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
	Left,
	Middle,
	Right,
}

// cursor and button state fed in by the platform glue. opos trails pos
// by one frame, not by one motion event, so delta() is the cursor
// movement since the last step.
#[derive(Clone, Copy, Debug)]
pub struct Mouse {
	pub pos: V2,
	pub opos: V2,
	pub down: bool,
	pub button: Button,
}

impl Default for Mouse {
	fn default() -> Self {
		Self {
			pos: V2::zeros(),
			opos: V2::zeros(),
			down: false,
			button: Button::Left,
		}
	}
}

impl Mouse {
	pub fn move_to(&mut self, pos: V2) {
		self.pos = pos;
	}

	pub fn press(&mut self, button: Button) {
		self.button = button;
		self.down = true;
	}

	pub fn release(&mut self) {
		self.down = false;
	}

	pub fn delta(&self) -> V2 {
		self.pos - self.opos
	}

	pub fn end_frame(&mut self) {
		self.opos = self.pos;
	}
}
