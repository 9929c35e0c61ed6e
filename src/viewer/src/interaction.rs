use protocol::pr_model::{Pick, PrModel};
use protocol::V3;
use verlet::picker;

use crate::mouse::{Button, Mouse};
use crate::stage::Slot;

// screen delta to raw particle displacement while dragging
const DRAG_K: f32 = 25.0;
// screen delta to camera angle delta while rotating
const ROTATE_K: f32 = 1.0 / 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
	Idle,
	Hovering(Pick),
	Dragging(Pick),
}

impl Default for Focus {
	fn default() -> Self {
		Focus::Idle
	}
}

impl Focus {
	pub fn pick(&self) -> Option<Pick> {
		match self {
			Focus::Idle => None,
			Focus::Hovering(pick) | Focus::Dragging(pick) => Some(*pick),
		}
	}
}

// drag, cut and rotate dispatch over the latest projected snapshots.
// the drag target is part of the state, not re-picked, so it sticks
// until the button lifts even when the cursor outruns the pick radius.
#[derive(Default)]
pub struct Interaction {
	focus: Focus,
}

impl Interaction {
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub fn handle_mouse(
		&mut self,
		mouse: &Mouse,
		slots: &mut [Slot],
		frames: &[PrModel],
	) {
		if !mouse.down {
			self.focus = match picker::find_closest(mouse.pos, frames) {
				Some(pick) => Focus::Hovering(pick),
				None => Focus::Idle,
			};
			return;
		}
		match mouse.button {
			Button::Left => {
				let pick = match self.focus {
					Focus::Dragging(pick) => Some(pick),
					_ => picker::find_closest(mouse.pos, frames),
				};
				let pick = match pick {
					Some(pick) => pick,
					None => return,
				};
				self.focus = Focus::Dragging(pick);
				let d = mouse.delta() * DRAG_K;
				slots[pick.model].model.particles[pick.particle]
					.add_pos(V3::new(d[0], d[1], 0.0));
			}
			Button::Right => {
				if let Some(pick) = picker::find_closest(mouse.pos, frames)
				{
					slots[pick.model].model.cut_particle(pick.particle);
				}
			}
			Button::Middle => {
				let pick = match self.focus {
					Focus::Dragging(pick) => Some(pick),
					_ => picker::find_closest(mouse.pos, frames),
				};
				if let Some(pick) = pick {
					let d = mouse.delta() * ROTATE_K;
					slots[pick.model]
						.view
						.rotate_camera(V3::new(d[1], d[0], 0.0));
				}
			}
		}
	}
}
