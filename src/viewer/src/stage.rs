use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};
use protocol::view::View;
use protocol::V2;
use verlet::model::Model;
use verlet::transform;

use crate::interaction::{Focus, Interaction};
use crate::mouse::{Button, Mouse};

pub struct Slot {
	pub model: Model,
	pub view: View,
}

// everything the frame scheduler drives: the models with their views,
// the cursor state and the interaction machine
#[derive(Default)]
pub struct Stage {
	pub slots: Vec<Slot>,
	mouse: Mouse,
	interaction: Interaction,
}

impl Stage {
	pub fn add_model(&mut self, model: Model, view: View) {
		eprintln!(
			"INFO: add model: {} particles, {} constraints",
			model.particles.len(),
			model.constraints.len(),
		);
		self.slots.push(Slot { model, view });
	}

	pub fn on_cursor(&mut self, pos: V2) {
		self.mouse.move_to(pos);
	}

	pub fn on_button(&mut self, button: Button, pressed: bool) {
		if pressed {
			self.mouse.press(button);
		} else {
			self.mouse.release();
		}
	}

	pub fn focus(&self) -> Focus {
		self.interaction.focus()
	}

	// one external frame tick, in strict order per model: integrate,
	// relax, project. the interaction machine then consumes the fresh
	// snapshots, so its mutations land before the next tick.
	pub fn step(&mut self) -> UserEvent {
		for slot in self.slots.iter_mut() {
			slot.model.update_frame();
		}
		let frames: Vec<PrModel> = self
			.slots
			.iter()
			.map(|slot| transform::pr_model(&slot.model, &slot.view))
			.collect();
		self.interaction
			.handle_mouse(&self.mouse, &mut self.slots, &frames);
		self.mouse.end_frame();
		let info = UpdateInfo {
			particle_len: self
				.slots
				.iter()
				.map(|s| s.model.particles.len())
				.sum(),
			constraint_len: self
				.slots
				.iter()
				.map(|s| s.model.constraints.len())
				.collect(),
			focus: self.interaction.focus().pick(),
		};
		UserEvent::Update(frames, info)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use protocol::pr_model::Pick;
	use verlet::mesh;

	#[test]
	fn test_step_snapshots() {
		let mut stage = Stage::default();
		stage.add_model(mesh::new_cloth(4, 3, 10.0), View::default());
		stage.add_model(mesh::new_cloth(2, 2, 10.0), View::default());
		let UserEvent::Update(frames, info) = stage.step();
		assert_eq!(frames.len(), 2);
		assert_eq!(frames[0].vertices.len(), 12);
		assert_eq!(frames[0].constraints.len(), 3 * 3 + 4 * 2);
		assert_eq!(frames[1].vertices.len(), 4);
		assert_eq!(info.particle_len, 16);
		assert_eq!(info.constraint_len, vec![17, 4]);
		// the idle cursor sits on the pinned corner vertex of the
		// first cloth, so the machine reports a hover
		assert_eq!(
			info.focus,
			Some(Pick {
				model: 0,
				particle: 0,
			})
		);
	}

	#[test]
	fn test_step_advances_simulation() {
		let mut stage = Stage::default();
		let mut model = Model::default();
		model.create_particle(0.0, 0.0, 0.0, false);
		stage.add_model(model, View::default());
		stage.step();
		stage.step();
		// gravity pulls the free particle down between snapshots
		let y = stage.slots[0].model.particles[0].pos[1];
		assert!((y - 0.6).abs() < 1e-5);
	}

	#[test]
	fn test_drag_through_stage() {
		let mut stage = Stage::default();
		let mut model = Model::default().with_gravity(0.0);
		model.create_particle(0.0, 0.0, 0.0, false);
		stage.add_model(model, View::default());
		stage.on_cursor(V2::new(1.0, 1.0));
		stage.on_button(Button::Left, true);
		stage.step();
		match stage.focus() {
			Focus::Dragging(pick) => {
				assert_eq!(pick.particle, 0);
			}
			other => panic!("expected drag, got {:?}", other),
		}
		let p = stage.slots[0].model.particles[0].pos;
		assert!((p[0] - 25.0).abs() < 1e-4);
		assert!((p[1] - 25.0).abs() < 1e-4);
		// the delta was consumed, a still cursor adds nothing more
		let before = stage.slots[0].model.particles[0].pos;
		stage.on_button(Button::Left, false);
		stage.step();
		let after = stage.slots[0].model.particles[0].pos;
		// only the verlet momentum from the drag carries over
		assert!((after - before).magnitude() > 0.0);
		assert_eq!(stage.focus(), Focus::Idle);
	}
}
