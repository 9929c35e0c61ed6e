use protocol::pr_model::{Pick, PrModel};
use protocol::V2;

pub const PICK_RADIUS: f32 = 10.0;

// linear scan over every projected vertex of every model, no spatial
// index. a candidate must sit inside the pixel radius, be at least as
// close on screen as the best so far and strictly deeper, so screen
// distance ties resolve toward the vertex nearer the camera.
pub fn find_closest(cursor: V2, models: &[PrModel]) -> Option<Pick> {
	let mut smallest = f32::INFINITY;
	let mut highest_z = f32::NEG_INFINITY;
	let mut found = None;
	for (m, pr_model) in models.iter().enumerate() {
		for (i, vertex) in pr_model.vertices.iter().enumerate() {
			let pos = V2::new(vertex.pos[0], vertex.pos[1]);
			let dist = (pos - cursor).magnitude();
			if dist < PICK_RADIUS
				&& dist <= smallest
				&& vertex.depth > highest_z
			{
				smallest = dist;
				highest_z = vertex.depth;
				found = Some(Pick {
					model: m,
					particle: i,
				});
			}
		}
	}
	found
}
