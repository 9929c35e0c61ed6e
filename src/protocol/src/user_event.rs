use crate::pr_model::{Pick, PrModel};

#[derive(Debug)]
pub enum UserEvent {
	Update(Vec<PrModel>, UpdateInfo),
}

#[derive(Debug)]
pub struct UpdateInfo {
	pub particle_len: usize,
	pub constraint_len: Vec<usize>,
	pub focus: Option<Pick>,
}
