pub mod pr_model;
pub mod user_event;
pub mod view;
use pr_model::PrModel;

use serde::{Deserialize, Serialize};

pub type V2 = nalgebra::Vector2<f32>;
pub type V3 = nalgebra::Vector3<f32>;

#[derive(Debug, Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(Vec<PrModel>),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> Vec<u8> {
		bincode::serialize(&self).unwrap()
	}

	pub fn from_bytes(bytes: &[u8]) -> Self {
		bincode::deserialize(bytes).unwrap()
	}
}
