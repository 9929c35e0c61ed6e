pub mod constraint;
pub mod mesh;
pub mod model;
pub mod particle;
pub mod picker;
pub mod transform;

pub type V3 = nalgebra::Vector3<f32>;
