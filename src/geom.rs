pub mod face;
pub mod point;
