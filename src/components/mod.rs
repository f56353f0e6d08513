pub mod mesh;
pub mod point;
