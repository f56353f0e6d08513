pub mod basis;
pub mod coordinates;
pub mod mesh;
