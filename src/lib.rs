pub mod compute;
pub mod constants;
pub mod controller;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod render;
