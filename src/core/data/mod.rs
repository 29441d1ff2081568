pub mod colour;
pub mod line;
pub mod pixel_buffer;
pub mod point;
pub mod seed;
