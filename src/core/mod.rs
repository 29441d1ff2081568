pub mod data;
pub mod drawing;
pub mod lifecycle;
