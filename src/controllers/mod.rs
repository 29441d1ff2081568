pub mod headless;
pub mod lifecycle;
pub mod ports;
pub mod sketch;
pub mod surface;
pub mod view;
