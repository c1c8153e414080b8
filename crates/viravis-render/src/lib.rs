pub mod paint;

pub use paint::SceneSurface;
