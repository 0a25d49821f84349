pub mod canvas;
pub mod measure;
pub mod style;
