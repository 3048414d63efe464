pub mod api_extractor;
pub mod component_classifier;
pub mod engine;
pub mod render;
pub mod route_extractor;
pub mod walker;

pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
