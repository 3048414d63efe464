pub mod api_pipeline;
pub mod component_pipeline;
pub mod page_pipeline;

pub use api_pipeline::ApiPipeline;
pub use component_pipeline::ComponentPipeline;
pub use page_pipeline::PagePipeline;
