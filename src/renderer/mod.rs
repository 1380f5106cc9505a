//! wgpu rendering module
//!
//! Every frame is a flat list of solid-colored triangles: the driver's
//! rectangles are batched on the CPU and uploaded once per present.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::RectBatch;
pub use vertex::Vertex;
