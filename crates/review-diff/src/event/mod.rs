//! Events emitted by the diff renderer.

mod renderer_event;

pub use renderer_event::RendererEvent;
