mod engine;
mod placement;

/// Packing of many boundaries at once
pub mod batch;
/// State machine of the grid scan
pub mod scan;

#[doc(inline)]
pub use engine::{contains_rect, fitted_steps, pack};
#[doc(inline)]
pub use placement::Placement;
