pub mod layout;
pub mod model;
pub mod scale;

pub use layout::{ItemTransform, item_transforms};
pub use model::{DockItem, DockState, GestureAction};
pub use scale::{lerp, proximity_value, trailing_margin};

pub const BASE_ITEM_SIZE: f64 = 48.0; // resting icon edge length
pub const PEAK_ITEM_SIZE: f64 = 64.0; // edge length directly under the pointer
pub const BASE_LIFT: f64 = 0.0;
pub const PEAK_LIFT: f64 = -12.0; // upward travel at distance zero
pub const EDGE_MARGIN_COLLAPSED: f64 = 8.0; // normal inter-item gap
pub const EDGE_MARGIN_EXPANDED: f64 = 56.0; // gap reserved for a drop at the tail
pub const EDGE_MARGIN_BLEND: f64 = 0.2;
