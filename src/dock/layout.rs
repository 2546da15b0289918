use crate::config::DockTuning;
use crate::dock::model::DockState;
use crate::dock::scale::{proximity_value, trailing_margin};

/// Per-item visual transform for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Icon edge length.
    pub size: f64,
    /// Vertical translation; negative lifts the icon.
    pub lift: f64,
    /// Gap after the item along the dock axis.
    pub trailing_margin: f64,
}

/// Computes one transform per item for the current gesture state.
///
/// Size and lift follow the proximity falloff around the hovered slot; the
/// last item additionally carries the edge-margin reservation while a drag
/// hovers it.
pub fn item_transforms<T: PartialEq>(
    state: &DockState<T>,
    tuning: &DockTuning,
) -> Vec<ItemTransform> {
    let count = state.items().len();
    let hovered = state.hover_index();

    (0..count)
        .map(|index| ItemTransform {
            size: proximity_value(hovered, index, tuning.base_size, tuning.peak_size),
            lift: proximity_value(hovered, index, tuning.base_lift, tuning.peak_lift),
            trailing_margin: if index + 1 == count {
                trailing_margin(state, tuning)
            } else {
                tuning.edge_margin_collapsed
            },
        })
        .collect()
}
