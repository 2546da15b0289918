use super::EDGE_MARGIN_BLEND;
use crate::config::DockTuning;
use crate::dock::model::DockState;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolates between `base` and `peak` by pointer proximity.
///
/// Distance is taken along the item axis in whole slots; the falloff is
/// `exp(-distance)`, so the hovered item sits exactly at `peak` and the
/// effect decays toward `base` on both neighbors symmetrically.
pub fn proximity_value(hovered: Option<usize>, index: usize, base: f64, peak: f64) -> f64 {
    let Some(hovered) = hovered else {
        return base;
    };

    let distance = hovered.abs_diff(index) as f64;
    lerp(base, peak, (-distance).exp())
}

/// Trailing gap after the last slot.
///
/// While a drag hovers the last slot, part of the expanded gap is reserved
/// so the margin does not jump when the drop lands at the sequence boundary.
/// The blend factor is fixed at 0.2.
pub fn trailing_margin<T: PartialEq>(state: &DockState<T>, tuning: &DockTuning) -> f64 {
    let last = state.items().len().checked_sub(1);

    match (state.drag_index(), state.hover_index()) {
        (Some(_), Some(hovered)) if Some(hovered) == last => lerp(
            tuning.edge_margin_expanded,
            tuning.edge_margin_collapsed,
            EDGE_MARGIN_BLEND,
        ),
        _ => tuning.edge_margin_collapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_hover_returns_base() {
        for index in 0..8 {
            assert_eq!(proximity_value(None, index, 48.0, 64.0), 48.0);
        }
    }

    #[test]
    fn hovered_item_hits_peak() {
        assert_eq!(proximity_value(Some(3), 3, 48.0, 64.0), 64.0);
        assert_eq!(proximity_value(Some(0), 0, 0.0, -12.0), -12.0);
    }

    #[test]
    fn falloff_is_symmetric_around_hover() {
        for d in 1..5usize {
            let left = proximity_value(Some(5), 5 - d, 48.0, 64.0);
            let right = proximity_value(Some(5), 5 + d, 48.0, 64.0);
            assert_eq!(left, right);
        }
    }

    #[test]
    fn falloff_decays_toward_base_with_distance() {
        let values: Vec<f64> = (0..6)
            .map(|i| proximity_value(Some(0), i, 48.0, 64.0))
            .collect();

        for pair in values.windows(2) {
            assert!(pair[0] > pair[1]);
            assert!(pair[1] > 48.0);
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(8.0, 56.0, 0.0), 8.0);
        assert_eq!(lerp(8.0, 56.0, 1.0), 56.0);
        assert_eq!(lerp(0.0, 10.0, 0.2), 2.0);
    }

    #[test]
    fn trailing_margin_collapsed_outside_drag() {
        let tuning = DockTuning::default();
        let mut state = DockState::new(vec!['a', 'b', 'c']);

        assert_eq!(trailing_margin(&state, &tuning), tuning.edge_margin_collapsed);

        // plain hover without a drag does not reserve the gap
        state.update_hover(2);
        assert_eq!(trailing_margin(&state, &tuning), tuning.edge_margin_collapsed);
    }

    #[test]
    fn trailing_margin_blends_while_drag_hovers_last_slot() {
        let tuning = DockTuning::default();
        let mut state = DockState::new(vec!['a', 'b', 'c']);
        state.begin_drag(0);
        state.update_hover(2);

        let expected = lerp(
            tuning.edge_margin_expanded,
            tuning.edge_margin_collapsed,
            0.2,
        );
        assert_eq!(trailing_margin(&state, &tuning), expected);

        // hovering a non-terminal slot keeps the normal gap
        state.update_hover(1);
        assert_eq!(trailing_margin(&state, &tuning), tuning.edge_margin_collapsed);
    }
}
