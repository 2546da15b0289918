use crate::config::{Config, Icon, ItemConfig, Label};
use crate::events::DockEvent;

/// One dock entry: an icon token plus its display label.
///
/// Items compare by value. Reorder lookup is equality-based, so a dock
/// holding two equal items is ambiguous: the first match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub icon: Icon,
    pub label: Label,
}

impl DockItem {
    pub fn new(icon: Icon, label: Label) -> Self {
        Self { icon, label }
    }

    pub fn from_config(cfg: &ItemConfig) -> Option<Self> {
        let icon = cfg.icon?;
        let label = cfg
            .label
            .clone()
            .unwrap_or_else(|| Label::new(icon.to_string()));
        Some(Self { icon, label })
    }
}

/// Ordered dock contents plus the transient gesture state.
///
/// All mutators are total: out-of-range indices and unknown items degrade to
/// no-ops so a half-cancelled gesture can never poison the interaction.
pub struct DockState<T> {
    items: Vec<T>,
    hover_index: Option<usize>,
    drag_index: Option<usize>,
}

impl<T: PartialEq> DockState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            hover_index: None,
            drag_index: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn drag_index(&self) -> Option<usize> {
        self.drag_index
    }

    /// Starts a drag on the item at `index`. Ignored when out of range.
    pub fn begin_drag(&mut self, index: usize) -> GestureAction {
        if index >= self.items.len() {
            return GestureAction::default();
        }

        let changed = self.drag_index != Some(index);
        self.drag_index = Some(index);
        GestureAction::new(changed, false)
    }

    /// Moves the hover target to `target`.
    ///
    /// Every slot accepts every item (reordering is unconstrained); only an
    /// out-of-range target is ignored, to keep the index in bounds.
    pub fn update_hover(&mut self, target: usize) -> GestureAction {
        if target >= self.items.len() {
            return GestureAction::default();
        }

        let changed = self.hover_index != Some(target);
        self.hover_index = Some(target);
        GestureAction::new(changed, false)
    }

    /// Abandons the gesture, restoring the no-active-gesture state.
    /// Idempotent.
    pub fn end_hover(&mut self) -> GestureAction {
        let changed = self.hover_index.is_some() || self.drag_index.is_some();
        self.hover_index = None;
        self.drag_index = None;
        GestureAction::new(changed, false)
    }

    /// Drops `item` onto the slot at `target`.
    ///
    /// The item is located by equality, removed, and reinserted at `target`
    /// in the shifted sequence (clamped to the tail). An item that is not in
    /// the dock leaves the order untouched. Either way the gesture indices
    /// are cleared.
    pub fn commit_reorder(&mut self, item: &T, target: usize) -> GestureAction {
        let cleared = self.end_hover();

        let Some(current) = self.items.iter().position(|i| i == item) else {
            log::debug!("drop ignored: item not in dock");
            return cleared;
        };

        let moved = self.items.remove(current);
        let target = target.min(self.items.len());
        self.items.insert(target, moved);

        let order_changed = current != target;
        GestureAction::new(cleared.should_redraw || order_changed, order_changed)
    }

    /// Single entry point for the host's event loop.
    pub fn apply(&mut self, event: DockEvent<T>) -> GestureAction {
        match event {
            DockEvent::DragStart(index) => self.begin_drag(index),
            DockEvent::HoverEnter(target) => self.update_hover(target),
            DockEvent::HoverLeave => self.end_hover(),
            DockEvent::Drop { item, target } => self.commit_reorder(&item, target),
        }
    }
}

impl DockState<DockItem> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.items.iter().filter_map(DockItem::from_config).collect())
    }
}

/// What the host should do after a mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureAction {
    pub should_redraw: bool,
    pub order_changed: bool,
}

impl GestureAction {
    pub fn new(should_redraw: bool, order_changed: bool) -> Self {
        Self {
            should_redraw,
            order_changed,
        }
    }
}
