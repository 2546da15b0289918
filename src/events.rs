/// Pointer/gesture events the host layer feeds into [`DockState::apply`].
///
/// [`DockState::apply`]: crate::dock::DockState::apply
#[derive(Debug, Clone)]
pub enum DockEvent<T> {
    DragStart(usize),
    HoverEnter(usize),
    HoverLeave,
    Drop { item: T, target: usize },
}

/// Out-of-band notifications for the host application.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigReload,
}
