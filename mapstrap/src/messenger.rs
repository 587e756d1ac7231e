//! Notification channel from map state to the host UI loop.

use std::sync::Arc;

/// Notifies the host that the map should be redrawn.
///
/// Map state does not draw anything by itself. Whenever it changes in a way
/// that should be visible on screen (the view is replaced, overlay features
/// are merged into the data layer), it calls [`Messenger::request_redraw`]
/// and leaves scheduling of the actual draw to the host.
pub trait Messenger: Send + Sync {
    /// Requests a redraw of the attached surface.
    fn request_redraw(&self);
}

/// Messenger that ignores all requests.
///
/// Useful for maps that are never drawn, e.g. in tests or batch processing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}

impl<T: Messenger + ?Sized> Messenger for Arc<T> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}
