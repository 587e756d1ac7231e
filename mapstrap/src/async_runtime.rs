//! Background task spawning.

use std::future::Future;

/// Spawns the future onto the ambient tokio runtime.
///
/// Panics if called outside a tokio runtime context.
pub fn spawn<T>(future: T)
where
    T: Future + Send + 'static,
    T::Output: Send + 'static,
{
    tokio::spawn(future);
}
