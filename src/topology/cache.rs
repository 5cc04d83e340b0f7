//! Cache invalidation shared by structures that memoize derived views.

/// Anything that caches a derived view of the complex (the filtration
/// index, key assignments, …) should implement this.
pub trait InvalidateCache {
    /// Drop every derived view so the next query rebuilds it.
    fn invalidate_cache(&mut self);
}
