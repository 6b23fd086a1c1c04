//! Cooperative yield collaborator.

/// A voluntary suspension point.
///
/// Calling [`yield_now`](YieldPoint::yield_now) may let other queued work run
/// before control returns. It is purely a scheduling hint: it carries no
/// cancellation semantics, affects no ordering guarantee, and must be safe to
/// call arbitrarily often.
pub trait YieldPoint: Send + Sync {
    /// Offer the scheduler a chance to run other work.
    fn yield_now(&self);
}

/// [`YieldPoint`] that yields the current OS thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadYield;

impl YieldPoint for ThreadYield {
    fn yield_now(&self) {
        std::thread::yield_now();
    }
}

/// [`YieldPoint`] that does nothing, for single-threaded hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverYield;

impl YieldPoint for NeverYield {
    fn yield_now(&self) {}
}
