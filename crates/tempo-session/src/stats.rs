//! Stats cache hook: the recompute seam.
//!
//! The session server does not compute performance statistics itself —
//! that lives in a separate service with its own storage. What this core
//! owns is the *trigger*: when a session switches between vanilla, relax,
//! and autopilot (or changes game mode), its cached stats for the new
//! mode must be recomputed.
//!
//! The [`StatsCache`] trait is that trigger surface. Production wires it
//! to the real stats service; tests use a recording mock; development
//! can run with [`NoopStatsCache`].

use crate::Session;

/// Recomputes a session's cached statistics for one mode variant.
///
/// All three entry points are fire-and-forget: the handlers await the
/// call so the implementation can do its own queuing, but no result is
/// consumed and a lazy implementation may simply mark the cache dirty.
///
/// `Send + Sync + 'static` because the cache is shared across the
/// connection tasks for the lifetime of the server.
pub trait StatsCache: Send + Sync + 'static {
    /// Recompute the vanilla-variant stats for `session`'s user and
    /// current game mode.
    fn recompute_vanilla(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = ()> + Send;

    /// Recompute the relax-variant stats.
    fn recompute_relax(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = ()> + Send;

    /// Recompute the autopilot-variant stats.
    fn recompute_autopilot(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = ()> + Send;
}

/// A stats cache that does nothing.
///
/// For development servers and tests that don't care about recomputes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatsCache;

impl StatsCache for NoopStatsCache {
    async fn recompute_vanilla(&self, _session: &Session) {}

    async fn recompute_relax(&self, _session: &Session) {}

    async fn recompute_autopilot(&self, _session: &Session) {}
}
