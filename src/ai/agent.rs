use std::time::Instant;

/// Universal interface for move-selecting agents.
///
/// `S` is the game-state type the agent plays on; the two board variants
/// share every agent through this parameter.
pub trait Agent<S>: Send {
    /// Choose the successor state to play from `state`. The deadline is the
    /// caller's time budget; agents honor it by sizing their search depth
    /// before the call rather than aborting mid-search.
    fn select_move(&mut self, state: &S, deadline: Instant) -> S;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
