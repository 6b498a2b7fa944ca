//! Countdown timer abstraction
//!
//! A one-pulse hardware timer whose input clock is already divided down to
//! the delay unit (0.1 ms on the reference board). Counting stops on its
//! own once the reload value is reached.

/// One-shot countdown timer
pub trait CountdownTimer {
    /// Load the number of ticks to count
    fn set_reload(&mut self, ticks: u16);

    /// Start counting
    fn start(&mut self);

    /// Stop counting
    fn stop(&mut self);

    /// Update (elapsed) flag
    fn is_elapsed(&self) -> bool;

    /// Clear the update (elapsed) flag
    fn clear_elapsed(&mut self);
}
