//! Frame scheduling for the draw cycle.
//!
//! The driver keeps at most one continuation armed. It asks for a display
//! frame callback first and falls back to a fixed timer when the host has
//! none. Either way it gets back a handle it can cancel.

use std::time::{Duration, Instant};

/// Delay used when frame callbacks are unavailable.
pub const TIMER_FALLBACK: Duration = Duration::from_millis(20);

/// A cancellable pending continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameHandle {
    AnimationFrame(u64),
    Timeout(u64),
}

/// Source of "run the next cycle" ticks.
pub trait FrameScheduler {
    /// Arms a callback for the next display frame. `None` when unsupported.
    fn request_animation_frame(&mut self) -> Option<FrameHandle>;

    /// Arms a callback after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> FrameHandle;

    /// Disarms `handle`. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);

    /// Consumes `handle` and returns `true` if it is due at `now`.
    fn fire(&mut self, handle: FrameHandle, now: Instant) -> bool;

    /// Number of continuations still armed.
    fn armed(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
enum Deadline {
    /// Due once a frame later than the recorded one has been presented.
    AfterFrame(u64),
    At(Instant),
}

/// Host-driven scheduler.
///
/// The host calls [`FrameLoop::present`] whenever it puts a frame on screen;
/// frame callbacks requested before that become due. Timeouts are due once
/// their deadline has passed.
#[derive(Debug)]
pub struct FrameLoop {
    frame_callbacks: bool,
    next_id: u64,
    frame: u64,
    armed: Vec<(FrameHandle, Deadline)>,
}

impl FrameLoop {
    /// Scheduler with display frame callbacks.
    pub fn new() -> Self {
        Self {
            frame_callbacks: true,
            next_id: 1,
            frame: 0,
            armed: Vec::new(),
        }
    }

    /// Scheduler without frame callbacks; every cycle goes through the timer fallback.
    pub fn timer_only() -> Self {
        Self {
            frame_callbacks: false,
            ..Self::new()
        }
    }

    pub fn supports_frame_callbacks(&self) -> bool {
        self.frame_callbacks
    }

    /// Marks a new display frame as presented.
    pub fn present(&mut self) {
        self.frame += 1;
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameLoop {
    fn request_animation_frame(&mut self) -> Option<FrameHandle> {
        if !self.frame_callbacks {
            return None;
        }
        let handle = FrameHandle::AnimationFrame(self.next_id());
        self.armed.push((handle, Deadline::AfterFrame(self.frame)));
        Some(handle)
    }

    fn set_timeout(&mut self, delay: Duration) -> FrameHandle {
        let handle = FrameHandle::Timeout(self.next_id());
        self.armed.push((handle, Deadline::At(Instant::now() + delay)));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.armed.retain(|(armed, _)| *armed != handle);
    }

    fn fire(&mut self, handle: FrameHandle, now: Instant) -> bool {
        let Some(position) = self.armed.iter().position(|(armed, _)| *armed == handle) else {
            return false;
        };
        let due = match self.armed[position].1 {
            Deadline::AfterFrame(frame) => self.frame > frame,
            Deadline::At(deadline) => now >= deadline,
        };
        if due {
            self.armed.remove(position);
        }
        due
    }

    fn armed(&self) -> usize {
        self.armed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_frame_fires_after_present() {
        let mut scheduler = FrameLoop::new();
        let handle = scheduler.request_animation_frame().unwrap();
        assert!(!scheduler.fire(handle, Instant::now()));

        scheduler.present();
        assert!(scheduler.fire(handle, Instant::now()));
        assert_eq!(scheduler.armed(), 0);
        assert!(!scheduler.fire(handle, Instant::now()));
    }

    #[test]
    fn test_timer_only_has_no_frame_callbacks() {
        let mut scheduler = FrameLoop::timer_only();
        assert!(!scheduler.supports_frame_callbacks());
        assert_eq!(scheduler.request_animation_frame(), None);
    }

    #[test]
    fn test_timeout_fires_after_deadline() {
        let mut scheduler = FrameLoop::timer_only();
        let before = Instant::now();
        let handle = scheduler.set_timeout(TIMER_FALLBACK);
        assert!(matches!(handle, FrameHandle::Timeout(_)));
        assert!(!scheduler.fire(handle, before));
        assert!(scheduler.fire(handle, Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn test_cancel_disarms_exactly_one_handle() {
        let mut scheduler = FrameLoop::new();
        let first = scheduler.request_animation_frame().unwrap();
        let second = scheduler.set_timeout(TIMER_FALLBACK);
        scheduler.cancel(first);

        assert_eq!(scheduler.armed(), 1);
        scheduler.present();
        assert!(!scheduler.fire(first, Instant::now()));
        assert!(scheduler.fire(second, Instant::now() + Duration::from_secs(1)));
    }
}
