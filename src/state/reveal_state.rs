//! Fade-and-slide entrance animation for form sections

use std::time::{Duration, Instant};

/// Animation phase of a revealed section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Start delay has not elapsed yet
    Hidden,
    /// Sliding into place
    Entering,
    /// Resting position
    Shown,
}

/// Entrance animation: starts `offset` rows low and eases up to rest
#[derive(Debug, Clone)]
pub struct RevealState {
    /// When the section was mounted
    pub start_time: Instant,
    /// Wait before the animation starts
    pub delay: Duration,
    /// Starting vertical offset in rows
    pub offset: u16,
}

impl RevealState {
    /// Length of the slide
    pub const DURATION: Duration = Duration::from_millis(800);
    /// Rows the section travels
    pub const OFFSET_ROWS: u16 = 2;
    /// Below this progress the section is drawn dimmed
    const DIM_UNTIL: f32 = 0.5;

    pub fn new(delay: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            delay,
            offset: Self::OFFSET_ROWS,
        }
    }

    /// Eased progress in `0.0..=1.0` after `elapsed` since mount
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let Some(animation_elapsed) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let linear =
            (animation_elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // Cubic ease-out for smooth deceleration
        simple_easing::cubic_out(linear)
    }

    pub fn phase_at(&self, elapsed: Duration) -> RevealPhase {
        if elapsed < self.delay {
            RevealPhase::Hidden
        } else if elapsed < self.delay + Self::DURATION {
            RevealPhase::Entering
        } else {
            RevealPhase::Shown
        }
    }

    /// Rows still to travel at `elapsed`
    pub fn offset_at(&self, elapsed: Duration) -> u16 {
        let remaining = 1.0 - self.progress_at(elapsed);
        (remaining * self.offset as f32).round() as u16
    }

    /// Whether the section should still be drawn faded at `elapsed`
    pub fn is_dim_at(&self, elapsed: Duration) -> bool {
        self.progress_at(elapsed) < Self::DIM_UNTIL
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase_at(self.start_time.elapsed())
    }

    pub fn current_offset(&self) -> u16 {
        self.offset_at(self.start_time.elapsed())
    }

    pub fn is_dim(&self) -> bool {
        self.is_dim_at(self.start_time.elapsed())
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RevealPhase::Shown
    }
}
