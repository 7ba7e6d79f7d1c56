//! Turns raw wheel, touch, click and key input into navigation commands
//! while leaving scrolling of long page content to the host.

use log::debug;

use crate::input::{ClickTarget, Key, ScrollMetrics};

/// The only three ways to ask the book to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavCommand {
    Next,
    Previous,
    GoTo(u16),
}

/// Verdict for one raw event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arbitration {
    /// Let the host scroll natively.
    Native,
    /// Swallow without a command.
    Ignored,
    Command(NavCommand),
    CloseOverlay,
}

impl Arbitration {
    /// Whether the host should cancel its default handling of the event.
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Command(_) | Self::CloseOverlay)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArbiterConfig {
    pub boundary_buffer_px: i32,
    pub wheel_threshold: u32,
    pub boundary_threshold: u32,
    pub wheel_cooldown_ms: u64,
    pub swipe_threshold_px: u32,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            boundary_buffer_px: 4,
            wheel_threshold: 24,
            boundary_threshold: 40,
            wheel_cooldown_ms: 800,
            swipe_threshold_px: 50,
        }
    }
}

impl ArbiterConfig {
    pub const fn with_boundary_buffer_px(mut self, boundary_buffer_px: i32) -> Self {
        self.boundary_buffer_px = boundary_buffer_px;
        self
    }

    pub const fn with_wheel_threshold(mut self, wheel_threshold: u32) -> Self {
        self.wheel_threshold = wheel_threshold;
        self
    }

    pub const fn with_boundary_threshold(mut self, boundary_threshold: u32) -> Self {
        self.boundary_threshold = boundary_threshold;
        self
    }

    pub const fn with_wheel_cooldown_ms(mut self, wheel_cooldown_ms: u64) -> Self {
        self.wheel_cooldown_ms = wheel_cooldown_ms;
        self
    }

    pub const fn with_swipe_threshold_px(mut self, swipe_threshold_px: u32) -> Self {
        self.swipe_threshold_px = swipe_threshold_px;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

/// Per-visit boundary tracking for the visible page's scroll region.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GestureBoundaryState {
    pub at_top: bool,
    pub at_bottom: bool,
    pub pending_boundary_hits: u8,
    direction: ScrollDirection,
}

#[derive(Debug, Clone)]
pub struct GestureArbiter {
    config: ArbiterConfig,
    boundary: GestureBoundaryState,
    cooldown_until_ms: Option<u64>,
    touch_start_x: Option<i32>,
}

impl Default for GestureArbiter {
    fn default() -> Self {
        Self::new(ArbiterConfig::default())
    }
}

impl GestureArbiter {
    pub const fn new(config: ArbiterConfig) -> Self {
        Self {
            config,
            boundary: GestureBoundaryState {
                at_top: false,
                at_bottom: false,
                pending_boundary_hits: 0,
                direction: ScrollDirection::None,
            },
            cooldown_until_ms: None,
            touch_start_x: None,
        }
    }

    pub fn config(&self) -> ArbiterConfig {
        self.config
    }

    pub fn boundary(&self) -> GestureBoundaryState {
        self.boundary
    }

    /// Forget boundary arming; called whenever a transition commits.
    pub fn reset_boundary(&mut self) {
        self.boundary = GestureBoundaryState::default();
    }

    pub fn in_cooldown(&self, now_ms: u64) -> bool {
        self.cooldown_until_ms.is_some_and(|until| now_ms < until)
    }

    /// `region` is the scroll geometry of the target's content region when
    /// the event landed inside one; `page_scrollable` describes the visible
    /// page.
    pub fn on_wheel(
        &mut self,
        delta_y: i32,
        region: Option<ScrollMetrics>,
        page_scrollable: bool,
        now_ms: u64,
    ) -> Arbitration {
        if delta_y == 0 {
            return Arbitration::Ignored;
        }
        let direction = if delta_y > 0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        let magnitude = delta_y.unsigned_abs();

        let metrics = match region {
            Some(metrics) if page_scrollable => metrics,
            _ => {
                if self.in_cooldown(now_ms) || magnitude < self.config.wheel_threshold {
                    return Arbitration::Ignored;
                }
                return self.emit(direction_command(direction), now_ms);
            }
        };

        let buffer = self.config.boundary_buffer_px;
        self.boundary.at_top = metrics.at_top(buffer);
        self.boundary.at_bottom = metrics.at_bottom(buffer);

        if direction != self.boundary.direction {
            self.boundary.direction = direction;
            self.boundary.pending_boundary_hits = 0;
        }

        let at_edge = match direction {
            ScrollDirection::Down => self.boundary.at_bottom,
            ScrollDirection::Up => self.boundary.at_top,
            ScrollDirection::None => false,
        };
        if !at_edge {
            self.boundary.pending_boundary_hits = 0;
            return Arbitration::Native;
        }

        if self.in_cooldown(now_ms) {
            return Arbitration::Ignored;
        }

        if self.boundary.pending_boundary_hits == 0 {
            self.boundary.pending_boundary_hits = 1;
            debug!(
                "gesture: boundary armed direction={:?} scroll_top={}",
                direction, metrics.scroll_top
            );
            return Arbitration::Ignored;
        }

        if magnitude < self.config.boundary_threshold {
            return Arbitration::Ignored;
        }

        self.emit(direction_command(direction), now_ms)
    }

    pub fn on_touch_start(&mut self, x: i32) {
        self.touch_start_x = Some(x);
    }

    pub fn on_touch_cancel(&mut self) {
        self.touch_start_x = None;
    }

    pub fn on_touch_end(&mut self, x: i32) -> Arbitration {
        let Some(start_x) = self.touch_start_x.take() else {
            return Arbitration::Ignored;
        };

        let delta = x.saturating_sub(start_x);
        if delta.unsigned_abs() <= self.config.swipe_threshold_px {
            return Arbitration::Ignored;
        }

        let command = if delta < 0 {
            NavCommand::Next
        } else {
            NavCommand::Previous
        };
        debug!("gesture: swipe delta_x={} -> {:?}", delta, command);
        Arbitration::Command(command)
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Arbitration {
        match target {
            ClickTarget::Interactive => Arbitration::Native,
            ClickTarget::ScrollRegion(metrics)
                if !metrics.at_bottom(self.config.boundary_buffer_px) =>
            {
                Arbitration::Native
            }
            ClickTarget::ScrollRegion(_) | ClickTarget::Page => {
                Arbitration::Command(NavCommand::Next)
            }
        }
    }

    pub fn on_key(&mut self, key: Key, total_pages: u16) -> Arbitration {
        match key {
            Key::ArrowRight | Key::Space => Arbitration::Command(NavCommand::Next),
            Key::ArrowLeft => Arbitration::Command(NavCommand::Previous),
            Key::Home => Arbitration::Command(NavCommand::GoTo(0)),
            Key::End => Arbitration::Command(NavCommand::GoTo(total_pages.saturating_sub(1))),
            Key::Escape => Arbitration::CloseOverlay,
            Key::Other => Arbitration::Native,
        }
    }

    fn emit(&mut self, command: NavCommand, now_ms: u64) -> Arbitration {
        self.reset_boundary();
        self.cooldown_until_ms = Some(now_ms.saturating_add(self.config.wheel_cooldown_ms));
        debug!(
            "gesture: wheel -> {:?} cooldown_until={}",
            command,
            now_ms.saturating_add(self.config.wheel_cooldown_ms)
        );
        Arbitration::Command(command)
    }
}

fn direction_command(direction: ScrollDirection) -> NavCommand {
    match direction {
        ScrollDirection::Up => NavCommand::Previous,
        ScrollDirection::Down | ScrollDirection::None => NavCommand::Next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MID: ScrollMetrics = ScrollMetrics::new(300, 2_000, 600);
    const BOTTOM: ScrollMetrics = ScrollMetrics::new(1_398, 2_000, 600);
    const TOP: ScrollMetrics = ScrollMetrics::new(0, 2_000, 600);

    #[test]
    fn small_wheel_delta_on_plain_page_is_ignored() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(arbiter.on_wheel(10, None, false, 0), Arbitration::Ignored);
        assert_eq!(arbiter.on_wheel(-23, None, false, 0), Arbitration::Ignored);
    }

    #[test]
    fn wheel_on_plain_page_emits_once_per_cooldown() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(
            arbiter.on_wheel(60, None, false, 1_000),
            Arbitration::Command(NavCommand::Next)
        );
        assert_eq!(arbiter.on_wheel(80, None, false, 1_100), Arbitration::Ignored);
        assert_eq!(arbiter.on_wheel(80, None, false, 1_799), Arbitration::Ignored);
        assert_eq!(
            arbiter.on_wheel(-80, None, false, 1_800),
            Arbitration::Command(NavCommand::Previous)
        );
    }

    #[test]
    fn scrolling_inside_content_stays_native() {
        let mut arbiter = GestureArbiter::default();
        let verdict = arbiter.on_wheel(120, Some(MID), true, 0);
        assert_eq!(verdict, Arbitration::Native);
        assert!(!verdict.prevents_default());
        assert_eq!(arbiter.on_wheel(-120, Some(MID), true, 0), Arbitration::Native);
        assert_eq!(arbiter.boundary().pending_boundary_hits, 0);
    }

    #[test]
    fn boundary_needs_a_second_deliberate_hit() {
        let mut arbiter = GestureArbiter::default();

        assert_eq!(arbiter.on_wheel(120, Some(BOTTOM), true, 0), Arbitration::Ignored);
        assert!(arbiter.boundary().at_bottom);
        assert_eq!(arbiter.boundary().pending_boundary_hits, 1);

        assert_eq!(arbiter.on_wheel(10, Some(BOTTOM), true, 50), Arbitration::Ignored);
        assert_eq!(
            arbiter.on_wheel(120, Some(BOTTOM), true, 100),
            Arbitration::Command(NavCommand::Next)
        );
        assert_eq!(arbiter.boundary(), GestureBoundaryState::default());
    }

    #[test]
    fn reversing_direction_disarms_the_boundary() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(arbiter.on_wheel(120, Some(BOTTOM), true, 0), Arbitration::Ignored);
        assert_eq!(arbiter.on_wheel(-120, Some(BOTTOM), true, 10), Arbitration::Native);
        assert_eq!(arbiter.on_wheel(120, Some(BOTTOM), true, 20), Arbitration::Ignored);
        assert_eq!(arbiter.boundary().pending_boundary_hits, 1);
    }

    #[test]
    fn top_boundary_turns_backward() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(arbiter.on_wheel(-90, Some(TOP), true, 0), Arbitration::Ignored);
        assert_eq!(
            arbiter.on_wheel(-90, Some(TOP), true, 10),
            Arbitration::Command(NavCommand::Previous)
        );
    }

    #[test]
    fn region_on_non_scrollable_page_takes_direct_path() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(
            arbiter.on_wheel(60, Some(MID), false, 0),
            Arbitration::Command(NavCommand::Next)
        );
    }

    #[test]
    fn swipe_direction_maps_to_commands() {
        let mut arbiter = GestureArbiter::default();

        arbiter.on_touch_start(300);
        assert_eq!(
            arbiter.on_touch_end(200),
            Arbitration::Command(NavCommand::Next)
        );

        arbiter.on_touch_start(100);
        assert_eq!(
            arbiter.on_touch_end(220),
            Arbitration::Command(NavCommand::Previous)
        );

        arbiter.on_touch_start(100);
        assert_eq!(arbiter.on_touch_end(150), Arbitration::Ignored);

        assert_eq!(arbiter.on_touch_end(0), Arbitration::Ignored);

        arbiter.on_touch_start(400);
        arbiter.on_touch_cancel();
        assert_eq!(arbiter.on_touch_end(0), Arbitration::Ignored);
    }

    #[test]
    fn clicks_respect_interactive_and_unread_content() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(
            arbiter.on_click(ClickTarget::Interactive),
            Arbitration::Native
        );
        assert_eq!(
            arbiter.on_click(ClickTarget::ScrollRegion(MID)),
            Arbitration::Native
        );
        assert_eq!(
            arbiter.on_click(ClickTarget::ScrollRegion(BOTTOM)),
            Arbitration::Command(NavCommand::Next)
        );
        assert_eq!(
            arbiter.on_click(ClickTarget::Page),
            Arbitration::Command(NavCommand::Next)
        );
    }

    #[test]
    fn keys_map_to_commands() {
        let mut arbiter = GestureArbiter::default();
        assert_eq!(
            arbiter.on_key(Key::Space, 6),
            Arbitration::Command(NavCommand::Next)
        );
        assert_eq!(
            arbiter.on_key(Key::ArrowLeft, 6),
            Arbitration::Command(NavCommand::Previous)
        );
        assert_eq!(
            arbiter.on_key(Key::End, 6),
            Arbitration::Command(NavCommand::GoTo(5))
        );
        assert_eq!(
            arbiter.on_key(Key::Home, 6),
            Arbitration::Command(NavCommand::GoTo(0))
        );
        assert_eq!(arbiter.on_key(Key::Escape, 6), Arbitration::CloseOverlay);
        assert_eq!(arbiter.on_key(Key::Other, 6), Arbitration::Native);
    }
}
