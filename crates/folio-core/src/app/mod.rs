//! Page navigation state machine: turn acceptance, flip timers, commits,
//! reveal cascade and the views that follow the current page.

use core::fmt::Write;

use heapless::{String, Vec};
use log::{debug, warn};

use crate::{
    chrome::chrome_view,
    effects::Effects,
    gesture::{Arbitration, GestureArbiter, NavCommand},
    input::{InputEvent, InputProvider, Key},
    pages::{MAX_PAGES, PageRegistry},
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, BookView, PageFace, PageView, RevealView,
        TurnTag,
    },
    reveal::RevealSchedule,
    settings::AnimationPreference,
};

const POSITION_LABEL_BYTES: usize = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationConfig {
    /// Single-page flip.
    pub flip_ms: u16,
    /// Multi-page jump, timed once for the whole batch.
    pub jump_ms: u16,
    pub reveal_base_ms: u16,
    pub reveal_stride_ms: u16,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            flip_ms: 600,
            jump_ms: 900,
            reveal_base_ms: 120,
            reveal_stride_ms: 90,
        }
    }
}

impl NavigationConfig {
    pub const fn with_flip_ms(mut self, flip_ms: u16) -> Self {
        self.flip_ms = flip_ms;
        self
    }

    pub const fn with_jump_ms(mut self, jump_ms: u16) -> Self {
        self.jump_ms = jump_ms;
        self
    }

    pub const fn with_reveal_timing(mut self, base_ms: u16, stride_ms: u16) -> Self {
        self.reveal_base_ms = base_ms;
        self.reveal_stride_ms = stride_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TurnDirection {
    #[default]
    None,
    Forward,
    Backward,
}

/// `Idle` when `is_animating` is false, `Transitioning { direction }`
/// otherwise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationState {
    pub current_page: u16,
    pub is_animating: bool,
    pub direction: TurnDirection,
}

impl NavigationState {
    pub const fn initial() -> Self {
        Self {
            current_page: 0,
            is_animating: false,
            direction: TurnDirection::None,
        }
    }
}

/// Result of a navigation request. Everything but `Accepted` is a silent
/// no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavOutcome {
    Accepted,
    /// A transition is already in flight.
    Busy,
    /// `next` on the last page or `previous` on the first.
    AtBoundary,
    InvalidTarget,
    SamePage,
}

impl NavOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Scheduled completion of an accepted turn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingTurn {
    from: u16,
    target: u16,
    direction: TurnDirection,
    due_ms: u64,
}

pub struct BookApp<IN, FX>
where
    IN: InputProvider,
    FX: Effects,
{
    pages: PageRegistry,
    input: IN,
    effects: FX,
    config: NavigationConfig,
    arbiter: GestureArbiter,
    preference: AnimationPreference,
    nav: NavigationState,
    faces: Vec<PageFace, MAX_PAGES>,
    pending_turn: Option<PendingTurn>,
    transition: Option<AnimationSpec>,
    reveal: RevealSchedule,
    announcement_serial: u32,
    completion_fired: bool,
    toc_open: bool,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
