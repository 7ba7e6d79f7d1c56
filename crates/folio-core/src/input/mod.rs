//! Input abstraction layer.

mod scripted;

pub use scripted::{ScriptedInput, TimedEvent};

/// Scroll geometry of a page's inner content region, in CSS pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: i32,
    pub scroll_height: i32,
    pub client_height: i32,
}

impl ScrollMetrics {
    pub const fn new(scroll_top: i32, scroll_height: i32, client_height: i32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn at_top(&self, buffer_px: i32) -> bool {
        self.scroll_top <= buffer_px
    }

    pub fn at_bottom(&self, buffer_px: i32) -> bool {
        self.scroll_top.saturating_add(self.client_height)
            >= self.scroll_height.saturating_sub(buffer_px)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Escape,
    Home,
    End,
    Other,
}

/// What a click on the visible page landed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClickTarget {
    /// Link, button, card or any other interactive descendant.
    Interactive,
    /// Plain page surface.
    Page,
    /// Inside the page's scrollable region.
    ScrollRegion(ScrollMetrics),
}

/// Raw events delivered by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel movement; positive scrolls down. `region` is set when
    /// the event target lies inside the page's scrollable content.
    Wheel {
        delta_y: i32,
        region: Option<ScrollMetrics>,
    },
    TouchStart {
        x: i32,
    },
    TouchEnd {
        x: i32,
    },
    TouchCancel,
    Key(Key),
    Click(ClickTarget),
    /// Entry chosen in the table of contents.
    TocSelect(u16),
    ToggleToc,
    ToggleAnimations,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
