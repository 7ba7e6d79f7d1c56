//! App-level view models and animation metadata.

use crate::chrome::ChromeView;

/// Transient state class of a page while it is being turned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnTag {
    /// Turning over to reveal what lies after it (`flipping`).
    Forward,
    /// Turning back into view (`unflipping`).
    Backward,
}

/// Turn state the renderer maps onto page classes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageFace {
    /// Already turned over (`flipped`): every page before the current one.
    pub flipped: bool,
    pub turning: Option<TurnTag>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    FlipForward,
    FlipBackward,
    Jump,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageView<'a> {
    pub index: u16,
    pub name: &'a str,
    pub face: PageFace,
    pub is_current: bool,
}

impl Default for PageView<'_> {
    fn default() -> Self {
        Self {
            index: 0,
            name: "",
            face: PageFace::default(),
            is_current: false,
        }
    }
}

/// Reveal progress for the current page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealView {
    pub page: u16,
    /// Changes whenever the cascade restarts; renderers clear and re-flush
    /// fragment markers when they see a new value.
    pub generation: u32,
    /// Document-order prefix of fragments currently marked revealed.
    pub revealed: usize,
    pub total: usize,
}

/// Snapshot consumed by the host renderer.
#[derive(Clone, Copy, Debug)]
pub struct BookView<'a> {
    pub pages: &'a [PageView<'a>],
    pub chrome: ChromeView<'a>,
    /// `"3/6"` style counter.
    pub position: &'a str,
    pub reveal: Option<RevealView>,
    pub animation: Option<AnimationFrame>,
    pub toc_open: bool,
    pub animations_enabled: bool,
    /// Bumped on every committed turn so repeated names still re-announce.
    pub announcement_serial: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_progress_runs_to_completion() {
        let spec = AnimationSpec::new(AnimationKind::FlipForward, 1_000, 600);
        assert_eq!(
            spec.frame(1_000),
            Some(AnimationFrame {
                kind: AnimationKind::FlipForward,
                progress_pct: 0
            })
        );
        assert_eq!(spec.frame(1_300).map(|f| f.progress_pct), Some(50));
        assert_eq!(spec.frame(1_600), None);
    }
}
