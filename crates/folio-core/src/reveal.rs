//! Staggered reveal of a page's content fragments.
//!
//! Starting a schedule drops every prior "revealed" marker and bumps
//! [`RevealSchedule::generation`]; renderers treat a new generation as the
//! point to flush layout before re-applying markers, so each fragment fades
//! in as a fresh transition. Fragment `i` is revealed once
//! `base + i * stride` milliseconds have elapsed since the start.
//!
//! Starting again for the same page simply restarts the cascade; no
//! earlier timing is cancelled explicitly, and the page still converges to
//! fully revealed.

use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealSchedule {
    page: Option<u16>,
    started_ms: u64,
    base_ms: u16,
    stride_ms: u16,
    fragment_count: u8,
    generation: u32,
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::idle()
    }
}

impl RevealSchedule {
    pub const fn idle() -> Self {
        Self {
            page: None,
            started_ms: 0,
            base_ms: 0,
            stride_ms: 0,
            fragment_count: 0,
            generation: 0,
        }
    }

    pub fn start(
        &mut self,
        page: u16,
        fragment_count: usize,
        now_ms: u64,
        base_ms: u16,
        stride_ms: u16,
    ) {
        self.page = Some(page);
        self.started_ms = now_ms;
        self.base_ms = base_ms;
        self.stride_ms = stride_ms;
        self.fragment_count = fragment_count.min(u8::MAX as usize) as u8;
        self.generation = self.generation.wrapping_add(1);
        debug!(
            "reveal: start page={} fragments={} generation={}",
            page, self.fragment_count, self.generation
        );
    }

    pub fn page(&self) -> Option<u16> {
        self.page
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn fragment_count(&self) -> usize {
        self.fragment_count as usize
    }

    /// Absolute time fragment `index` becomes revealed.
    pub fn reveal_at_ms(&self, index: usize) -> Option<u64> {
        if self.page.is_none() || index >= self.fragment_count() {
            return None;
        }
        let offset = self.base_ms as u64 + index as u64 * self.stride_ms as u64;
        Some(self.started_ms.saturating_add(offset))
    }

    pub fn is_revealed(&self, page: u16, index: usize, now_ms: u64) -> bool {
        self.page == Some(page)
            && self
                .reveal_at_ms(index)
                .is_some_and(|due_ms| now_ms >= due_ms)
    }

    /// Fragments revealed so far. Reveal times increase with the index, so
    /// this is always a document-order prefix.
    pub fn revealed_count(&self, now_ms: u64) -> usize {
        (0..self.fragment_count())
            .take_while(|index| {
                self.reveal_at_ms(*index)
                    .is_some_and(|due_ms| now_ms >= due_ms)
            })
            .count()
    }

    pub fn is_settled(&self, now_ms: u64) -> bool {
        self.revealed_count(now_ms) == self.fragment_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_cascade_in_document_order() {
        let mut reveal = RevealSchedule::idle();
        reveal.start(2, 3, 1_000, 100, 50);

        assert_eq!(reveal.revealed_count(1_099), 0);
        assert_eq!(reveal.revealed_count(1_100), 1);
        assert!(reveal.is_revealed(2, 0, 1_100));
        assert!(!reveal.is_revealed(2, 1, 1_100));
        assert_eq!(reveal.revealed_count(1_150), 2);
        assert_eq!(reveal.reveal_at_ms(2), Some(1_200));
        assert!(!reveal.is_settled(1_199));
        assert!(reveal.is_settled(1_200));
        assert!(!reveal.is_revealed(1, 0, 5_000));
    }

    #[test]
    fn restarting_clears_markers_and_bumps_generation() {
        let mut reveal = RevealSchedule::idle();
        reveal.start(0, 2, 0, 10, 10);
        assert!(reveal.is_settled(100));
        let first = reveal.generation();

        reveal.start(0, 2, 100, 10, 10);
        assert_eq!(reveal.generation(), first + 1);
        assert_eq!(reveal.revealed_count(100), 0);
        assert!(reveal.is_settled(120));
    }

    #[test]
    fn empty_page_is_settled_immediately() {
        let mut reveal = RevealSchedule::idle();
        reveal.start(4, 0, 0, 100, 50);
        assert!(reveal.is_settled(0));
        assert_eq!(reveal.reveal_at_ms(0), None);
    }
}
