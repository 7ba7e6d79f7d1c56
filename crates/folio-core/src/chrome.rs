//! Views that depend only on the current page: navigation buttons, page
//! indicator, table-of-contents marker, progress bar and live-region text.

use crate::pages::PageRegistry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChromeView<'a> {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub indicator: &'a str,
    /// Table-of-contents entry carrying the active marker.
    pub toc_active: u16,
    /// `(current + 1) / total`, in thousandths.
    pub progress_permille: u16,
    /// Text pushed into the accessibility live region.
    pub announcement: &'a str,
}

impl ChromeView<'_> {
    pub fn is_toc_active(&self, entry: u16) -> bool {
        entry == self.toc_active
    }

    pub fn progress_pct(&self) -> u8 {
        (self.progress_permille / 10) as u8
    }
}

pub fn chrome_view(current: u16, total: u16, names: &PageRegistry) -> ChromeView<'_> {
    let total = total.max(1);
    let current = current.min(total - 1);
    let name = names.name_at(current).unwrap_or("");
    let progress_permille = ((current as u32 + 1) * 1_000 / total as u32) as u16;

    ChromeView {
        previous_enabled: current > 0,
        next_enabled: current < total - 1,
        indicator: name,
        toc_active: current,
        progress_permille,
        announcement: name,
    }
}
