use folio_core::{
    input::{ClickTarget, InputEvent, Key, ScrollMetrics, TimedEvent},
    pages::{FragmentId, PageRegistry, RegistryError},
};

const PAGES: [(&str, bool, u32); 6] = [
    ("Cover", false, 2),
    ("Foreword", false, 4),
    ("The Long Chapter", true, 9),
    ("Field Notes", true, 6),
    ("Plates", false, 5),
    ("Afterword", false, 3),
];

const LONG_TOP: ScrollMetrics = ScrollMetrics::new(0, 2_400, 720);
const LONG_MIDDLE: ScrollMetrics = ScrollMetrics::new(900, 2_400, 720);
const LONG_BOTTOM: ScrollMetrics = ScrollMetrics::new(1_680, 2_400, 720);

/// A reading session touching every input path once.
pub static SESSION: [TimedEvent; 20] = [
    TimedEvent::new(400, InputEvent::Key(Key::ArrowRight)),
    TimedEvent::new(600, InputEvent::Key(Key::ArrowRight)),
    TimedEvent::new(1_600, InputEvent::Click(ClickTarget::Page)),
    TimedEvent::new(2_800, InputEvent::Wheel {
        delta_y: 120,
        region: Some(LONG_TOP),
    }),
    TimedEvent::new(3_000, InputEvent::Wheel {
        delta_y: 120,
        region: Some(LONG_MIDDLE),
    }),
    TimedEvent::new(3_400, InputEvent::Click(ClickTarget::ScrollRegion(LONG_MIDDLE))),
    TimedEvent::new(3_800, InputEvent::Wheel {
        delta_y: 120,
        region: Some(LONG_BOTTOM),
    }),
    TimedEvent::new(4_000, InputEvent::Wheel {
        delta_y: 120,
        region: Some(LONG_BOTTOM),
    }),
    TimedEvent::new(4_050, InputEvent::Wheel {
        delta_y: 120,
        region: Some(LONG_BOTTOM),
    }),
    TimedEvent::new(5_200, InputEvent::TouchStart { x: 620 }),
    TimedEvent::new(5_350, InputEvent::TouchEnd { x: 380 }),
    TimedEvent::new(6_400, InputEvent::TouchStart { x: 200 }),
    TimedEvent::new(6_450, InputEvent::TouchEnd { x: 230 }),
    TimedEvent::new(7_000, InputEvent::ToggleToc),
    TimedEvent::new(7_200, InputEvent::Key(Key::ArrowRight)),
    TimedEvent::new(7_600, InputEvent::TocSelect(1)),
    TimedEvent::new(9_000, InputEvent::ToggleAnimations),
    TimedEvent::new(9_200, InputEvent::Key(Key::End)),
    TimedEvent::new(9_400, InputEvent::Key(Key::ArrowRight)),
    TimedEvent::new(9_600, InputEvent::Key(Key::Home)),
];

pub fn build_registry() -> Result<PageRegistry, RegistryError> {
    let mut builder = PageRegistry::builder();
    for (page_index, (name, scrollable, fragment_count)) in PAGES.iter().enumerate() {
        let base = page_index as u32 * 100;
        builder.push_page(name, *scrollable, (0..*fragment_count).map(|n| FragmentId(base + n)))?;
    }
    builder.build()
}

pub fn session_end_ms() -> u64 {
    SESSION.last().map(|timed| timed.at_ms).unwrap_or(0)
}
