use std::{env, path::PathBuf, process::ExitCode};

use folio_core::{
    app::{BookApp, NavigationConfig, TickResult},
    gesture::{ArbiterConfig, GestureArbiter},
    input::ScriptedInput,
    render::BookView,
    settings::{PreferenceSync, load_or_default},
};
use log::{debug, error, info};

use console_effects::ConsoleEffects;
use file_store::FilePreferenceStore;

#[path = "main/console_effects.rs"]
mod console_effects;
#[path = "main/demo_book.rs"]
mod demo_book;
#[path = "main/file_store.rs"]
mod file_store;

const PREFS_PATH_ENV: &str = "FOLIO_PREFS";
const DEFAULT_PREFS_PATH: &str = "folio-prefs.txt";
const FRAME_MS: u64 = 16;
const SESSION_TAIL_MS: u64 = 2_000;

/// What was last reported, so the log only shows changes.
#[derive(Default)]
struct Presenter {
    announcement_serial: Option<u32>,
    reveal: Option<(u32, usize)>,
    toc_open: bool,
}

impl Presenter {
    fn present(&mut self, view: BookView<'_>) {
        if self.announcement_serial != Some(view.announcement_serial) {
            self.announcement_serial = Some(view.announcement_serial);
            info!(
                "page {} \"{}\" prev={} next={} progress={}%",
                view.position,
                view.chrome.announcement,
                view.chrome.previous_enabled,
                view.chrome.next_enabled,
                view.chrome.progress_pct()
            );
        }

        if let Some(reveal) = view.reveal {
            let key = (reveal.generation, reveal.revealed);
            if self.reveal != Some(key) {
                self.reveal = Some(key);
                debug!(
                    "reveal: page={} {}/{} fragments",
                    reveal.page.saturating_add(1),
                    reveal.revealed,
                    reveal.total
                );
            }
        }

        if self.toc_open != view.toc_open {
            self.toc_open = view.toc_open;
            info!("toc: {}", if view.toc_open { "opened" } else { "closed" });
        }

        if let Some(frame) = view.animation {
            debug!("anim: {:?} {}%", frame.kind, frame.progress_pct);
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let pages = match demo_book::build_registry() {
        Ok(pages) => pages,
        Err(err) => {
            error!("page registry rejected: {:?}", err);
            return ExitCode::FAILURE;
        }
    };

    let prefs_path = env::var_os(PREFS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));
    let mut store = FilePreferenceStore::new(prefs_path);
    let preference = load_or_default(&mut store);
    let mut preference_sync = PreferenceSync::new(preference);

    info!(
        "Folio started: pages={} animations={} prefs={}",
        pages.len(),
        preference.enabled,
        store.path().display()
    );

    let mut app = BookApp::new(
        pages,
        ScriptedInput::new(&demo_book::SESSION),
        ConsoleEffects::new(),
        NavigationConfig::default(),
        GestureArbiter::new(ArbiterConfig::default()),
        preference,
    );
    app.start(0);

    let first_input_ms = demo_book::SESSION.first().map(|timed| timed.at_ms);
    let end_ms = demo_book::session_end_ms() + SESSION_TAIL_MS;
    let mut presenter = Presenter::default();
    let mut now_ms = 0u64;

    while now_ms <= end_ms {
        app.with_input_mut(|input| input.advance_to(now_ms));

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_view(now_ms, |view| presenter.present(view));
        }

        if first_input_ms.is_some_and(|at| now_ms >= at) {
            app.with_effects_mut(|fx| fx.unlock_audio());
        }

        preference_sync.track_current(app.animation_preference());
        let _ = preference_sync.flush(&mut store);

        now_ms += FRAME_MS;
    }

    info!(
        "session finished: page={}/{} bursts={} animations={}",
        app.current_page().saturating_add(1),
        app.total_pages(),
        app.with_effects_mut(|fx| fx.bursts()),
        app.animation_preference().enabled
    );
    ExitCode::SUCCESS
}
