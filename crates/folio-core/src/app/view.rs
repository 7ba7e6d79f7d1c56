impl<IN, FX> BookApp<IN, FX>
where
    IN: InputProvider,
    FX: Effects,
{
    pub fn new(
        pages: PageRegistry,
        input: IN,
        effects: FX,
        config: NavigationConfig,
        arbiter: GestureArbiter,
        preference: AnimationPreference,
    ) -> Self {
        let mut faces = Vec::new();
        for _ in pages.iter() {
            let _ = faces.push(PageFace::default());
        }

        Self {
            pages,
            input,
            effects,
            config,
            arbiter,
            preference,
            nav: NavigationState::initial(),
            faces,
            pending_turn: None,
            transition: None,
            reveal: RevealSchedule::idle(),
            announcement_serial: 0,
            completion_fired: false,
            toc_open: false,
            pending_redraw: true,
        }
    }

    pub fn with_view<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(BookView<'_>),
    {
        let current = self.nav.current_page;
        let total = self.pages.len();

        let mut pages: Vec<PageView<'_>, MAX_PAGES> = Vec::new();
        for page in self.pages.iter() {
            let index = page.index();
            let _ = pages.push(PageView {
                index,
                name: page.name(),
                face: self.faces.get(index as usize).copied().unwrap_or_default(),
                is_current: index == current,
            });
        }

        let mut position: String<POSITION_LABEL_BYTES> = String::new();
        let _ = write!(position, "{}/{}", current.saturating_add(1), total);

        let reveal = self.reveal.page().map(|page| RevealView {
            page,
            generation: self.reveal.generation(),
            revealed: self.reveal.revealed_count(now_ms),
            total: self.reveal.fragment_count(),
        });

        f(BookView {
            pages: &pages,
            chrome: chrome_view(current, total, &self.pages),
            position: position.as_str(),
            reveal,
            animation: self.transition_frame(now_ms),
            toc_open: self.toc_open,
            animations_enabled: self.preference.enabled,
            announcement_serial: self.announcement_serial,
        });
    }

    pub fn current_page(&self) -> u16 {
        self.nav.current_page
    }

    pub fn total_pages(&self) -> u16 {
        self.pages.len()
    }

    pub fn is_animating(&self) -> bool {
        self.nav.is_animating
    }

    pub fn direction(&self) -> TurnDirection {
        self.nav.direction
    }

    pub fn navigation_state(&self) -> NavigationState {
        self.nav
    }

    pub fn face(&self, index: u16) -> Option<PageFace> {
        self.faces.get(index as usize).copied()
    }

    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    pub fn reveal(&self) -> &RevealSchedule {
        &self.reveal
    }

    pub fn arbiter(&self) -> &GestureArbiter {
        &self.arbiter
    }

    pub fn toc_open(&self) -> bool {
        self.toc_open
    }

    pub fn animation_preference(&self) -> AnimationPreference {
        self.preference
    }

    /// Applies from the next accepted transition; an in-flight one keeps
    /// the timing it was accepted with.
    pub fn set_animation_preference(&mut self, preference: AnimationPreference) {
        if preference != self.preference {
            debug!("prefs: animations enabled={}", preference.enabled);
        }
        self.preference = preference;
        self.pending_redraw = true;
    }

    pub fn toggle_animations(&mut self) {
        self.set_animation_preference(self.preference.toggled());
    }

    pub fn with_effects_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut FX) -> R,
    {
        f(&mut self.effects)
    }

    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
