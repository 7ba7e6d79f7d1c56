impl<IN, FX> BookApp<IN, FX>
where
    IN: InputProvider,
    FX: Effects,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    let _ = self.handle_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error; dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    /// Arbitrate one raw event and act on the verdict. Hosts that push
    /// events directly use the returned value to decide whether to cancel
    /// the event's default handling.
    pub fn handle_event(&mut self, event: InputEvent, now_ms: u64) -> Arbitration {
        let verdict = self.arbitrate(event, now_ms);

        match verdict {
            Arbitration::Command(command) => {
                let _ = self.dispatch(command, now_ms);
            }
            Arbitration::CloseOverlay => self.close_toc(),
            Arbitration::Native | Arbitration::Ignored => {}
        }

        verdict
    }

    fn arbitrate(&mut self, event: InputEvent, now_ms: u64) -> Arbitration {
        match event {
            InputEvent::ToggleToc => {
                self.toc_open = !self.toc_open;
                self.pending_redraw = true;
                Arbitration::Ignored
            }
            InputEvent::ToggleAnimations => {
                self.toggle_animations();
                Arbitration::Ignored
            }
            InputEvent::TocSelect(target) => {
                self.close_toc();
                Arbitration::Command(NavCommand::GoTo(target))
            }
            InputEvent::Key(Key::Escape) if !self.toc_open => Arbitration::Native,
            InputEvent::Key(Key::Escape) => self.arbiter.on_key(Key::Escape, self.pages.len()),
            _ if self.toc_open => {
                debug!("input: overlay open; ignoring {:?}", event);
                Arbitration::Ignored
            }
            InputEvent::Wheel { delta_y, region } => {
                let scrollable = self.current_page_scrollable();
                self.arbiter.on_wheel(delta_y, region, scrollable, now_ms)
            }
            InputEvent::TouchStart { x } => {
                self.arbiter.on_touch_start(x);
                Arbitration::Native
            }
            InputEvent::TouchEnd { x } => self.arbiter.on_touch_end(x),
            InputEvent::TouchCancel => {
                self.arbiter.on_touch_cancel();
                Arbitration::Native
            }
            InputEvent::Key(key) => self.arbiter.on_key(key, self.pages.len()),
            InputEvent::Click(target) => self.arbiter.on_click(target),
        }
    }

    fn close_toc(&mut self) {
        if self.toc_open {
            self.toc_open = false;
            self.pending_redraw = true;
        }
    }

    fn current_page_scrollable(&self) -> bool {
        self.pages
            .get(self.nav.current_page)
            .is_some_and(|page| page.has_scrollable_content())
    }
}
