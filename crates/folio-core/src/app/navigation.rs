impl<IN, FX> BookApp<IN, FX>
where
    IN: InputProvider,
    FX: Effects,
{
    pub fn dispatch(&mut self, command: NavCommand, now_ms: u64) -> NavOutcome {
        match command {
            NavCommand::Next => self.request_next(now_ms),
            NavCommand::Previous => self.request_previous(now_ms),
            NavCommand::GoTo(target) => self.request_go_to(target, now_ms),
        }
    }

    pub fn request_next(&mut self, now_ms: u64) -> NavOutcome {
        if self.nav.is_animating {
            return self.reject("next", NavOutcome::Busy);
        }

        let current = self.nav.current_page;
        if current >= self.pages.last_index() {
            return self.reject("next", NavOutcome::AtBoundary);
        }

        self.begin_turn(current, current + 1, now_ms)
    }

    pub fn request_previous(&mut self, now_ms: u64) -> NavOutcome {
        if self.nav.is_animating {
            return self.reject("previous", NavOutcome::Busy);
        }

        let current = self.nav.current_page;
        if current == 0 {
            return self.reject("previous", NavOutcome::AtBoundary);
        }

        self.begin_turn(current, current - 1, now_ms)
    }

    pub fn request_go_to(&mut self, target: u16, now_ms: u64) -> NavOutcome {
        if self.nav.is_animating {
            return self.reject("go_to", NavOutcome::Busy);
        }
        if target >= self.pages.len() {
            return self.reject("go_to", NavOutcome::InvalidTarget);
        }
        if target == self.nav.current_page {
            return self.reject("go_to", NavOutcome::SamePage);
        }

        self.begin_turn(self.nav.current_page, target, now_ms)
    }

    fn reject(&self, request: &str, outcome: NavOutcome) -> NavOutcome {
        debug!(
            "nav: {} ignored current={}/{} reason={:?}",
            request,
            self.nav.current_page.saturating_add(1),
            self.pages.len(),
            outcome
        );
        outcome
    }

    fn begin_turn(&mut self, from: u16, target: u16, now_ms: u64) -> NavOutcome {
        let direction = if target > from {
            TurnDirection::Forward
        } else {
            TurnDirection::Backward
        };

        // Claim the machine before anything else can observe it idle.
        self.nav.is_animating = true;
        self.nav.direction = direction;

        let (tag, low, high) = match direction {
            TurnDirection::Backward => (TurnTag::Backward, target, from),
            _ => (TurnTag::Forward, from, target),
        };
        for index in low..high {
            if let Some(face) = self.faces.get_mut(index as usize) {
                face.turning = Some(tag);
            }
        }

        let span = from.abs_diff(target);
        let kind = match (span, direction) {
            (1, TurnDirection::Backward) => AnimationKind::FlipBackward,
            (1, _) => AnimationKind::FlipForward,
            _ => AnimationKind::Jump,
        };
        let animated = self.preference.enabled;
        let duration_ms = match (animated, span) {
            (false, _) => 0,
            (true, 1) => self.config.flip_ms,
            (true, _) => self.config.jump_ms,
        };

        debug!(
            "nav: accepted {:?} from={} target={} pages={} duration_ms={}",
            kind, from, target, span, duration_ms
        );

        if animated {
            // One burst for the whole turn, however many pages it spans.
            let burst_page = match direction {
                TurnDirection::Backward => target,
                _ => from,
            };
            self.fire_turn_effects(burst_page);
        }

        let turn = PendingTurn {
            from,
            target,
            direction,
            due_ms: now_ms.saturating_add(duration_ms as u64),
        };
        self.pending_redraw = true;

        if duration_ms == 0 {
            self.commit_turn(turn, now_ms);
        } else {
            self.pending_turn = Some(turn);
            self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
        }

        NavOutcome::Accepted
    }

    fn commit_turn(&mut self, turn: PendingTurn, now_ms: u64) {
        debug_assert!(self.nav.is_animating);
        debug_assert_eq!(self.nav.current_page, turn.from);
        debug_assert_eq!(self.nav.direction, turn.direction);
        if !self.nav.is_animating || self.nav.current_page != turn.from {
            warn!(
                "nav: stale commit from={} target={} current={}",
                turn.from, turn.target, self.nav.current_page
            );
            return;
        }

        for (index, face) in self.faces.iter_mut().enumerate() {
            face.turning = None;
            face.flipped = (index as u16) < turn.target;
        }

        self.nav = NavigationState {
            current_page: turn.target,
            is_animating: false,
            direction: TurnDirection::None,
        };
        self.pending_turn = None;
        self.transition = None;
        self.arbiter.reset_boundary();
        self.announcement_serial = self.announcement_serial.wrapping_add(1);

        debug!(
            "nav: committed current={}/{} name={:?}",
            turn.target.saturating_add(1),
            self.pages.len(),
            self.pages.name_at(turn.target)
        );

        self.reveal_current(now_ms);
        self.check_completion();
        self.pending_redraw = true;
    }

    fn reveal_current(&mut self, now_ms: u64) {
        let page = self.nav.current_page;
        let fragment_count = self
            .pages
            .get(page)
            .map(|page| page.fragments().len())
            .unwrap_or(0);

        let (base_ms, stride_ms) = if self.preference.enabled {
            (self.config.reveal_base_ms, self.config.reveal_stride_ms)
        } else {
            (0, 0)
        };
        self.reveal
            .start(page, fragment_count, now_ms, base_ms, stride_ms);
    }

    fn check_completion(&mut self) {
        if self.completion_fired || self.nav.current_page != self.pages.last_index() {
            return;
        }
        self.completion_fired = true;

        if !self.preference.enabled {
            debug!("nav: reached last page; celebration skipped (animations off)");
            return;
        }
        if let Err(err) = self.effects.spawn_celebration() {
            debug!("fx: celebration failed: {:?}", err);
        }
    }

    fn fire_turn_effects(&mut self, page: u16) {
        if let Err(err) = self.effects.play_turn_sound() {
            debug!("fx: turn sound failed: {:?}", err);
        }
        if let Err(err) = self.effects.spawn_particles(page) {
            debug!("fx: particles failed page={} err={:?}", page, err);
        }
    }
}
