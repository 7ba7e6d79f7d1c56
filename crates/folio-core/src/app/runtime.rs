impl<IN, FX> BookApp<IN, FX>
where
    IN: InputProvider,
    FX: Effects,
{
    /// Reveal the opening page and request the first render.
    pub fn start(&mut self, now_ms: u64) {
        self.reveal_current(now_ms);
        self.pending_redraw = true;
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.fire_due_turn(now_ms);
        self.process_inputs(now_ms);

        let moving = self.transition_frame(now_ms).is_some()
            || self.pending_turn.is_some()
            || !self.reveal.is_settled(now_ms);

        if self.pending_redraw || moving {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Earliest future instant at which state or the reveal cascade changes
    /// on its own.
    pub fn next_deadline_ms(&self, now_ms: u64) -> Option<u64> {
        let turn_due = self.pending_turn.map(|turn| turn.due_ms);
        let reveal_due = self.reveal.reveal_at_ms(self.reveal.revealed_count(now_ms));

        match (turn_due, reveal_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn fire_due_turn(&mut self, now_ms: u64) {
        let Some(turn) = self.pending_turn else {
            return;
        };
        if now_ms >= turn.due_ms {
            self.commit_turn(turn, now_ms);
        }
    }
}
