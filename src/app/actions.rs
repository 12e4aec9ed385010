use super::*;
use crate::app::engine::{NextAction, Outcome};

impl QuizApp {
    /// Responde con la opción `option_idx` del nivel actual.
    /// Solo cuenta la primera respuesta de cada intento.
    pub fn select_option(&mut self, option_idx: usize) -> Option<Outcome> {
        let attempt = self.attempt.as_mut()?;
        let outcome = attempt.select(option_idx)?;
        let level_id = attempt.level.id.clone();

        self.progress.record_attempt(&level_id, outcome);
        if outcome.is_correct() && self.progress.mark_completed(&level_id) {
            log::info!("nivel {level_id} completado");
        }
        self.short_alert_open = outcome == Outcome::Short;
        self.state = outcome.state();
        log::debug!("nivel {level_id}: opción {option_idx} -> {outcome:?}");
        Some(outcome)
    }

    pub fn next_action(&self) -> Option<NextAction> {
        self.attempt
            .as_ref()
            .and_then(|a| a.outcome)
            .map(Outcome::next_action)
    }

    /// Pulsación del botón de acción: avanzar o reintentar según el resultado.
    pub fn run_next_action(&mut self) {
        match self.next_action() {
            Some(NextAction::NextLevel) => self.advance(),
            Some(NextAction::Retry | NextAction::RetryAfterShort) => self.retry_level(),
            None => {}
        }
    }

    /// Cerrar la alerta no cambia el estado del quiz.
    pub fn close_short_alert(&mut self) {
        self.short_alert_open = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn back_to_levels(&mut self) {
        self.show_level_list();
    }
}
