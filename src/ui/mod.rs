mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        #[cfg(target_arch = "wasm32")]
        self.poll_pending_load();
        if self.is_load_pending() {
            ctx.request_repaint();
        }

        // BOTÓN SUPERIOR VOLVER A NIVELES (solo con un nivel en pantalla)
        if self.state.shows_level() {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado
        match self.state {
            AppState::Loading => views::pending::ui_loading(self, ctx),
            AppState::Unavailable => views::unavailable::ui_unavailable(self, ctx),
            AppState::Browsing => views::level_list::ui_level_list(self, ctx),
            AppState::Viewing
            | AppState::Correct
            | AppState::IncorrectNoShort
            | AppState::Short => views::level::ui_level(self, ctx),
        }

        if self.short_alert_open {
            views::alerts::short_circuit_alert(self, ctx);
        }
        if self.notice.is_some() {
            views::alerts::notice_window(self, ctx);
        }

        // El progreso se escribe en el mismo frame en que cambia
        if self.progress.is_dirty() {
            if let Some(storage) = frame.storage_mut() {
                self.persist(storage);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}
