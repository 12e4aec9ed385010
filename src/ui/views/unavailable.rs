use crate::QuizApp;
use crate::ui::helpers::COLOR_SHORT_CIRCUIT;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Sin índice no hay nada que hacer: solo se muestra el error.
pub fn ui_unavailable(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 160.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⚠ No se pudieron cargar los niveles");
            ui.add_space(16.0);
            ui.label(RichText::new(&app.message).color(COLOR_SHORT_CIRCUIT).strong());
        });
    });
}
