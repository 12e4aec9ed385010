use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new(format!("Cargando {}…", app.config.index_path))
                    .heading()
                    .color(egui::Color32::YELLOW),
            );
            ui.add_space(20.0);
            ui.add(Spinner::new());
        });
    });
}
