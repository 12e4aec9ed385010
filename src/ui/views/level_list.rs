use crate::QuizApp;
use crate::ui::helpers::level_card_button;
use crate::ui::layout::scroll_panel;
use crate::view_models::CategoryView;
use egui::{Context, Grid, RichText};

const CARD_W: f32 = 200.0;
const CARD_H: f32 = 72.0;
const GAP: f32 = 12.0;

pub fn ui_level_list(app: &mut QuizApp, ctx: &Context) {
    // Precomputar las vistas para no mantener el borrow de `app` durante el pintado
    let categories: Vec<CategoryView> = app.category_views();
    let mut clicked_file: Option<String> = None;

    scroll_panel(ctx, 900.0, |ui| {
        ui.heading("⚡ Elige un nivel");

        if categories.is_empty() {
            ui.add_space(20.0);
            ui.label("El índice no contiene categorías.");
            return;
        }

        let columns = ((ui.available_width() + GAP) / (CARD_W + GAP)).floor().max(1.0) as usize;

        for category in &categories {
            ui.add_space(40.0);
            ui.label(RichText::new(&category.title).heading().strong());
            ui.separator();
            ui.label(RichText::new(&category.description).weak());
            ui.add_space(20.0);

            Grid::new(("level_grid", category.key.as_str()))
                .spacing([GAP, GAP])
                .show(ui, |ui| {
                    for (i, card) in category.cards.iter().enumerate() {
                        if level_card_button(ui, card, CARD_W, CARD_H) {
                            clicked_file = Some(card.file.clone());
                        }
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });
        }
    });

    if let Some(file) = clicked_file {
        app.open_level(&file);
    }
}
