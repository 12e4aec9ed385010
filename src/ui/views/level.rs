use crate::QuizApp;
use crate::ui::helpers::{COLOR_SHORT_CIRCUIT, COLOR_SUCCESS, option_button};
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, Frame, Image, RichText};

pub fn ui_level(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.level_view() else {
        app.show_level_list();
        return;
    };

    let mut chosen: Option<usize> = None;
    let mut next_clicked = false;

    scroll_panel(ctx, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading(&view.title);
            ui.add_space(10.0);
            ui.label(RichText::new(&view.question).size(17.0));
            ui.add_space(12.0);

            if let Some(uri) = &view.image_uri {
                ui.add(
                    Image::new(uri.as_str())
                        .max_height(260.0)
                        .max_width(panel_width)
                        .maintain_aspect_ratio(true),
                )
                .on_hover_text(&view.image_alt);
                ui.add_space(12.0);
            }

            // Una opción por botón, en el orden del JSON
            for (i, option) in view.options.iter().enumerate() {
                if option_button(ui, option, panel_width, 40.0) {
                    chosen = Some(i);
                }
                ui.add_space(6.0);
            }

            if let Some(feedback) = &view.feedback {
                ui.add_space(10.0);
                let color = if feedback.correct {
                    COLOR_SUCCESS
                } else {
                    COLOR_SHORT_CIRCUIT
                };
                Frame::default()
                    .stroke((2.0, color))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.set_width(panel_width - 24.0);
                        ui.label(RichText::new(&feedback.text).color(color));
                    });
            }

            if let Some(action) = view.next_action {
                ui.add_space(12.0);
                let mut button = Button::new(action.label()).min_size([panel_width / 2.0, 36.0].into());
                if action.is_retry() {
                    button = button.fill(COLOR_SHORT_CIRCUIT);
                }
                if ui.add(button).clicked() {
                    next_clicked = true;
                }
            }
        });
    });

    if let Some(i) = chosen {
        app.select_option(i);
    } else if next_clicked {
        app.run_next_action();
    }
}
