// src/ui/helpers.rs
use crate::view_models::{LevelCard, OptionMark, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(46, 160, 67);
pub const COLOR_SHORT_CIRCUIT: Color32 = Color32::from_rgb(207, 34, 46);

/// Tarjeta de nivel como botón grande de varias líneas.
pub fn level_card_button(ui: &mut Ui, card: &LevelCard, width: f32, height: f32) -> bool {
    let text = if card.completed {
        RichText::new(card.label()).color(COLOR_SUCCESS)
    } else {
        RichText::new(card.label())
    };
    ui.add(Button::new(text).min_size(Vec2::new(width, height)))
        .on_hover_text("Pulsa para jugar este nivel")
        .clicked()
}

/// Botón de opción; una vez respondido queda deshabilitado y, si fue el elegido, coloreado.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32, height: f32) -> bool {
    let mut button = Button::new(RichText::new(&option.text).size(16.0))
        .min_size(Vec2::new(width, height));
    button = match option.mark {
        OptionMark::Correct => button.fill(COLOR_SUCCESS).stroke((1.0, COLOR_SUCCESS)),
        OptionMark::Wrong => button.fill(COLOR_SHORT_CIRCUIT).stroke((1.0, COLOR_SHORT_CIRCUIT)),
        OptionMark::None => button,
    };
    ui.add_enabled(option.enabled, button).clicked()
}
