// src/view_models.rs

use crate::app::engine::NextAction;
use crate::model::LevelId;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub cards: Vec<LevelCard>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelCard {
    pub id: LevelId,
    pub title: String,
    pub difficulty: String,
    pub file: String,
    pub completed: bool,
    pub attempts: u32,
}

impl LevelCard {
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✅ Completado"
        } else {
            "🔌 Pendiente"
        }
    }

    pub fn label(&self) -> String {
        let mut label = format!(
            "{}\nDificultad: {}\n{}",
            self.title,
            self.difficulty,
            self.status_label()
        );
        if self.attempts > 0 {
            label.push_str(&format!("  ·  Intentos: {}", self.attempts));
        }
        label
    }
}

/// Cómo pintar cada botón de opción.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    None,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub text: String,
    pub enabled: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub text: String,
}

impl Feedback {
    pub fn new(correct: bool, explanation: &str) -> Self {
        let prefix = if correct { "¡Correcto! " } else { "Incorrecto. " };
        Self {
            correct,
            text: format!("{prefix}{explanation}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelView {
    pub title: String,
    pub question: String,
    pub image_uri: Option<String>,
    pub image_alt: String,
    pub options: Vec<OptionView>,
    pub feedback: Option<Feedback>,
    pub next_action: Option<NextAction>,
}
