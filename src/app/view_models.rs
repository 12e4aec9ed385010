use super::*;
use crate::app::engine::Outcome;
use crate::view_models::{CategoryView, Feedback, LevelCard, LevelView, OptionMark, OptionView};

impl QuizApp {
    /// Categorías en orden del índice, con el estado de cada tarjeta.
    pub fn category_views(&self) -> Vec<CategoryView> {
        self.index
            .iter()
            .map(|(key, category)| CategoryView {
                key: key.clone(),
                title: category.title.clone(),
                description: category.description.clone(),
                cards: category
                    .levels
                    .iter()
                    .map(|lvl| LevelCard {
                        id: lvl.id.clone(),
                        title: lvl.title.clone(),
                        difficulty: lvl.difficulty.to_string(),
                        file: lvl.file.clone(),
                        completed: self.progress.is_completed(&lvl.id),
                        attempts: self.progress.stats(&lvl.id).attempts,
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn level_view(&self) -> Option<LevelView> {
        let attempt = self.attempt.as_ref()?;
        let level = &attempt.level;

        let options = level
            .options
            .iter()
            .enumerate()
            .map(|(i, opt)| {
                // En corto no se marca el botón: ya lo indica la alerta
                let mark = match (attempt.chosen == Some(i), attempt.outcome) {
                    (true, Some(Outcome::Correct)) => OptionMark::Correct,
                    (true, Some(Outcome::IncorrectNoShort)) => OptionMark::Wrong,
                    _ => OptionMark::None,
                };
                OptionView {
                    text: opt.text.clone(),
                    enabled: !attempt.is_locked(),
                    mark,
                }
            })
            .collect();

        let feedback = match (attempt.chosen_option(), attempt.outcome) {
            (Some(opt), Some(outcome)) => Some(Feedback::new(outcome.is_correct(), &opt.explanation)),
            _ => None,
        };

        Some(LevelView {
            title: level.title.clone(),
            question: level.question.clone(),
            image_uri: (!level.image.is_empty()).then(|| self.config.image_uri(&level.image)),
            image_alt: format!("Diagrama de circuito: {}", level.title),
            options,
            feedback,
            next_action: attempt.outcome.map(|o| o.next_action()),
        })
    }
}
