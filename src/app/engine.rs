//! Lógica pura del quiz: evaluación de respuestas y resolución de
//! siguiente nivel / reintento. No depende de egui.

use crate::model::{AnswerOption, AppState, LevelDetail, LevelId, LevelIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    IncorrectNoShort,
    Short,
}

impl Outcome {
    pub fn state(self) -> AppState {
        match self {
            Outcome::Correct => AppState::Correct,
            Outcome::IncorrectNoShort => AppState::IncorrectNoShort,
            Outcome::Short => AppState::Short,
        }
    }

    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }

    pub fn next_action(self) -> NextAction {
        match self {
            Outcome::Correct => NextAction::NextLevel,
            Outcome::IncorrectNoShort => NextAction::Retry,
            Outcome::Short => NextAction::RetryAfterShort,
        }
    }
}

/// Botón de acción que aparece tras responder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    NextLevel,
    Retry,
    RetryAfterShort,
}

impl NextAction {
    pub fn label(self) -> &'static str {
        match self {
            NextAction::NextLevel => "Siguiente Nivel",
            NextAction::Retry => "Intentar de Nuevo",
            NextAction::RetryAfterShort => "Revisar Alerta y Reintentar",
        }
    }

    pub fn is_retry(self) -> bool {
        !matches!(self, NextAction::NextLevel)
    }
}

/// El cortocircuito manda sobre `correct` si el JSON marca ambos.
pub fn evaluate(option: &AnswerOption) -> Outcome {
    if option.causes_short {
        Outcome::Short
    } else if option.correct {
        Outcome::Correct
    } else {
        Outcome::IncorrectNoShort
    }
}

/// Un intento sobre un nivel recién cargado: admite una sola respuesta.
#[derive(Clone, Debug, PartialEq)]
pub struct Attempt {
    pub level: LevelDetail,
    pub chosen: Option<usize>,
    pub outcome: Option<Outcome>,
}

impl Attempt {
    pub fn new(level: LevelDetail) -> Self {
        Self {
            level,
            chosen: None,
            outcome: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.chosen.is_some()
    }

    /// Devuelve `None` si ya se respondió o el índice no existe.
    pub fn select(&mut self, option_idx: usize) -> Option<Outcome> {
        if self.is_locked() {
            return None;
        }
        let outcome = evaluate(self.level.options.get(option_idx)?);
        self.chosen = Some(option_idx);
        self.outcome = Some(outcome);
        Some(outcome)
    }

    pub fn chosen_option(&self) -> Option<&AnswerOption> {
        self.chosen.and_then(|i| self.level.options.get(i))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Hay un nivel siguiente en la misma categoría: su `file`
    Load(String),
    /// Era el último de su categoría
    CategoryFinished,
    /// El nivel actual no aparece en el índice
    Unknown,
}

/// Busca el nivel por posición dentro de su propia categoría.
pub fn next_step(index: &LevelIndex, current: &LevelId) -> NextStep {
    for category in index.values() {
        if let Some(pos) = category.levels.iter().position(|l| &l.id == current) {
            return match category.levels.get(pos + 1) {
                Some(next) => NextStep::Load(next.file.clone()),
                None => NextStep::CategoryFinished,
            };
        }
    }
    NextStep::Unknown
}

/// Ruta del fichero del nivel con ese id (recorre todas las categorías).
pub fn level_file<'a>(index: &'a LevelIndex, id: &LevelId) -> Option<&'a str> {
    index
        .values()
        .flat_map(|c| &c.levels)
        .find(|l| &l.id == id)
        .map(|l| l.file.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty, LevelSummary};

    fn opt(id: &str, correct: bool, causes_short: bool) -> AnswerOption {
        AnswerOption {
            id: id.into(),
            text: id.to_uppercase(),
            correct,
            causes_short,
            explanation: format!("explicación {id}"),
        }
    }

    fn level() -> LevelDetail {
        LevelDetail {
            id: "L1".into(),
            title: "Serie".into(),
            question: "¿Qué pasa?".into(),
            image: "img/l1.svg".into(),
            options: vec![
                opt("a", false, true),
                opt("b", true, false),
                opt("c", false, false),
            ],
        }
    }

    fn summary(id: &str) -> LevelSummary {
        LevelSummary {
            id: id.into(),
            title: id.into(),
            difficulty: Difficulty::Rank(1),
            file: format!("levels/{id}.json"),
        }
    }

    fn index() -> LevelIndex {
        let mut index = LevelIndex::new();
        index.insert(
            "circuitos_serie".into(),
            Category {
                title: "Serie".into(),
                description: String::new(),
                levels: vec![summary("L1"), summary("L2")],
            },
        );
        index.insert(
            "circuitos_paralelo".into(),
            Category {
                title: "Paralelo".into(),
                description: String::new(),
                levels: vec![summary("P1")],
            },
        );
        index
    }

    #[test]
    fn short_takes_priority_over_correct() {
        assert_eq!(evaluate(&opt("x", true, true)), Outcome::Short);
        assert_eq!(evaluate(&opt("x", false, true)), Outcome::Short);
        assert_eq!(evaluate(&opt("x", true, false)), Outcome::Correct);
        assert_eq!(evaluate(&opt("x", false, false)), Outcome::IncorrectNoShort);
    }

    #[test]
    fn outcomes_map_to_states_and_actions() {
        assert_eq!(Outcome::Short.state(), AppState::Short);
        assert_eq!(Outcome::Correct.next_action(), NextAction::NextLevel);
        assert_eq!(Outcome::IncorrectNoShort.next_action().label(), "Intentar de Nuevo");
        assert_eq!(
            Outcome::Short.next_action().label(),
            "Revisar Alerta y Reintentar"
        );
        assert!(NextAction::RetryAfterShort.is_retry());
        assert!(!NextAction::NextLevel.is_retry());
    }

    #[test]
    fn attempt_accepts_a_single_answer() {
        let mut attempt = Attempt::new(level());
        assert_eq!(attempt.select(2), Some(Outcome::IncorrectNoShort));
        assert!(attempt.is_locked());
        assert_eq!(attempt.select(1), None);
        assert_eq!(attempt.chosen, Some(2));
        assert_eq!(attempt.outcome, Some(Outcome::IncorrectNoShort));
        assert_eq!(attempt.chosen_option().map(|o| o.text.as_str()), Some("C"));
    }

    #[test]
    fn out_of_range_selection_does_not_lock() {
        let mut attempt = Attempt::new(level());
        assert_eq!(attempt.select(7), None);
        assert!(!attempt.is_locked());
        assert_eq!(attempt.select(1), Some(Outcome::Correct));
    }

    #[test]
    fn next_step_follows_position_inside_category() {
        let index = index();
        assert_eq!(
            next_step(&index, &"L1".into()),
            NextStep::Load("levels/L2.json".into())
        );
        assert_eq!(next_step(&index, &"L2".into()), NextStep::CategoryFinished);
        // sin salto a la siguiente categoría
        assert_eq!(next_step(&index, &"P1".into()), NextStep::CategoryFinished);
        assert_eq!(next_step(&index, &"Z9".into()), NextStep::Unknown);
    }

    #[test]
    fn level_file_scans_every_category() {
        let index = index();
        assert_eq!(level_file(&index, &"P1".into()), Some("levels/P1.json"));
        assert_eq!(level_file(&index, &"nada".into()), None);
    }
}
