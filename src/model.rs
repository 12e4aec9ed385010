use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de nivel u opción: en los JSON aparece como número o como texto.
/// Los enteros van a `Number`; el resto de números, a `Decimal`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Ident {
    Number(i64),
    Decimal(Float),
    Text(String),
}

/// `f64` comparable por bits, para poder usarlo como clave.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Float(pub f64);

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float {}

impl std::hash::Hash for Float {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

pub type LevelId = Ident;
pub type OptionId = Ident;

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Number(n) => write!(f, "{n}"),
            Ident::Decimal(x) => write!(f, "{}", x.0),
            Ident::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self {
        Ident::Number(n)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Ident::Text(s.to_owned())
    }
}

/// Dificultad tal como viene en el índice ("Fácil", 2, 2.5, ...)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Difficulty {
    Rank(i64),
    Decimal(f64),
    Name(String),
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Name(String::new())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Rank(n) => write!(f, "{n}"),
            Difficulty::Decimal(x) => write!(f, "{x}"),
            Difficulty::Name(s) => f.write_str(s),
        }
    }
}

/// Índice maestro: clave de categoría -> categoría, en orden de aparición.
pub type LevelIndex = IndexMap<String, Category>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub levels: Vec<LevelSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub id: LevelId,
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub file: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelDetail {
    pub id: LevelId,
    pub title: String,
    pub question: String,
    #[serde(default)]
    pub image: String,
    pub options: Vec<AnswerOption>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default)]
    pub causes_short: bool,
    #[serde(default)]
    pub explanation: String,
}

/// Problemas de contenido detectados al cargar un nivel. No impiden jugarlo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelIssue {
    NoCorrectOption,
    SeveralCorrectOptions(usize),
    CorrectAndShort(OptionId),
}

impl fmt::Display for LevelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelIssue::NoCorrectOption => write!(f, "ninguna opción es correcta"),
            LevelIssue::SeveralCorrectOptions(n) => write!(f, "{n} opciones marcadas como correctas"),
            LevelIssue::CorrectAndShort(id) => {
                write!(f, "la opción {id} es correcta y provoca cortocircuito a la vez")
            }
        }
    }
}

impl LevelDetail {
    pub fn validate(&self) -> Vec<LevelIssue> {
        let mut issues = Vec::new();
        let correct = self.options.iter().filter(|o| o.correct).count();
        match correct {
            0 => issues.push(LevelIssue::NoCorrectOption),
            1 => {}
            n => issues.push(LevelIssue::SeveralCorrectOptions(n)),
        }
        issues.extend(
            self.options
                .iter()
                .filter(|o| o.correct && o.causes_short)
                .map(|o| LevelIssue::CorrectAndShort(o.id.clone())),
        );
        issues
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    /// Índice en camino (solo se ve en web)
    #[default]
    Loading,
    /// El índice no se pudo cargar: no hay nada más que hacer en esta sesión
    Unavailable,
    Browsing,
    Viewing,
    Correct,
    IncorrectNoShort,
    Short,
}

impl AppState {
    pub fn shows_level(self) -> bool {
        matches!(
            self,
            AppState::Viewing | AppState::Correct | AppState::IncorrectNoShort | AppState::Short
        )
    }

    pub fn is_answered(self) -> bool {
        matches!(
            self,
            AppState::Correct | AppState::IncorrectNoShort | AppState::Short
        )
    }
}
