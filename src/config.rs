// src/config.rs
use std::path::PathBuf;

pub const DEFAULT_INDEX_PATH: &str = "levels/levels_index.json";
pub const COMPLETED_LEVELS_KEY: &str = "completedLevels";
pub const LEVEL_ATTEMPTS_KEY: &str = "levelAttempts";

#[cfg(not(target_arch = "wasm32"))]
const BASE_ENV: &str = "CIRCUIT_QUIZ_BASE";
#[cfg(not(target_arch = "wasm32"))]
const INDEX_ENV: &str = "CIRCUIT_QUIZ_INDEX";

/// Dónde vive el contenido y con qué claves se guarda el progreso.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    /// Directorio o URL base contra la que se resuelven las rutas de los JSON e imágenes
    pub base: String,
    pub index_path: String,
    pub completed_key: String,
    pub attempts_key: String,
}

/// Recurso ya resuelto: fichero local o URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    File(PathBuf),
    Url(String),
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::with_base(".")
    }
}

impl QuizConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            index_path: DEFAULT_INDEX_PATH.to_owned(),
            completed_key: COMPLETED_LEVELS_KEY.to_owned(),
            attempts_key: LEVEL_ATTEMPTS_KEY.to_owned(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let base = std::env::var(BASE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| ".".to_owned());
        let mut config = Self::with_base(base);
        if let Some(index) = std::env::var(INDEX_ENV).ok().filter(|s| !s.trim().is_empty()) {
            config.index_path = index;
        }
        config
    }

    /// En web la base es el directorio de la página, salvo que se fije al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let base = option_env!("CIRCUIT_QUIZ_BASE")
            .map(str::to_owned)
            .or_else(page_directory)
            .unwrap_or_default();
        Self::with_base(base)
    }

    pub fn resolve(&self, path: &str) -> Resource {
        if is_url(path) {
            return Resource::Url(path.to_owned());
        }
        let relative = path.trim_start_matches("./");
        if is_url(&self.base) || cfg!(target_arch = "wasm32") {
            let base = self.base.trim_end_matches('/');
            if base.is_empty() {
                Resource::Url(relative.to_owned())
            } else {
                Resource::Url(format!("{base}/{}", relative.trim_start_matches('/')))
            }
        } else {
            Resource::File(PathBuf::from(&self.base).join(relative))
        }
    }

    /// URI que entienden los cargadores de imagen de egui_extras.
    pub fn image_uri(&self, path: &str) -> String {
        match self.resolve(path) {
            Resource::Url(url) => url,
            Resource::File(file) => {
                let abs = std::path::absolute(&file).unwrap_or(file);
                format!("file://{}", abs.display())
            }
        }
    }
}

fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(target_arch = "wasm32")]
fn page_directory() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let without_query = href.split(['?', '#']).next().unwrap_or(&href);
    let dir = match without_query.rfind('/') {
        Some(i) => &without_query[..i],
        None => without_query,
    };
    Some(dir.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_and_storage_keys() {
        let config = QuizConfig::default();
        assert_eq!(config.index_path, "levels/levels_index.json");
        assert_eq!(config.completed_key, "completedLevels");
        assert_eq!(config.attempts_key, "levelAttempts");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn relative_paths_join_the_base_directory() {
        let config = QuizConfig::with_base("/srv/quiz");
        assert_eq!(
            config.resolve("./levels/serie/1.json"),
            Resource::File(PathBuf::from("/srv/quiz/levels/serie/1.json"))
        );
        assert_eq!(
            config.image_uri("img/serie_1.svg"),
            "file:///srv/quiz/img/serie_1.svg"
        );
    }

    #[test]
    fn url_base_produces_urls() {
        let config = QuizConfig::with_base("https://example.org/quiz/");
        assert_eq!(
            config.resolve("levels/levels_index.json"),
            Resource::Url("https://example.org/quiz/levels/levels_index.json".into())
        );
    }

    #[test]
    fn absolute_urls_are_kept() {
        let config = QuizConfig::with_base("/srv/quiz");
        assert_eq!(
            config.resolve("http://cdn.example.org/1.json"),
            Resource::Url("http://cdn.example.org/1.json".into())
        );
    }
}
