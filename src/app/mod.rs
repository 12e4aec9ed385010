use crate::config::QuizConfig;
use crate::data;
use crate::errors::LoadResult;
use crate::model::{AppState, LevelDetail, LevelId, LevelIndex};
use eframe::Storage;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod engine;
pub mod navigation;
pub mod progress;
pub mod view_models;


use engine::Attempt;
pub use progress::{AttemptStats, ProgressStore};

/// Aviso modal con botón "Aceptar" (errores recuperables, fin de categoría).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            text: text.into(),
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Carga en curso en web; llega por canal y se consulta en cada frame.
#[cfg(target_arch = "wasm32")]
pub(crate) enum PendingLoad {
    Index(std::sync::mpsc::Receiver<LoadResult<LevelIndex>>),
    Level(std::sync::mpsc::Receiver<LoadResult<LevelDetail>>),
}

pub struct QuizApp {
    pub config: QuizConfig,
    pub state: AppState,
    pub index: LevelIndex,
    /// Nivel en pantalla y la respuesta elegida, si la hay
    pub attempt: Option<Attempt>,
    pub progress: ProgressStore,
    pub short_alert_open: bool,
    pub notice: Option<Notice>,
    /// Mensaje de la pantalla de error fatal
    pub message: String,
    #[cfg(target_arch = "wasm32")]
    pub(crate) pending: Option<PendingLoad>,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::with_config(QuizConfig::from_env(), cc.storage)
    }

    /// Construye la app y arranca la carga del índice.
    pub fn with_config(config: QuizConfig, storage: Option<&dyn Storage>) -> Self {
        let progress = ProgressStore::load(storage, &config);
        let mut quiz_app = Self {
            config,
            state: AppState::Loading,
            index: LevelIndex::new(),
            attempt: None,
            progress,
            short_alert_open: false,
            notice: None,
            message: String::new(),
            #[cfg(target_arch = "wasm32")]
            pending: None,
        };
        quiz_app.start_index_load();
        quiz_app
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start_index_load(&mut self) {
        let result = data::load_index(&self.config);
        self.apply_index_load(result);
    }

    #[cfg(target_arch = "wasm32")]
    fn start_index_load(&mut self) {
        let config = self.config.clone();
        let (tx, rx) = std::sync::mpsc::channel();
        self.pending = Some(PendingLoad::Index(rx));
        wasm_bindgen_futures::spawn_local(async move {
            let result = data::load_index(&config).await;
            let _ = tx.send(result);
        });
    }

    pub(crate) fn apply_index_load(&mut self, result: LoadResult<LevelIndex>) {
        match result {
            Ok(index) => {
                log::info!(
                    "índice cargado: {} categorías, {} niveles",
                    index.len(),
                    index.values().map(|c| c.levels.len()).sum::<usize>()
                );
                self.index = index;
                self.state = AppState::Browsing;
            }
            Err(err) => {
                log::error!("{err}");
                self.message = err.user_message();
                self.state = AppState::Unavailable;
            }
        }
    }

    pub fn current_level(&self) -> Option<&LevelDetail> {
        self.attempt.as_ref().map(|a| &a.level)
    }

    pub fn current_level_id(&self) -> Option<&LevelId> {
        self.current_level().map(|l| &l.id)
    }
}
