use super::*;
use crate::app::engine::{NextStep, level_file, next_step};

const CATEGORY_DONE_TITLE: &str = "¡Serie completada!";
const CATEGORY_DONE_TEXT: &str = "¡Felicidades! Has completado esta serie de niveles.";

impl QuizApp {
    /// Carga un nivel por ruta. Nativamente es síncrono; en web queda pendiente.
    pub fn open_level(&mut self, path: &str) {
        if self.notice.is_some() {
            log::debug!("aviso abierto, se ignora la apertura de {path}");
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let result = data::load_level(&self.config, path);
            self.apply_level_load(result);
        }

        #[cfg(target_arch = "wasm32")]
        self.spawn_level_load(path.to_owned());
    }

    pub(crate) fn apply_level_load(&mut self, result: LoadResult<LevelDetail>) {
        match result {
            Ok(level) => {
                for issue in level.validate() {
                    log::warn!("nivel {}: {issue}", level.id);
                }
                log::debug!("nivel {} listo, {} opciones", level.id, level.options.len());
                self.attempt = Some(Attempt::new(level));
                self.short_alert_open = false;
                self.state = AppState::Viewing;
            }
            Err(err) => {
                log::error!("{err}");
                self.notice = Some(Notice::error(err.user_message()));
                self.show_level_list();
            }
        }
    }

    pub fn show_level_list(&mut self) {
        self.attempt = None;
        self.short_alert_open = false;
        self.state = AppState::Browsing;
    }

    /// Recarga el mismo nivel desde su fichero, con las opciones limpias.
    pub fn retry_level(&mut self) {
        let Some(id) = self.current_level_id().cloned() else {
            self.show_level_list();
            return;
        };
        match level_file(&self.index, &id).map(str::to_owned) {
            Some(file) => self.open_level(&file),
            None => {
                log::warn!("el nivel {id} no está en el índice, volviendo a la lista");
                self.show_level_list();
            }
        }
    }

    /// Tras acertar: siguiente nivel de la categoría o vuelta a la lista.
    pub fn advance(&mut self) {
        let Some(id) = self.current_level_id().cloned() else {
            self.show_level_list();
            return;
        };
        match next_step(&self.index, &id) {
            NextStep::Load(file) => self.open_level(&file),
            NextStep::CategoryFinished => {
                self.notice = Some(Notice::info(CATEGORY_DONE_TITLE, CATEGORY_DONE_TEXT));
                self.show_level_list();
            }
            NextStep::Unknown => {
                log::warn!("el nivel {id} no está en el índice, volviendo a la lista");
                self.show_level_list();
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_level_load(&mut self, path: String) {
        if self.pending.is_some() {
            log::debug!("ya hay una carga en curso, se ignora {path}");
            return;
        }
        let config = self.config.clone();
        let (tx, rx) = std::sync::mpsc::channel();
        self.pending = Some(PendingLoad::Level(rx));
        wasm_bindgen_futures::spawn_local(async move {
            let result = data::load_level(&config, &path).await;
            let _ = tx.send(result);
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub fn poll_pending_load(&mut self) {
        use std::sync::mpsc::TryRecvError;

        let Some(pending) = self.pending.take() else {
            return;
        };
        match pending {
            PendingLoad::Index(rx) => match rx.try_recv() {
                Ok(result) => self.apply_index_load(result),
                Err(TryRecvError::Empty) => self.pending = Some(PendingLoad::Index(rx)),
                Err(TryRecvError::Disconnected) => {
                    log::error!("la carga del índice terminó sin resultado");
                    self.message = "No se pudieron cargar los niveles.".to_owned();
                    self.state = AppState::Unavailable;
                }
            },
            PendingLoad::Level(rx) => match rx.try_recv() {
                Ok(result) => self.apply_level_load(result),
                Err(TryRecvError::Empty) => self.pending = Some(PendingLoad::Level(rx)),
                Err(TryRecvError::Disconnected) => {
                    log::error!("la carga del nivel terminó sin resultado");
                }
            },
        }
    }

    pub fn is_load_pending(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.pending.is_some()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}
