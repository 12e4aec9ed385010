//! Errores de carga del índice y de los niveles.

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Motivo concreto por el que falló una lectura.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("respuesta HTTP {0}")]
    Status(u16),

    #[error("error de red: {0}")]
    Network(String),

    #[error("JSON inválido: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadCause {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadCause::Status(status.as_u16()),
            None => LoadCause::Network(err.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// Sin índice no se puede jugar: fatal para la sesión.
    #[error("fallo al cargar el índice de niveles ({path}): {cause}")]
    Index {
        path: String,
        #[source]
        cause: LoadCause,
    },

    /// Recuperable: se vuelve a la selección de niveles.
    #[error("fallo al cargar el nivel ({path}): {cause}")]
    Level {
        path: String,
        #[source]
        cause: LoadCause,
    },
}

impl LoadError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoadError::Index { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            LoadError::Index { path, .. } | LoadError::Level { path, .. } => path,
        }
    }

    /// Texto que ve el usuario.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Index { path, .. } => format!(
                "Error: No se pudo cargar la lista de niveles. Verifique el archivo {path}"
            ),
            LoadError::Level { path, .. } => format!(
                "Error: No se pudo cargar el archivo del nivel. Verifique la ruta: {path}"
            ),
        }
    }
}
