// src/data.rs

use crate::config::QuizConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::config::Resource;
use crate::errors::{LoadCause, LoadError, LoadResult};
use crate::model::{LevelDetail, LevelIndex};

pub fn parse_index(text: &str) -> Result<LevelIndex, LoadCause> {
    Ok(serde_json::from_str(text)?)
}

pub fn parse_level(text: &str) -> Result<LevelDetail, LoadCause> {
    Ok(serde_json::from_str(text)?)
}

/// Lee el texto de un recurso. Un solo intento, sin reintentos.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_text(config: &QuizConfig, path: &str) -> Result<String, LoadCause> {
    match config.resolve(path) {
        Resource::File(file) => Ok(std::fs::read_to_string(file)?),
        Resource::Url(url) => {
            let resp = reqwest::blocking::get(&url)?;
            if !resp.status().is_success() {
                return Err(LoadCause::Status(resp.status().as_u16()));
            }
            Ok(resp.text()?)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(config: &QuizConfig, path: &str) -> Result<String, LoadCause> {
    use crate::config::Resource;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let url = match config.resolve(path) {
        Resource::Url(url) => url,
        Resource::File(file) => file.display().to_string(),
    };
    let window =
        web_sys::window().ok_or_else(|| LoadCause::Network("No existe window en entorno WASM.".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_cause)?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadCause::Network("La respuesta fetch no es un Response válido.".into()))?;

    if !response.ok() {
        return Err(LoadCause::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_cause)?)
        .await
        .map_err(js_cause)?;
    text.as_string()
        .ok_or_else(|| LoadCause::Network("response.text() no devolvió string".into()))
}

#[cfg(target_arch = "wasm32")]
fn js_cause(err: wasm_bindgen::JsValue) -> LoadCause {
    LoadCause::Network(format!("{err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_index(config: &QuizConfig) -> LoadResult<LevelIndex> {
    let path = config.index_path.clone();
    log::info!("cargando índice de niveles desde {path}");
    fetch_text(config, &path)
        .and_then(|text| parse_index(&text))
        .map_err(|cause| LoadError::Index { path, cause })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_level(config: &QuizConfig, path: &str) -> LoadResult<LevelDetail> {
    log::info!("cargando nivel {path}");
    fetch_text(config, path)
        .and_then(|text| parse_level(&text))
        .map_err(|cause| LoadError::Level {
            path: path.to_owned(),
            cause,
        })
}

#[cfg(target_arch = "wasm32")]
pub async fn load_index(config: &QuizConfig) -> LoadResult<LevelIndex> {
    let path = config.index_path.clone();
    log::info!("cargando índice de niveles desde {path}");
    match fetch_text(config, &path).await {
        Ok(text) => parse_index(&text).map_err(|cause| LoadError::Index { path, cause }),
        Err(cause) => Err(LoadError::Index { path, cause }),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn load_level(config: &QuizConfig, path: &str) -> LoadResult<LevelDetail> {
    log::info!("cargando nivel {path}");
    let to_err = |cause| LoadError::Level {
        path: path.to_owned(),
        cause,
    };
    match fetch_text(config, path).await {
        Ok(text) => parse_level(&text).map_err(to_err),
        Err(cause) => Err(to_err(cause)),
    }
}
