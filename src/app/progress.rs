use super::*;
use crate::app::engine::Outcome;
use indexmap::IndexMap;

/// Contadores por nivel. Se guardan aparte de los completados.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttemptStats {
    pub attempts: u32,
    pub failures: u32,
    pub shorts: u32,
}

/// Progreso persistente: niveles completados (solo crece) y estadísticas de intentos.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressStore {
    completed: Vec<LevelId>,
    attempts: IndexMap<LevelId, AttemptStats>,
    dirty: bool,
}

impl ProgressStore {
    /// Lee ambas claves. Un valor ilegible se trata como vacío.
    pub fn load(storage: Option<&dyn Storage>, config: &QuizConfig) -> Self {
        let Some(storage) = storage else {
            return Self::default();
        };
        let completed = read_json(storage, &config.completed_key).unwrap_or_default();
        // Pares `[id, stats]`: el id conserva su tipo (1 y "1" no se mezclan)
        let attempts = read_json::<Vec<(LevelId, AttemptStats)>>(storage, &config.attempts_key)
            .map(|pairs| pairs.into_iter().collect())
            .unwrap_or_default();
        Self {
            completed,
            attempts,
            dirty: false,
        }
    }

    pub fn is_completed(&self, id: &LevelId) -> bool {
        self.completed.contains(id)
    }

    pub fn completed(&self) -> &[LevelId] {
        &self.completed
    }

    /// Añade el id si no estaba. Devuelve `true` si es nuevo.
    pub fn mark_completed(&mut self, id: &LevelId) -> bool {
        if self.is_completed(id) {
            return false;
        }
        self.completed.push(id.clone());
        self.dirty = true;
        true
    }

    pub fn record_attempt(&mut self, id: &LevelId, outcome: Outcome) {
        let stats = self.attempts.entry(id.clone()).or_default();
        stats.attempts += 1;
        if !outcome.is_correct() {
            stats.failures += 1;
        }
        if outcome == Outcome::Short {
            stats.shorts += 1;
        }
        self.dirty = true;
    }

    pub fn stats(&self, id: &LevelId) -> AttemptStats {
        self.attempts.get(id).copied().unwrap_or_default()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Escribe en el almacenamiento solo si hubo cambios.
    pub fn persist(&mut self, storage: &mut dyn Storage, config: &QuizConfig) {
        if !self.dirty {
            return;
        }
        self.write_all(storage, config);
        storage.flush();
    }

    pub fn write_all(&mut self, storage: &mut dyn Storage, config: &QuizConfig) {
        match serde_json::to_string(&self.completed) {
            Ok(json) => storage.set_string(&config.completed_key, json),
            Err(err) => log::error!("no se pudo serializar {}: {err}", config.completed_key),
        }
        let pairs: Vec<(&LevelId, &AttemptStats)> = self.attempts.iter().collect();
        match serde_json::to_string(&pairs) {
            Ok(json) => storage.set_string(&config.attempts_key, json),
            Err(err) => log::error!("no se pudo serializar {}: {err}", config.attempts_key),
        }
        self.dirty = false;
    }
}

fn read_json<T: serde::de::DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = storage.get_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("progreso ilegible en '{key}', se ignora: {err}");
            None
        }
    }
}

impl QuizApp {
    pub fn persist(&mut self, storage: &mut dyn Storage) {
        self.progress.persist(storage, &self.config);
    }
}

/// Almacenamiento en memoria para tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryStorage {
    pub values: std::collections::HashMap<String, String>,
    pub flushes: usize,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_completed_levels_as_json_array() {
        let mut storage = MemoryStorage::default();
        storage
            .values
            .insert("completedLevels".into(), r#"[1, "s2"]"#.into());
        let store = ProgressStore::load(Some(&storage), &QuizConfig::default());
        assert!(store.is_completed(&1.into()));
        assert!(store.is_completed(&"s2".into()));
        assert!(!store.is_completed(&"1".into()));
        assert!(!store.is_dirty());
    }

    #[test]
    fn unreadable_progress_starts_empty() {
        let mut storage = MemoryStorage::default();
        storage.values.insert("completedLevels".into(), "{roto".into());
        let store = ProgressStore::load(Some(&storage), &QuizConfig::default());
        assert!(store.completed().is_empty());
        assert_eq!(ProgressStore::load(None, &QuizConfig::default()), ProgressStore::default());
    }

    #[test]
    fn marking_is_idempotent_across_sessions() {
        let config = QuizConfig::default();
        let mut storage = MemoryStorage::default();

        let mut first = ProgressStore::load(Some(&storage), &config);
        assert!(first.mark_completed(&"L1".into()));
        assert!(!first.mark_completed(&"L1".into()));
        first.persist(&mut storage, &config);
        assert_eq!(storage.values["completedLevels"], r#"["L1"]"#);

        let mut second = ProgressStore::load(Some(&storage), &config);
        assert!(!second.mark_completed(&"L1".into()));
        assert!(second.mark_completed(&7.into()));
        second.persist(&mut storage, &config);
        assert_eq!(storage.values["completedLevels"], r#"["L1",7]"#);
    }

    #[test]
    fn persist_skips_clean_store() {
        let config = QuizConfig::default();
        let mut storage = MemoryStorage::default();
        let mut store = ProgressStore::default();
        store.persist(&mut storage, &config);
        assert!(storage.values.is_empty());
        assert_eq!(storage.flushes, 0);
    }

    #[test]
    fn attempts_count_failures_and_shorts() {
        let config = QuizConfig::default();
        let mut storage = MemoryStorage::default();
        let mut store = ProgressStore::default();
        let id: LevelId = 3.into();
        store.record_attempt(&id, Outcome::Short);
        store.record_attempt(&id, Outcome::IncorrectNoShort);
        store.record_attempt(&id, Outcome::Correct);
        assert_eq!(
            store.stats(&id),
            AttemptStats {
                attempts: 3,
                failures: 2,
                shorts: 1
            }
        );
        store.persist(&mut storage, &config);

        let reloaded = ProgressStore::load(Some(&storage), &config);
        assert_eq!(reloaded.stats(&id).attempts, 3);
        assert_eq!(reloaded.stats(&"otro".into()), AttemptStats::default());
    }

    #[test]
    fn numeric_and_text_ids_keep_separate_counters() {
        let config = QuizConfig::default();
        let mut storage = MemoryStorage::default();
        let mut store = ProgressStore::default();
        let number: LevelId = 1.into();
        let text: LevelId = "1".into();

        store.record_attempt(&number, Outcome::Short);
        store.mark_completed(&number);
        assert!(!store.is_completed(&text));
        assert_eq!(store.stats(&text), AttemptStats::default());

        store.record_attempt(&text, Outcome::Correct);
        store.persist(&mut storage, &config);
        assert_eq!(
            storage.values["levelAttempts"],
            r#"[[1,{"attempts":1,"failures":1,"shorts":1}],["1",{"attempts":1,"failures":0,"shorts":0}]]"#
        );

        let reloaded = ProgressStore::load(Some(&storage), &config);
        assert_eq!(reloaded.stats(&number).shorts, 1);
        assert_eq!(reloaded.stats(&text).failures, 0);
        assert_eq!(reloaded.stats(&text).attempts, 1);
    }
}
