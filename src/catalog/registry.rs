// ============================================
// Sound Catalog - Data-Driven из JSON
// ============================================
// Единый источник правды для звуков поверхностей

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::definition::{SoundSetDefinition, SoundSetsFile};

/// Набор клипов для одной поверхности (пути к аудио файлам)
#[derive(Debug, Clone, Default)]
pub struct SoundBundle {
    pub footstep: Option<String>,
    pub jump: Option<String>,
    pub land: Option<String>,
}

/// Каталог наборов звуков по ключу поверхности
pub struct SoundCatalog {
    bundles: HashMap<String, SoundBundle>,
}

impl SoundCatalog {
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Загрузить наборы из JSON строки
    pub fn load_from_json(&mut self, json: &str) -> Result<usize, String> {
        let file: SoundSetsFile =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON: {}", e))?;

        let count = file.sound_sets.len();
        for set in file.sound_sets {
            self.register(set);
        }
        Ok(count)
    }

    /// Загрузить наборы из файла
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read file: {}", e))?;
        self.load_from_json(&content)
    }

    /// Загрузить все JSON из директории
    pub fn load_from_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, String> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(0);
        }

        let mut total = 0;
        for entry in fs::read_dir(dir).map_err(|e| e.to_string())? {
            let path = entry.map_err(|e| e.to_string())?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Ok(count) = self.load_from_file(&path) {
                    total += count;
                }
            }
        }
        Ok(total)
    }

    /// Зарегистрировать набор. Ключи уникальны, повтор перезаписывает.
    pub fn register(&mut self, def: SoundSetDefinition) {
        let bundle = SoundBundle {
            footstep: def.footstep,
            jump: def.jump,
            land: def.land,
        };
        if self.bundles.insert(def.surface.clone(), bundle).is_some() {
            log::warn!("Sound set for surface '{}' replaced.", def.surface);
        }
    }

    /// Получить набор по ключу поверхности
    pub fn get(&self, surface: &str) -> Option<&SoundBundle> {
        self.bundles.get(surface)
    }

    /// Все ключи поверхностей
    pub fn surfaces(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(|s| s.as_str())
    }

    /// Все пути к клипам (для предзагрузки банка звуков)
    pub fn clip_paths(&self) -> impl Iterator<Item = &str> {
        self.bundles.values().flat_map(|b| {
            [b.footstep.as_deref(), b.jump.as_deref(), b.land.as_deref()]
                .into_iter()
                .flatten()
        })
    }

    /// Количество наборов
    pub fn count(&self) -> usize {
        self.bundles.len()
    }
}

impl Default for SoundCatalog {
    fn default() -> Self {
        Self::new()
    }
}
