// ============================================
// Data-Driven Sound Set Definition
// ============================================
// Структуры для загрузки наборов звуков из JSON

use serde::{Deserialize, Serialize};

/// Определение набора звуков для одной поверхности.
/// Пути к клипам опциональны: не заданный клип просто не играется.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSetDefinition {
    /// Ключ поверхности (например "concrete" или "grass")
    pub surface: String,

    /// Звук шага (ходьба и бег)
    #[serde(default)]
    pub footstep: Option<String>,

    /// Звук прыжка
    #[serde(default)]
    pub jump: Option<String>,

    /// Звук приземления
    #[serde(default)]
    pub land: Option<String>,
}

/// Файл с определениями наборов звуков
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundSetsFile {
    /// Версия формата
    #[serde(default = "default_version")]
    pub version: String,

    /// Список наборов
    pub sound_sets: Vec<SoundSetDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}
