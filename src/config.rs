// ============================================
// Footstep Config - Data-Driven настройки
// ============================================
// Параметры движка загружаются из JSON, каждое поле с дефолтом

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Настройки движка шагов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootstepConfig {
    /// Запас длины луча под низом капсулы (юниты)
    #[serde(default = "default_ground_probe_margin")]
    pub ground_probe_margin: f32,

    /// Минимальный интервал между воспроизведениями (секунды).
    /// Шаг внутри этого окна отменяется.
    #[serde(default = "default_minimum_sound_interval")]
    pub minimum_sound_interval: f32,

    /// Множитель громкости шагов в приседе
    #[serde(default = "default_crouch_volume_multiplier")]
    pub crouch_volume_multiplier: f32,

    /// Интервал обновления поверхности под ногами (секунды)
    #[serde(default = "default_surface_resample_interval")]
    pub surface_resample_interval: f32,

    /// Канал коллизий для луча определения поверхности
    #[serde(default)]
    pub surface_probe_channel: u32,

    /// Дистанция до следующего шага, когда кривая интервала
    /// вернула 0 или не задана
    #[serde(default = "default_fallback_step_distance")]
    pub fallback_step_distance: f32,

    /// Половина высоты капсулы персонажа (юниты)
    #[serde(default = "default_capsule_half_height")]
    pub capsule_half_height: f32,
}

fn default_ground_probe_margin() -> f32 {
    10.0
}
fn default_minimum_sound_interval() -> f32 {
    0.12
}
fn default_crouch_volume_multiplier() -> f32 {
    0.5
}
fn default_surface_resample_interval() -> f32 {
    0.05
}
fn default_fallback_step_distance() -> f32 {
    20.0
}
fn default_capsule_half_height() -> f32 {
    90.0
}

impl Default for FootstepConfig {
    fn default() -> Self {
        Self {
            ground_probe_margin: default_ground_probe_margin(),
            minimum_sound_interval: default_minimum_sound_interval(),
            crouch_volume_multiplier: default_crouch_volume_multiplier(),
            surface_resample_interval: default_surface_resample_interval(),
            surface_probe_channel: 0,
            fallback_step_distance: default_fallback_step_distance(),
            capsule_half_height: default_capsule_half_height(),
        }
    }
}

impl FootstepConfig {
    /// Загрузить настройки из JSON строки
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config JSON: {}", e))
    }

    /// Загрузить настройки из файла
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FootstepConfig::default();
        assert_eq!(config.ground_probe_margin, 10.0);
        assert_eq!(config.minimum_sound_interval, 0.12);
        assert_eq!(config.crouch_volume_multiplier, 0.5);
        assert_eq!(config.surface_resample_interval, 0.05);
        assert_eq!(config.fallback_step_distance, 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        // Не указанные поля берутся из дефолтов
        let config = FootstepConfig::from_json(r#"{ "minimum_sound_interval": 0.3 }"#).unwrap();
        assert_eq!(config.minimum_sound_interval, 0.3);
        assert_eq!(config.crouch_volume_multiplier, 0.5);
        assert_eq!(config.fallback_step_distance, 20.0);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        assert!(FootstepConfig::from_json("not json").is_err());
    }
}
