// ============================================
// Audio Playback - Вывод звука через kira
// ============================================

use std::collections::HashMap;

use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundSettings},
    Volume,
};
use ultraviolet::Vec3;

use crate::catalog::SoundCatalog;

/// Выход аудио: fire-and-forget воспроизведение клипа по пути
pub trait AudioOutput {
    fn play(&mut self, clip: &str, position: Vec3, volume: f64);
}

/// Банк загруженных звуков по пути файла
pub struct SoundBank {
    sounds: HashMap<String, StaticSoundData>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self {
            sounds: HashMap::new(),
        }
    }

    /// Загрузить клип с диска
    pub fn load(&mut self, path: &str) -> Result<(), String> {
        match StaticSoundData::from_file(path) {
            Ok(sound) => {
                self.sounds.insert(path.to_string(), sound);
                log::info!("Загружен звук: {}", path);
                Ok(())
            }
            Err(e) => Err(format!("Failed to load sound {}: {:?}", path, e)),
        }
    }

    /// Предзагрузить все клипы каталога
    pub fn load_catalog(&mut self, catalog: &SoundCatalog) -> Result<usize, String> {
        let mut loaded = 0;
        for path in catalog.clip_paths() {
            if !self.sounds.contains_key(path) {
                self.load(path)?;
                loaded += 1;
            }
        }
        Ok(loaded)
    }

    pub fn get(&self, path: &str) -> Option<&StaticSoundData> {
        self.sounds.get(path)
    }

    pub fn count(&self) -> usize {
        self.sounds.len()
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Аудио выход на kira
pub struct KiraOutput {
    manager: AudioManager,
    bank: SoundBank,
}

impl KiraOutput {
    pub fn new(bank: SoundBank) -> Result<Self, String> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
            .map_err(|e| format!("Failed to create audio manager: {:?}", e))?;

        Ok(Self { manager, bank })
    }

    pub fn bank_mut(&mut self) -> &mut SoundBank {
        &mut self.bank
    }
}

impl AudioOutput for KiraOutput {
    fn play(&mut self, clip: &str, _position: Vec3, volume: f64) {
        if let Some(sound_data) = self.bank.get(clip) {
            let settings = StaticSoundSettings::new().volume(Volume::Amplitude(volume));
            let _ = self.manager.play(sound_data.clone().with_settings(settings));
        } else {
            log::warn!("Sound '{}' is not loaded.", clip);
        }
    }
}
