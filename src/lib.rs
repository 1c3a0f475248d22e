// ============================================
// footfall - Движок звуков шагов персонажа
// ============================================
// Покадровый движок решений: классификация движения с переходами,
// каденция шагов по пройденной дистанции, поверхность под ногами
// с троттлингом луча и выбор звука/громкости по поверхности и скорости.

mod catalog;
mod components;
mod config;
mod curves;
mod engine;
mod events;
mod playback;
mod surface;
mod systems;

pub use catalog::*;
pub use components::*;
pub use config::FootstepConfig;
pub use curves::*;
pub use engine::FootstepEngine;
pub use events::*;
pub use playback::*;
pub use surface::*;
pub use systems::{cadence, movement};
