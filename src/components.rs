// ============================================
// Footstep Components - Чистые данные
// ============================================

use ultraviolet::Vec3;

/// Порог скорости, ниже которого персонаж считается стоящим
pub const SPEED_EPSILON: f32 = 1e-8;

/// Тип движения персонажа, выводится каждый кадр из кинематики
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MovementType {
    #[default]
    Stopped,
    Walking,
    CrouchWalking,
    Flying,
}

impl MovementType {
    /// Идёт ли персонаж по земле
    pub fn is_moving(&self) -> bool {
        matches!(self, MovementType::Walking | MovementType::CrouchWalking)
    }
}

/// Переход между типами движения. Срабатывает только на кадре смены
/// состояния, не более одного перехода за смену.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementEdge {
    Landed,
    StartedMoving,
    StoppedMoving,
}

/// Кинематика персонажа на текущий кадр (только чтение)
#[derive(Clone, Copy, Debug)]
pub struct KinematicSample {
    pub position: Vec3,
    pub speed: f32,
    pub on_ground: bool,
    pub crouching: bool,
}

/// Состояние накопителя дистанции между шагами
pub struct CadenceState {
    pub remaining_distance: f32,
    pub last_position: Vec3,
    pub first_frame: bool,
}

impl CadenceState {
    pub fn new(initial_distance: f32) -> Self {
        Self {
            remaining_distance: initial_distance,
            last_position: Vec3::zero(),
            first_frame: true,
        }
    }
}

/// Общий кулдаун воспроизведения. Шаги, прыжки и приземления
/// делят один таймер.
pub struct CooldownState {
    pub time_since_last_footstep: f32,
}

impl CooldownState {
    pub fn new() -> Self {
        Self {
            time_since_last_footstep: 0.0,
        }
    }
}

impl Default for CooldownState {
    fn default() -> Self {
        Self::new()
    }
}
