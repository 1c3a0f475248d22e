// ============================================
// Movement Classifier - Классификация движения
// ============================================

use crate::components::{MovementEdge, MovementType, SPEED_EPSILON};

/// Классифицировать движение по фактам кинематики текущего кадра
pub fn classify(on_ground: bool, speed: f32, crouching: bool) -> MovementType {
    if !on_ground {
        MovementType::Flying
    } else if speed < SPEED_EPSILON {
        MovementType::Stopped
    } else if crouching {
        MovementType::CrouchWalking
    } else {
        MovementType::Walking
    }
}

/// Определить переход между состояниями.
/// Приземление имеет приоритет: после полёта начало/остановка
/// движения не репортится. Переход Walking <-> CrouchWalking
/// не считается ни началом, ни остановкой.
pub fn detect_edge(previous: MovementType, new: MovementType) -> Option<MovementEdge> {
    if previous == new {
        return None;
    }

    if previous == MovementType::Flying {
        return Some(MovementEdge::Landed);
    }

    let was_moving = previous.is_moving();
    let is_moving = new.is_moving();

    if was_moving && !is_moving {
        Some(MovementEdge::StoppedMoving)
    } else if !was_moving && is_moving {
        Some(MovementEdge::StartedMoving)
    } else {
        None
    }
}
