// ============================================
// Cadence Tracker - Дистанция между шагами
// ============================================

use ultraviolet::Vec3;

use crate::components::CadenceState;
use crate::curves::SpeedCurve;

/// Продвинуть накопитель дистанции. Возвращает true, если пора шагнуть
/// (не чаще одного шага за вызов).
///
/// last_position обновляется безусловно, даже без движения: пауза
/// не должна давать скачок дистанции при возобновлении ходьбы.
/// После шага перелёт зажимается в 0 и только потом берётся новый
/// интервал из кривой, чтобы большой кадровый сдвиг не накапливал
/// ошибку в следующем интервале.
pub fn advance(
    state: &mut CadenceState,
    position: Vec3,
    moving: bool,
    speed: f32,
    interval_curve: Option<&SpeedCurve>,
    fallback_distance: f32,
) -> bool {
    // Первый кадр - только инициализация позиции
    if state.first_frame {
        state.first_frame = false;
        state.last_position = position;
        return false;
    }

    let distance = (position - state.last_position).mag();
    state.last_position = position;

    if !moving {
        return false;
    }

    state.remaining_distance -= distance;
    if state.remaining_distance > 0.0 {
        return false;
    }

    state.remaining_distance = 0.0;

    if let Some(curve) = interval_curve {
        state.remaining_distance = curve.evaluate(speed);
    } else {
        log::warn!("Interval speed curve is not set.");
    }

    // Кривая, вернувшая 0 (или мусор), застопорила бы шаги навсегда
    if !state.remaining_distance.is_finite() || state.remaining_distance <= 0.0 {
        state.remaining_distance = fallback_distance;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: f32 = 20.0;

    #[test]
    fn test_step_sequence() {
        // Интервал 20, кривая даёт 150, сдвиги 10 / 10 / 5:
        // шаг срабатывает на втором вызове
        let mut state = CadenceState::new(20.0);
        let curve = SpeedCurve::constant(150.0);

        assert!(!advance(&mut state, Vec3::zero(), true, 300.0, Some(&curve), FALLBACK));

        assert!(!advance(
            &mut state,
            Vec3::new(10.0, 0.0, 0.0),
            true,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, 10.0);

        assert!(advance(
            &mut state,
            Vec3::new(20.0, 0.0, 0.0),
            true,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, 150.0);

        assert!(!advance(
            &mut state,
            Vec3::new(25.0, 0.0, 0.0),
            true,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, 145.0);
    }

    #[test]
    fn test_zero_displacement_never_steps() {
        let mut state = CadenceState::new(20.0);
        let curve = SpeedCurve::constant(150.0);
        let position = Vec3::new(5.0, 0.0, 5.0);

        advance(&mut state, position, true, 300.0, Some(&curve), FALLBACK);
        for _ in 0..100 {
            assert!(!advance(&mut state, position, true, 300.0, Some(&curve), FALLBACK));
        }
        assert!(state.remaining_distance >= 0.0);
    }

    #[test]
    fn test_remaining_distance_never_negative() {
        let mut state = CadenceState::new(20.0);
        let curve = SpeedCurve::constant(150.0);

        advance(&mut state, Vec3::zero(), true, 300.0, Some(&curve), FALLBACK);
        // Огромный кадровый сдвиг: перелёт зажимается, интервал из кривой
        advance(&mut state, Vec3::new(1000.0, 0.0, 0.0), true, 300.0, Some(&curve), FALLBACK);
        assert_eq!(state.remaining_distance, 150.0);
    }

    #[test]
    fn test_zero_curve_uses_fallback() {
        let mut state = CadenceState::new(5.0);
        let curve = SpeedCurve::constant(0.0);

        advance(&mut state, Vec3::zero(), true, 300.0, Some(&curve), FALLBACK);
        assert!(advance(
            &mut state,
            Vec3::new(10.0, 0.0, 0.0),
            true,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, FALLBACK);
    }

    #[test]
    fn test_missing_curve_uses_fallback() {
        let mut state = CadenceState::new(5.0);

        advance(&mut state, Vec3::zero(), true, 300.0, None, FALLBACK);
        assert!(advance(&mut state, Vec3::new(10.0, 0.0, 0.0), true, 300.0, None, FALLBACK));
        assert_eq!(state.remaining_distance, FALLBACK);
    }

    #[test]
    fn test_not_moving_consumes_displacement_without_stepping() {
        let mut state = CadenceState::new(20.0);
        let curve = SpeedCurve::constant(150.0);

        advance(&mut state, Vec3::zero(), true, 300.0, Some(&curve), FALLBACK);
        // Полёт на 500 юнитов не приближает следующий шаг
        assert!(!advance(
            &mut state,
            Vec3::new(500.0, 0.0, 0.0),
            false,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, 20.0);

        // И после возобновления считается только новый сдвиг
        assert!(!advance(
            &mut state,
            Vec3::new(505.0, 0.0, 0.0),
            true,
            300.0,
            Some(&curve),
            FALLBACK
        ));
        assert_eq!(state.remaining_distance, 15.0);
    }
}
