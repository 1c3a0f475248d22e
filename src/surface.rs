// ============================================
// Surface Tracker - Поверхность под ногами
// ============================================
// Троттлинг дорогих запросов к физике: луч вниз не чаще
// заданного интервала и только в движении

use ultraviolet::Vec3;

use crate::components::SPEED_EPSILON;

/// Параметры одного луча вниз. Создаются на стеке для каждого вызова.
#[derive(Debug, Clone, Copy)]
pub struct ProbeRequest {
    pub origin: Vec3,
    pub end: Vec3,
    pub channel: u32,
}

/// Тип функции запроса поверхности: один луч вниз -> ключ поверхности
pub type SurfaceProbe = Box<dyn Fn(&ProbeRequest) -> Option<String> + Send + Sync>;

/// Кэш поверхности под ногами с троттлингом пересэмплирования
pub struct SurfaceTracker {
    cached_surface: Option<String>,
    age: f32,
    resample_interval: f32,
}

impl SurfaceTracker {
    pub fn new(resample_interval: f32) -> Self {
        Self {
            cached_surface: None,
            age: 0.0,
            resample_interval,
        }
    }

    /// Текущая поверхность без пересчёта
    pub fn current(&self) -> Option<&str> {
        self.cached_surface.as_deref()
    }

    /// Пересэмплировать, если интервал истёк и персонаж движется.
    /// Стоя на месте луч не пускаем: решения без движения не требуют
    /// свежей поверхности.
    pub fn maybe_resample(
        &mut self,
        request: &ProbeRequest,
        speed: f32,
        dt: f32,
        probe: Option<&SurfaceProbe>,
    ) {
        self.age += dt;
        if self.age > self.resample_interval && speed > SPEED_EPSILON {
            self.age = 0.0;
            self.resample(request, probe);
        }
    }

    /// Безусловное пересэмплирование. Поверхность приземления должна
    /// быть свежей, а не из кэша.
    pub fn force_resample(&mut self, request: &ProbeRequest, probe: Option<&SurfaceProbe>) {
        self.age = 0.0;
        self.resample(request, probe);
    }

    // Промах луча сохраняет старое значение: временный промах не должен
    // сбрасывать валидное чтение.
    fn resample(&mut self, request: &ProbeRequest, probe: Option<&SurfaceProbe>) {
        if let Some(probe) = probe {
            if let Some(surface) = probe(request) {
                self.cached_surface = Some(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn request() -> ProbeRequest {
        ProbeRequest {
            origin: Vec3::new(0.0, 100.0, 0.0),
            end: Vec3::new(0.0, 0.0, 0.0),
            channel: 0,
        }
    }

    #[test]
    fn test_throttle_interval() {
        let mut tracker = SurfaceTracker::new(0.05);
        let probe: SurfaceProbe = Box::new(|_| Some("concrete".to_string()));

        // Интервал ещё не истёк
        tracker.maybe_resample(&request(), 300.0, 0.03, Some(&probe));
        assert_eq!(tracker.current(), None);

        tracker.maybe_resample(&request(), 300.0, 0.03, Some(&probe));
        assert_eq!(tracker.current(), Some("concrete"));
    }

    #[test]
    fn test_no_resample_while_stationary() {
        let mut tracker = SurfaceTracker::new(0.05);
        let probe: SurfaceProbe = Box::new(|_| Some("concrete".to_string()));

        tracker.maybe_resample(&request(), 0.0, 1.0, Some(&probe));
        assert_eq!(tracker.current(), None);

        // Как только есть скорость, накопленный интервал срабатывает сразу
        tracker.maybe_resample(&request(), 300.0, 0.001, Some(&probe));
        assert_eq!(tracker.current(), Some("concrete"));
    }

    #[test]
    fn test_probe_miss_retains_previous() {
        let mut tracker = SurfaceTracker::new(0.05);
        let miss = Arc::new(AtomicBool::new(false));
        let miss_probe = miss.clone();
        let probe: SurfaceProbe = Box::new(move |_| {
            if miss_probe.load(Ordering::Relaxed) {
                None
            } else {
                Some("concrete".to_string())
            }
        });

        tracker.maybe_resample(&request(), 300.0, 0.1, Some(&probe));
        assert_eq!(tracker.current(), Some("concrete"));

        // Луч перестал находить поверхность - кэш не трогаем
        miss.store(true, Ordering::Relaxed);
        tracker.maybe_resample(&request(), 300.0, 0.1, Some(&probe));
        assert_eq!(tracker.current(), Some("concrete"));
    }

    #[test]
    fn test_force_resample_ignores_throttle() {
        let mut tracker = SurfaceTracker::new(0.05);
        let probe: SurfaceProbe = Box::new(|_| Some("dirt".to_string()));

        tracker.force_resample(&request(), Some(&probe));
        assert_eq!(tracker.current(), Some("dirt"));
    }

    #[test]
    fn test_without_probe_nothing_happens() {
        let mut tracker = SurfaceTracker::new(0.05);
        tracker.maybe_resample(&request(), 300.0, 1.0, None);
        tracker.force_resample(&request(), None);
        assert_eq!(tracker.current(), None);
    }
}
