// ============================================
// Footstep Events - Уведомления о движении
// ============================================
// Подписчики-колбэки вместо broadcast-делегатов. Порядок доставки
// совпадает с порядком обновления за кадр, не более одного
// уведомления на переход.

/// Событие движка шагов
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FootstepEvent {
    /// Звук успешно прошёл общий кулдаун и был отправлен на воспроизведение
    FootstepPlayed,
    /// Внешний сигнал прыжка зарегистрирован
    Jumped,
    /// Персонаж коснулся земли после полёта
    Landed,
    /// Персонаж начал движение
    StartedMoving,
    /// Персонаж остановился
    StoppedMoving,
}

/// Подписчик на события движка
pub type EventListener = Box<dyn FnMut(FootstepEvent) + Send>;
