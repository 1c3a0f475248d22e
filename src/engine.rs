// ============================================
// Footstep Engine - Фасад движка шагов
// ============================================
// Один экземпляр на персонажа. Владеет порядком обновления
// подсистем за кадр: поверхность -> классификация и переходы ->
// каденция шагов -> кулдаун.

use ultraviolet::Vec3;

use crate::catalog::{SoundBundle, SoundCatalog};
use crate::components::{
    CadenceState, CooldownState, KinematicSample, MovementEdge, MovementType,
};
use crate::config::FootstepConfig;
use crate::curves::CurveSet;
use crate::events::{EventListener, FootstepEvent};
use crate::playback::AudioOutput;
use crate::surface::{ProbeRequest, SurfaceProbe, SurfaceTracker};
use crate::systems::{cadence, movement};

/// Движок звуков шагов персонажа
pub struct FootstepEngine {
    config: FootstepConfig,
    catalog: SoundCatalog,
    curves: CurveSet,

    // Состояния подсистем
    movement_type: MovementType,
    cadence: CadenceState,
    surface: SurfaceTracker,
    cooldown: CooldownState,
    speed: f32,
    position: Vec3,

    // Внешние коллабораторы, привязываются один раз при подключении
    probe: Option<SurfaceProbe>,
    output: Option<Box<dyn AudioOutput>>,
    listeners: Vec<EventListener>,
}

impl FootstepEngine {
    pub fn new(config: FootstepConfig, catalog: SoundCatalog, curves: CurveSet) -> Self {
        let initial_step = config.fallback_step_distance;
        let resample_interval = config.surface_resample_interval;

        Self {
            config,
            catalog,
            curves,
            movement_type: MovementType::Stopped,
            cadence: CadenceState::new(initial_step),
            surface: SurfaceTracker::new(resample_interval),
            cooldown: CooldownState::new(),
            speed: 0.0,
            position: Vec3::zero(),
            probe: None,
            output: None,
            listeners: Vec::new(),
        }
    }

    /// Привязать функцию запроса поверхности
    pub fn set_surface_probe<F>(&mut self, probe: F)
    where
        F: Fn(&ProbeRequest) -> Option<String> + Send + Sync + 'static,
    {
        self.probe = Some(Box::new(probe));
    }

    /// Привязать аудио выход
    pub fn set_audio_output<O>(&mut self, output: O)
    where
        O: AudioOutput + 'static,
    {
        self.output = Some(Box::new(output));
    }

    /// Подписаться на события движка
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(FootstepEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Текущий тип движения (для отладки)
    pub fn movement_type(&self) -> MovementType {
        self.movement_type
    }

    /// Текущая поверхность под ногами (для отладки)
    pub fn current_surface(&self) -> Option<&str> {
        self.surface.current()
    }

    /// Обновить движок (вызывать каждый кадр)
    pub fn update(&mut self, dt: f32, sample: &KinematicSample) {
        self.speed = sample.speed;
        self.position = sample.position;

        // Поверхность под ногами, не чаще интервала троттлинга
        let request = self.probe_request();
        self.surface
            .maybe_resample(&request, sample.speed, dt, self.probe.as_ref());

        // Классификация движения и переходы. Обработчик перехода видит
        // ещё старый тип движения, как и громкость шага в нём.
        let new_type = movement::classify(sample.on_ground, sample.speed, sample.crouching);
        if let Some(edge) = movement::detect_edge(self.movement_type, new_type) {
            self.handle_edge(edge);
        }
        self.movement_type = new_type;

        // Накопитель дистанции между шагами
        let stepped = cadence::advance(
            &mut self.cadence,
            sample.position,
            new_type.is_moving(),
            sample.speed,
            self.curves.interval_by_speed.as_ref(),
            self.config.fallback_step_distance,
        );
        if stepped {
            let volume = self.footstep_volume();
            self.play_footstep_clip(volume);
        }

        // Кулдаун продвигается после всех попыток воспроизведения
        self.cooldown.time_since_last_footstep += dt;
    }

    /// Зарегистрировать прыжок. Прыжок не выводится из кинематики,
    /// это явный внешний сигнал вне тикового конвейера.
    pub fn register_jump(&mut self) {
        self.emit(FootstepEvent::Jumped);
        if let Some(clip) = self.pick_bundle().map(|b| b.jump.clone()) {
            self.play_clip(clip, 1.0);
        }
    }

    // Уведомление о переходе уходит подписчикам независимо от того,
    // сыграл ли звук.
    fn handle_edge(&mut self, edge: MovementEdge) {
        match edge {
            MovementEdge::Landed => {
                // Поверхность приземления должна быть свежей, не из кэша
                let request = self.probe_request();
                self.surface.force_resample(&request, self.probe.as_ref());

                self.emit(FootstepEvent::Landed);
                let volume = self.landing_volume();
                if let Some(clip) = self.pick_bundle().map(|b| b.land.clone()) {
                    self.play_clip(clip, volume);
                }
            }
            MovementEdge::StoppedMoving => {
                self.emit(FootstepEvent::StoppedMoving);
                let volume = self.footstep_volume();
                self.play_footstep_clip(volume);
            }
            MovementEdge::StartedMoving => {
                self.emit(FootstepEvent::StartedMoving);
                let volume = self.footstep_volume();
                self.play_footstep_clip(volume);
            }
        }
    }

    /// Выбрать набор звуков для текущей поверхности
    fn pick_bundle(&self) -> Option<&SoundBundle> {
        let surface = match self.surface.current() {
            Some(surface) => surface,
            None => {
                log::warn!("Surface under the character is not known yet.");
                return None;
            }
        };

        match self.catalog.get(surface) {
            Some(bundle) => Some(bundle),
            None => {
                log::warn!("Sound sets do not contain an entry for '{}'.", surface);
                None
            }
        }
    }

    fn play_footstep_clip(&mut self, volume: f64) {
        if let Some(clip) = self.pick_bundle().map(|b| b.footstep.clone()) {
            self.play_clip(clip, volume);
        }
    }

    /// Общий гейт воспроизведения: шаги, прыжки и приземления делят
    /// один таймер. Звук внутри минимального интервала отменяется.
    fn play_clip(&mut self, clip: Option<String>, volume: f64) {
        let clip = match clip {
            Some(clip) => clip,
            None => {
                log::warn!("Sound not valid.");
                return;
            }
        };

        if self.cooldown.time_since_last_footstep < self.config.minimum_sound_interval {
            return;
        }

        if let Some(ref mut output) = self.output {
            output.play(&clip, self.position, volume);
            self.cooldown.time_since_last_footstep = 0.0;
            self.emit(FootstepEvent::FootstepPlayed);
        }
    }

    /// Громкость шага: множитель приседа и кривая от скорости
    fn footstep_volume(&self) -> f64 {
        let mut volume = if self.movement_type == MovementType::Walking {
            1.0
        } else {
            self.config.crouch_volume_multiplier
        };

        if let Some(ref curve) = self.curves.volume_by_speed {
            volume *= curve.evaluate(self.speed);
        } else {
            log::warn!("Volume speed curve is not set.");
        }

        volume as f64
    }

    /// Громкость приземления от скорости, 1.0 если кривая не задана
    fn landing_volume(&self) -> f64 {
        match self.curves.landing_volume_by_speed {
            Some(ref curve) => curve.evaluate(self.speed) as f64,
            None => 1.0,
        }
    }

    fn emit(&mut self, event: FootstepEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    // Луч вертикально вниз от позиции персонажа
    fn probe_request(&self) -> ProbeRequest {
        let depth = self.config.capsule_half_height + self.config.ground_probe_margin;
        ProbeRequest {
            origin: self.position,
            end: self.position - Vec3::new(0.0, depth, 0.0),
            channel: self.config.surface_probe_channel,
        }
    }
}
