// ============================================
// Speed Curves - Кривые от скорости
// ============================================
// Кусочно-линейные кривые: скорость -> громкость или интервал шага

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Точка кривой
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Скорость (x)
    pub speed: f32,
    /// Выходное значение (y)
    pub value: f32,
}

/// Кусочно-линейная кривая от скорости
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeedCurve {
    /// Точки кривой (отсортированы по speed)
    pub points: Vec<CurvePoint>,
}

impl SpeedCurve {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Кривая-константа
    pub fn constant(value: f32) -> Self {
        Self {
            points: vec![CurvePoint { speed: 0.0, value }],
        }
    }

    /// Добавить точку, точки держатся отсортированными
    pub fn add_point(&mut self, speed: f32, value: f32) {
        self.points.push(CurvePoint { speed, value });
        self.points.sort_by(|a, b| a.speed.total_cmp(&b.speed));
    }

    /// Вычислить значение кривой для скорости.
    /// За пределами крайних точек значение зажимается.
    pub fn evaluate(&self, speed: f32) -> f32 {
        if self.points.is_empty() {
            return speed;
        }
        if self.points.len() == 1 {
            return self.points[0].value;
        }

        let first = &self.points[0];
        let last = &self.points[self.points.len() - 1];
        if speed <= first.speed {
            return first.value;
        }
        if speed >= last.speed {
            return last.value;
        }

        for i in 0..self.points.len() - 1 {
            let p0 = &self.points[i];
            let p1 = &self.points[i + 1];
            if speed >= p0.speed && speed <= p1.speed {
                let t = (speed - p0.speed) / (p1.speed - p0.speed);
                return p0.value + t * (p1.value - p0.value);
            }
        }

        last.value
    }
}

/// Три кривые движка шагов, каждая может быть не задана
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurveSet {
    /// Громкость шага от скорости (0 - 1)
    #[serde(default)]
    pub volume_by_speed: Option<SpeedCurve>,

    /// Дистанция до следующего шага от скорости (юниты)
    #[serde(default)]
    pub interval_by_speed: Option<SpeedCurve>,

    /// Громкость приземления от скорости (0 - 1)
    #[serde(default)]
    pub landing_volume_by_speed: Option<SpeedCurve>,
}

impl CurveSet {
    /// Загрузить кривые из JSON строки
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse curves JSON: {}", e))
    }

    /// Загрузить кривые из файла
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read curves file: {}", e))?;
        Self::from_json(&content)
    }
}
