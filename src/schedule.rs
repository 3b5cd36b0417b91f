use serde::{Deserialize, Serialize};

/// Multiplicative epsilon decay with a floor, applied once per completed
/// training episode: `eps <- max(end, decay * eps)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpsilonSchedule {
    start: f32,
    end: f32,
    decay: f32,
    current: f32,
}

impl EpsilonSchedule {
    pub fn new(start: f32, end: f32, decay: f32) -> Self {
        Self {
            start,
            end,
            decay,
            current: start,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    /// Decay one episode's worth and return the new value.
    pub fn advance(&mut self) -> f32 {
        self.current = self.end.max(self.decay * self.current);
        self.current
    }

    pub fn reset(&mut self) {
        self.current = self.start;
    }
}
