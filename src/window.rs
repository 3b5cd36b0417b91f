use std::collections::VecDeque;

/// Rolling window over the most recent episode scores. The stopping rule
/// averages over whatever the window currently holds, which may be fewer
/// than the capacity early in a run.
#[derive(Debug, Clone)]
pub struct ScoreWindow {
    cap: usize,
    scores: VecDeque<f32>,
}

impl ScoreWindow {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            cap,
            scores: VecDeque::with_capacity(cap),
        }
    }

    pub fn push(&mut self, score: f32) {
        if self.scores.len() == self.cap {
            self.scores.pop_front();
        }
        self.scores.push_back(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.scores.len() == self.cap
    }

    /// Mean over the window's current contents. `None` while empty.
    pub fn mean(&self) -> Option<f32> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f32>() / self.scores.len() as f32)
    }
}
