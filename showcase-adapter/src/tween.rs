/// Eases page scrolling for hosts that cannot scroll smoothly on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollTween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Scroll offset at `now_ms`. Exactly `to` once finished.
    pub fn offset_at(&self, now_ms: u64) -> u64 {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms)) as f64;
        let span = self.to as f64 - self.from as f64;
        let off = self.from as f64 + span * eased;
        if off <= 0.0 { 0 } else { off as u64 }
    }

    /// Starts a new tween from wherever this one is at `now_ms`.
    pub fn redirect(&self, now_ms: u64, to: u64, duration_ms: u64) -> Self {
        Self::new(self.offset_at(now_ms), to, now_ms, duration_ms, self.easing)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseOutQuad,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
