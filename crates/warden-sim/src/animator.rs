//! Cross-fade bookkeeping for a character's animation.
//!
//! Playback itself happens elsewhere; this component only tracks which clip
//! is active and how far the blend into it has progressed.

use warden_fsm::AnimationTrigger;

/// ECS component.
#[derive(Debug, Clone, Default)]
pub struct CrossFadeAnimator {
    clip: String,
    previous: Option<String>,
    blend_secs: f64,
    elapsed_secs: f64,
    fades: u64,
}

impl CrossFadeAnimator {
    pub fn clip(&self) -> &str {
        &self.clip
    }

    /// Clip being faded out, until the blend completes.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn blend_secs(&self) -> f64 {
        self.blend_secs
    }

    /// Blend weight of the current clip in `[0, 1]`.
    pub fn blend(&self) -> f64 {
        if self.blend_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed_secs / self.blend_secs).min(1.0)
    }

    pub fn fades(&self) -> u64 {
        self.fades
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed_secs += dt;
        if self.blend() >= 1.0 {
            self.previous = None;
        }
    }
}

impl AnimationTrigger for CrossFadeAnimator {
    fn cross_fade(&mut self, clip: &str, blend_secs: f64) {
        let outgoing = std::mem::replace(&mut self.clip, clip.to_string());
        self.previous = (!outgoing.is_empty()).then_some(outgoing);
        self.blend_secs = blend_secs;
        self.elapsed_secs = 0.0;
        self.fades += 1;
    }
}
