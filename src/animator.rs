//! Per-frame parameter animation and rendering.
//!
//! [`PlotAnimator`] owns the slider targets, the lagged copy that is actually
//! drawn, and the play state. The host calls [`PlotAnimator::render_frame`]
//! once per display refresh while playing and on demand otherwise.

use crate::config::PlotConfig;
use crate::error::InputError;
use crate::mapper::{Mapper, XRange};
use crate::params::{AnimationMode, ParamId, Params};
use crate::plot::{draw_frame, Overlay};
use crate::surface::Surface;

/// Phase advance of mode C, radians per second at speed 1.
const PHASE_RATE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayState {
    Stopped,
    /// `origin` is the clock reading (seconds) when play started.
    Playing { origin: f64 },
}

/// Snapshot of the controls read at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    /// Raw x-range field values; may be NaN.
    pub x_min: f64,
    pub x_max: f64,
    pub overlay: Overlay,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            x_min: XRange::DEFAULT.min,
            x_max: XRange::DEFAULT.max,
            overlay: Overlay::default(),
        }
    }
}

/// What a frame ended up using.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub x_range: XRange,
    /// The x-range fields held an empty or inverted range and must be
    /// rewritten with `x_range`.
    pub x_range_reset: bool,
    pub mapper: Mapper,
    pub animated: Params,
    pub caption: String,
}

#[derive(Debug, Clone)]
pub struct PlotAnimator {
    config: PlotConfig,
    target: Params,
    animated: Params,
    mode: AnimationMode,
    speed: f64,
    state: PlayState,
    last_frame: f64,
    /// Phase travelled by mode C since it began driving; zero otherwise.
    phase_offset: f64,
}

impl Default for PlotAnimator {
    fn default() -> Self {
        Self::new(PlotConfig::default())
    }
}

impl PlotAnimator {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            target: Params::DEFAULT,
            animated: Params::DEFAULT,
            mode: AnimationMode::default(),
            speed: 1.0,
            state: PlayState::Stopped,
            last_frame: 0.0,
            phase_offset: 0.0,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn targets(&self) -> Params {
        self.target
    }

    pub fn animated(&self) -> Params {
        self.animated
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn play_state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlayState::Playing { .. })
    }

    /// Set one target. A non-finite value is rejected and the previous
    /// target kept.
    pub fn set_target(&mut self, id: ParamId, value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NonFinite { param: id, value });
        }
        *self.target.get_mut(id) = value;
        Ok(())
    }

    /// Overwrite all targets. Finite components are applied even when
    /// another one is rejected; the first rejection is returned.
    pub fn set_targets(&mut self, params: Params) -> Result<(), InputError> {
        let mut first_err = None;
        for id in ParamId::ALL {
            if let Err(e) = self.set_target(id, params.get(id)) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Enter `playing`, restarting the animation clock at `now`. Returns
    /// `false` if already playing.
    pub fn start(&mut self, now: f64) -> bool {
        if self.is_playing() {
            return false;
        }
        self.state = PlayState::Playing { origin: now };
        self.last_frame = now;
        log::debug!("play: mode {} at {}x", self.mode.as_str(), self.speed);
        true
    }

    /// Leave `playing`. Returns `false` if already stopped.
    pub fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state = PlayState::Stopped;
        log::debug!("pause");
        true
    }

    pub fn set_playing(&mut self, playing: bool, now: f64) -> bool {
        if playing {
            self.start(now)
        } else {
            self.pause()
        }
    }

    /// Flip between playing and stopped.
    pub fn toggle(&mut self, now: f64) {
        if self.is_playing() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Takes effect on the next frame. The previously driven parameter keeps
    /// its current animated value and smooths back from there.
    pub fn set_animation_mode(&mut self, mode: AnimationMode) {
        if mode != self.mode {
            log::debug!("animation mode {} -> {}", self.mode.as_str(), mode.as_str());
            self.mode = mode;
        }
    }

    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), InputError> {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(InputError::InvalidSpeed(multiplier));
        }
        self.speed = multiplier;
        log::debug!("speed {multiplier}x");
        Ok(())
    }

    /// Advance the animated parameters to `now` without drawing.
    ///
    /// Every parameter is smoothed toward its target. While mode C drives the
    /// phase, its goal is `target.c` plus the phase travelled so far, and the
    /// frame's `0.9·speed·Δt` is added on top, so slider changes still ease in
    /// while the wave keeps travelling.
    pub fn step(&mut self, now: f64) {
        let driven = match self.state {
            PlayState::Playing { origin } => self.mode.param().map(|id| (id, now - origin)),
            PlayState::Stopped => None,
        };

        // Once C stops being driven it eases back toward its bare target.
        if !matches!(driven, Some((ParamId::C, _))) {
            self.phase_offset = 0.0;
        }
        let mut goal = self.target;
        goal.c += self.phase_offset;
        self.animated.smooth_toward(&goal, self.config.smoothing);

        if let Some((id, t)) = driven {
            let s = self.speed;
            let target = &self.target;
            match id {
                ParamId::A => {
                    self.animated.a = target.a * (0.5 + 0.6 * (1.2 * s * t).sin().abs());
                }
                ParamId::B => {
                    self.animated.b = target.b * (0.6 + 0.8 * (0.8 * s * t).sin().abs());
                }
                ParamId::C => {
                    let advance = PHASE_RATE * s * (now - self.last_frame).max(0.0);
                    self.animated.c += advance;
                    self.phase_offset += advance;
                }
                ParamId::D => {
                    self.animated.d = target.d + 0.8 * (0.9 * s * t).sin();
                }
            }
        }

        self.animated.b = self.animated.b.clamp(self.config.b_min, self.config.b_max);
        self.last_frame = now;
    }

    /// Advance to `now` and draw one frame.
    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        now: f64,
        inputs: &Inputs,
        surface: &mut S,
    ) -> FrameReport {
        self.step(now);

        let (x_range, x_range_reset) =
            XRange::resolve(inputs.x_min, inputs.x_max, self.config.default_x_range);
        if x_range_reset {
            log::debug!(
                "x-range [{}, {}] is empty, using [{}, {}]",
                inputs.x_min,
                inputs.x_max,
                x_range.min,
                x_range.max
            );
        }

        let (width, height) = surface.size();
        let mapper = Mapper::new(x_range, width, height, self.config.padding, &self.target);
        let caption = draw_frame(surface, &mapper, &self.animated, inputs.overlay, &self.config);

        FrameReport {
            x_range,
            x_range_reset,
            mapper,
            animated: self.animated,
            caption,
        }
    }

    /// Stop, restore defaults, and draw once.
    pub fn reset<S: Surface + ?Sized>(
        &mut self,
        now: f64,
        inputs: &Inputs,
        surface: &mut S,
    ) -> FrameReport {
        self.pause();
        self.target = Params::DEFAULT;
        self.animated = Params::DEFAULT;
        self.mode = AnimationMode::default();
        self.speed = 1.0;
        self.last_frame = now;
        self.phase_offset = 0.0;
        log::debug!("reset");
        self.render_frame(now, inputs, surface)
    }
}
