//! The outer render loop.
//!
//! Each call to [`App::run_frame`] is one iteration:
//!
//! 1. drain window events (exit ends the loop before anything else happens)
//! 2. read real time and the input snapshot
//! 3. run zero or more fixed-step scene updates
//! 4. render into the active frame, present it, flip the active frame
//! 5. sleep away what is left of the frame budget
//!
//! The window, input, clock and presentation are reached through the
//! [`Platform`] trait so the loop can run against a scripted platform.

use crate::capture;
use crate::colors::PackedColor;
use crate::config::{Config, FRAME_HEIGHT, FRAME_WIDTH};
use crate::error::Result;
use crate::input::InputState;
use crate::render::Vram;
use crate::scene::Scene;
use crate::time::{Clock, FixedStep, FpsCounter, FrameLimiter};
use crate::window::WindowEvent;

/// Everything the loop needs from the outside world.
pub trait Platform: Clock {
    /// Drains pending events without blocking.
    fn poll_events(&mut self) -> WindowEvent;

    /// Current input, mouse position in frame coordinates.
    fn input_state(&mut self) -> InputState;

    /// Shows a finished frame (row-major, `FRAME_WIDTH x FRAME_HEIGHT`).
    fn present(&mut self, frame: &[PackedColor]) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

pub struct App {
    config: Config,
    vram: Vram,
    scene: Scene,
    input: InputState,
    stepper: FixedStep,
    limiter: FrameLimiter,
    fps: FpsCounter,
    frame_count: u64,
    capture_requested: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            stepper: FixedStep::new(config.step_ms, config.max_updates),
            limiter: FrameLimiter::new(config.step_ms),
            config,
            vram: Vram::new(),
            scene: Scene::new(),
            input: InputState::default(),
            fps: FpsCounter::new(),
            frame_count: 0,
            capture_requested: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn vram(&self) -> &Vram {
        &self.vram
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn stepper(&self) -> &FixedStep {
        &self.stepper
    }

    /// Number of frames presented so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Runs frames until the platform reports an exit.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<()> {
        while self.run_frame(platform)? == FrameOutcome::Continue {}
        log::info!("exiting after {} frames", self.frame_count);
        Ok(())
    }

    pub fn run_frame<P: Platform>(&mut self, platform: &mut P) -> Result<FrameOutcome> {
        match platform.poll_events() {
            WindowEvent::Quit => return Ok(FrameOutcome::Exit),
            WindowEvent::Capture => self.capture_requested = true,
            WindowEvent::None => {}
        }

        let real_time = platform.now_ms();
        self.input = platform.input_state();

        let input = self.input;
        let scene = &mut self.scene;
        self.stepper.advance(real_time, |_dt| scene.update(&input));

        let index = self.vram.active_index();
        self.scene.render(&mut self.vram.frame_mut(index));
        platform.present(self.vram.frame(index))?;
        if std::mem::take(&mut self.capture_requested) {
            self.capture(index);
        }
        self.vram.swap();
        self.frame_count += 1;

        if let Some(fps) = self.fps.frame(real_time) {
            log::debug!("{:.1} fps", fps);
            platform.set_title(&format!("{} - {:.0} FPS", self.config.title, fps))?;
        }

        let elapsed = platform.now_ms() - real_time;
        if let Some(wait) = self.limiter.remaining(elapsed) {
            platform.sleep_ms(wait);
        }

        Ok(FrameOutcome::Continue)
    }

    fn capture(&self, index: usize) {
        let path = capture::capture_path(&self.config.capture_dir, self.frame_count);
        match capture::save_png(self.vram.frame(index), FRAME_WIDTH, FRAME_HEIGHT, &path) {
            Ok(()) => log::info!("saved capture to {}", path.display()),
            Err(err) => log::warn!("{}: {}", path.display(), err),
        }
    }
}
