//! SDL2 window, input polling, presentation and timing.

use std::time::Duration;

use sdl2::controller::{Axis, Button, GameController};
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;
use sdl2::{EventPump, GameControllerSubsystem, TimerSubsystem};

use crate::app::Platform;
use crate::colors::PackedColor;
use crate::config::{Config, FRAME_HEIGHT, FRAME_WIDTH};
use crate::error::Result;
use crate::input::{scale_to_frame, InputState};
use crate::math::point::Point2D;
use crate::time::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    /// Save the next presented frame to disk.
    Capture,
}

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    texture: Texture<'static>,
    // Owns the renderer handle `texture` was created from.
    #[allow(dead_code)]
    texture_creator: Box<TextureCreator<WindowContext>>,
    event_pump: EventPump,
    timer_subsystem: TimerSubsystem,
    controller_subsystem: GameControllerSubsystem,
    controller: Option<GameController>,
}

impl Window {
    pub fn new(config: &Config) -> Result<Self> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;
        let controller_subsystem = sdl_context.game_controller()?;

        let (width, height) = config.window_size();
        let window = video_subsystem
            .window(&config.title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // texture is declared before texture_creator, so it is dropped first.
        let texture_creator_ref: &'static TextureCreator<WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::RGB555, FRAME_WIDTH, FRAME_HEIGHT)
            .map_err(|e| e.to_string())?;

        log::info!(
            "window {}x{}, frame {}x{}",
            width,
            height,
            FRAME_WIDTH,
            FRAME_HEIGHT
        );

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            controller_subsystem,
            controller: None,
        })
    }

    /// Drains all pending events. A quit request wins over everything else.
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        let events: Vec<Event> = self.event_pump.poll_iter().collect();
        for event in events {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::F12),
                    repeat: false,
                    ..
                } => result = WindowEvent::Capture,
                Event::ControllerDeviceAdded { which, .. } => self.attach_controller(which),
                Event::ControllerDeviceRemoved { which, .. } => self.detach_controller(which),
                _ => {}
            }
        }
        result
    }

    fn attach_controller(&mut self, index: u32) {
        if self.controller.is_some() {
            return;
        }
        match self.controller_subsystem.open(index) {
            Ok(controller) => {
                log::info!("controller attached: {}", controller.name());
                self.controller = Some(controller);
            }
            Err(err) => log::warn!("failed to open controller {}: {}", index, err),
        }
    }

    fn detach_controller(&mut self, instance_id: u32) {
        if self
            .controller
            .as_ref()
            .is_some_and(|c| c.instance_id() == instance_id)
        {
            log::info!("controller detached");
            self.controller = None;
        }
    }

    /// Snapshot of keyboard, mouse and controller state as of the last
    /// event drain.
    pub fn input_state(&self) -> InputState {
        let keys = self.event_pump.keyboard_state();
        let mouse = self.event_pump.mouse_state();
        let (surface_width, surface_height) = self.canvas.window().size();
        let pad = self.controller.as_ref();

        InputState {
            left_arrow: keys.is_scancode_pressed(Scancode::Left),
            right_arrow: keys.is_scancode_pressed(Scancode::Right),
            up_arrow: keys.is_scancode_pressed(Scancode::Up),
            down_arrow: keys.is_scancode_pressed(Scancode::Down),

            mouse_position: Point2D::new(
                scale_to_frame(mouse.x(), surface_width, FRAME_WIDTH),
                scale_to_frame(mouse.y(), surface_height, FRAME_HEIGHT),
            ),
            left_mouse_button: mouse.left(),
            right_mouse_button: mouse.right(),

            gamepad_a: pad.is_some_and(|c| c.button(Button::A)),
            gamepad_b: pad.is_some_and(|c| c.button(Button::B)),
            gamepad_lx: pad.map_or(0, |c| c.axis(Axis::LeftX)),
            gamepad_ly: pad.map_or(0, |c| c.axis(Axis::LeftY)),
        }
    }

    /// Uploads `frame` and stretches it over the whole window.
    pub fn present(&mut self, frame: &[PackedColor]) -> Result<()> {
        let bytes: &[u8] = bytemuck::cast_slice(frame);
        self.texture
            .update(None, bytes, FRAME_WIDTH as usize * std::mem::size_of::<PackedColor>())
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Clock for Window {
    /// Milliseconds from SDL's high-resolution performance counter.
    fn now_ms(&self) -> i64 {
        let counter = self.timer_subsystem.performance_counter() as u128;
        let frequency = self.timer_subsystem.performance_frequency() as u128;
        (counter * 1000 / frequency) as i64
    }

    fn sleep_ms(&mut self, ms: i64) {
        std::thread::sleep(Duration::from_millis(ms.max(0) as u64));
    }
}

impl Platform for Window {
    fn poll_events(&mut self) -> WindowEvent {
        Window::poll_events(self)
    }

    fn input_state(&mut self) -> InputState {
        Window::input_state(self)
    }

    fn present(&mut self, frame: &[PackedColor]) -> Result<()> {
        Window::present(self, frame)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        Window::set_title(self, title)
    }
}
