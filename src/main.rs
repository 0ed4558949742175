//! Pillar Range entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use pillar_range::consts::*;
    use pillar_range::renderer::{DrawList, RenderState};
    use pillar_range::{FrameInput, Game, Settings};

    // JS binding for pointer lock
    #[wasm_bindgen(inline_js = "
        export function request_pointer_lock() {
            const canvas = document.getElementById('canvas');
            if (canvas) {
                const result = canvas.requestPointerLock();
                if (result && result.then) {
                    result.catch(e => console.error('Pointer lock failed:', e));
                }
            }
        }
    ")]
    extern "C" {
        fn request_pointer_lock();
    }

    /// Held movement keys
    #[derive(Default)]
    struct MoveKeys {
        forward: bool,
        back: bool,
        left: bool,
        right: bool,
    }

    impl MoveKeys {
        fn axis(&self) -> Vec2 {
            let x = self.right as i32 - self.left as i32;
            let y = self.forward as i32 - self.back as i32;
            Vec2::new(x as f32, y as f32)
        }

        /// Returns false for keys that aren't movement keys
        fn set(&mut self, key: &str, down: bool) -> bool {
            match key {
                "w" | "W" | "ArrowUp" => self.forward = down,
                "s" | "S" | "ArrowDown" => self.back = down,
                "a" | "A" | "ArrowLeft" => self.left = down,
                "d" | "D" | "ArrowRight" => self.right = down,
                _ => return false,
            }
            true
        }
    }

    struct App {
        game: Game,
        settings: Settings,
        render_state: Option<RenderState>,
        draw_list: DrawList,
        input: FrameInput,
        keys: MoveKeys,
        last_time: f64,
        pointer_locked: bool,
    }

    impl App {
        fn new(settings: Settings) -> Self {
            Self {
                game: Game::from_settings(&settings),
                settings,
                render_state: None,
                draw_list: DrawList::new(),
                input: FrameInput::default(),
                keys: MoveKeys::default(),
                last_time: 0.0,
                pointer_locked: false,
            }
        }

        /// Step the simulation with this frame's input
        fn update(&mut self, dt: f32) {
            self.input.look.movement = self.keys.axis();
            self.game.frame(&self.input, dt);

            // Mouse deltas accumulate between frames
            self.input.look.look_delta = Vec2::ZERO;
        }

        /// Render the current frame
        fn render(&mut self) {
            self.game.draw(&mut self.draw_list);

            if let Some(ref mut render_state) = self.render_state {
                let view_projection = self.game.camera.view_projection(render_state.aspect());
                match render_state.render(&self.draw_list, view_projection) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror HUD text into the DOM overlay
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(el) = document.get_element_by_id("hud-target") else {
                return;
            };

            if self.settings.show_hud {
                let text = self
                    .draw_list
                    .texts
                    .first()
                    .map(|item| item.text.as_str())
                    .unwrap_or_default();
                el.set_text_content(Some(text));
                let _ = el.set_attribute("class", "");
            } else {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow::anyhow!("Failed to init logger: {e}"))?;

        log::info!("Pillar Range starting...");

        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| anyhow::anyhow!("no canvas"))?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#canvas is not a canvas"))?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = match canvas.client_width() {
            0 => SCREEN_WIDTH as i32,
            w => w,
        };
        let client_h = match canvas.client_height() {
            0 => SCREEN_HEIGHT as i32,
            h => h,
        };
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::default();
        let app = Rc::new(RefCell::new(App::new(settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow::anyhow!("Failed to get adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Pillar Range running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Pointer lock change handler
        {
            let app = app.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let locked = doc.pointer_lock_element().is_some();
                if locked {
                    log::info!("Pointer lock ACQUIRED");
                } else {
                    log::warn!("Pointer lock RELEASED");
                }
                app.borrow_mut().pointer_locked = locked;
            });
            let _ = document.add_event_listener_with_callback(
                "pointerlockchange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Mouse look only while the pointer is captured
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.pointer_locked {
                    a.input.look.look_delta +=
                        Vec2::new(event.movement_x() as f32, event.movement_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Buttons: left fires while held, right resets aim while held
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                match event.button() {
                    0 => a.input.fire = true,
                    2 => a.input.reset_aim = true,
                    _ => {}
                }

                if !a.pointer_locked {
                    drop(a);
                    request_pointer_lock();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                match event.button() {
                    0 => a.input.fire = false,
                    2 => a.input.reset_aim = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keep the browser menu away from right-click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        for (kind, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                if a.keys.set(&event.key(), down) {
                    event.prevent_default();
                } else if down && a.settings.hud_key(&event.key(), event.repeat()) {
                    log::info!("HUD: {}", a.settings.show_hud);
                }
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                1.0 / SCREEN_FPS as f32
            };
            a.last_time = time;

            a.update(dt);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Pillar Range failed to start: {e:#}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pillar Range (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless::run(HEADLESS_SECONDS);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Seconds of simulated play in the native build
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: u32 = 8;

/// Scripted session: sweep the aim while firing, then watch the shots expire
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use pillar_range::consts::*;
    use pillar_range::renderer::DrawList;
    use pillar_range::sim::LookInput;
    use pillar_range::{FrameInput, Game, Settings};

    /// Seconds the trigger is held
    const FIRE_SECONDS: u32 = 2;
    /// Pixels of simulated mouse movement per frame
    const SWEEP_PIXELS: f32 = 4.0;

    pub fn run(seconds: u32) {
        let settings = Settings::default();
        let mut game = Game::from_settings(&settings);
        let mut draw_list = DrawList::new();
        let dt = 1.0 / SCREEN_FPS as f32;

        for frame in 0..seconds * SCREEN_FPS {
            let input = FrameInput {
                fire: frame < FIRE_SECONDS * SCREEN_FPS,
                reset_aim: false,
                look: LookInput {
                    look_delta: Vec2::new(SWEEP_PIXELS, 0.0),
                    movement: Vec2::ZERO,
                },
            };
            game.frame(&input, dt);
            game.draw(&mut draw_list);

            if frame % SCREEN_FPS == 0 {
                log::info!(
                    "t={}s projectiles={} cubes={}",
                    frame / SCREEN_FPS,
                    game.projectiles.len(),
                    draw_list.cube_count
                );
            }
        }

        for item in &draw_list.texts {
            log::info!("{}", item.text);
        }
        log::info!(
            "Done after {} frames, {} projectiles still in flight",
            game.frame_count,
            game.projectiles.len()
        );
    }
}
