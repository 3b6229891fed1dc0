//! Lane Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use lane_rush::audio::{AudioManager, SoundEffect};
    use lane_rush::consts::*;
    use lane_rush::highscores::HighScores;
    use lane_rush::renderer::{RenderState, scene};
    use lane_rush::settings::Settings;
    use lane_rush::sim::{GameEvent, GamePhase, GameState, Lane, key_pressed, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: AudioManager,
        highscores: HighScores,
        settings: Settings,
        /// Milliseconds of wall-clock time not yet consumed by ticks
        accumulator: f64,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);
            audio.set_music_volume(settings.music_volume);

            Self {
                state: GameState::new(seed),
                render_state: None,
                audio,
                highscores: HighScores::new(),
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// React to one key press, immediately rather than at the next
        /// tick boundary
        fn key_down(&mut self, key: &str) {
            let steer = match key {
                "ArrowLeft" | "a" | "A" => Some(Lane::Left),
                "ArrowRight" | "d" | "D" => Some(Lane::Right),
                _ => None,
            };
            let events = key_pressed(&mut self.state, steer);
            self.dispatch(&events);
        }

        /// Run pending simulation ticks
        ///
        /// The tick cadence is fixed at TICK_PERIOD_MS; rendering happens
        /// once per frame regardless of how many ticks (zero included)
        /// fired since the last one.
        fn update(&mut self, dt_ms: f64, time: f64) {
            // Clamp long stalls (tab switch) so we don't tick-storm
            self.accumulator += dt_ms.min(100.0);

            let mut ticks = 0;
            while self.accumulator >= TICK_PERIOD_MS && ticks < MAX_TICKS_PER_FRAME {
                let events = tick(&mut self.state);
                self.dispatch(&events);
                self.accumulator -= TICK_PERIOD_MS;
                ticks += 1;
            }
            if ticks == MAX_TICKS_PER_FRAME {
                // Shed the backlog instead of fast-forwarding the game
                self.accumulator = 0.0;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Map simulation events to audio and leaderboard side effects
        fn dispatch(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::Started => {
                        self.audio.resume();
                        self.audio.start_music();
                    }
                    GameEvent::LaneChanged => self.audio.play(SoundEffect::LaneChange),
                    GameEvent::Wrapped => {}
                    GameEvent::Crashed { new_record } => {
                        self.audio.stop_music();
                        self.audio.play(SoundEffect::Crash);
                        if *new_record {
                            self.audio.play(SoundEffect::HighScore);
                        }
                        if let Some(rank) =
                            self.highscores.add_score(self.state.score, self.state.passes)
                        {
                            log::info!("Run entered the leaderboard at rank {}", rank);
                        }
                    }
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Update score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Update best score
            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.highest_score.to_string()));
            }

            // Update FPS
            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    el.set_text_content(Some(""));
                }
            }

            // Show/hide the start prompt
            if let Some(el) = document.get_element_by_id("start-prompt") {
                if self.state.phase == GamePhase::Stopped {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Set up mute on focus loss
        setup_blur_mute(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Lane Rush running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            // Held keys repeat; only the first press counts
            if event.repeat() {
                return;
            }
            game.borrow_mut().key_down(&event.key());
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_blur_mute(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                TICK_PERIOD_MS
            };
            g.last_time = time;

            g.update(dt_ms, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Rush (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nRunning headless simulation check...");
    headless_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_check() {
    use lane_rush::sim::{GamePhase, GameState, Lane, key_pressed, tick};

    let mut state = GameState::new(0xC0FFEE);
    key_pressed(&mut state, Some(Lane::Right));
    assert_eq!(state.phase, GamePhase::Running);

    let mut ticks = 0u64;
    while state.phase == GamePhase::Running && ticks < 100_000 {
        tick(&mut state);
        ticks += 1;
    }

    assert_eq!(state.phase, GamePhase::Stopped);
    println!(
        "✓ Session ended after {} ticks: score {}, passes {}, best {}",
        ticks, state.score, state.passes, state.highest_score
    );
}
