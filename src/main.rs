//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use brick_breaker::input::client_to_playfield_x;
    use brick_breaker::renderer::{RenderState, TextDraw, VertexBatch};
    use brick_breaker::sim::GameEvent;
    use brick_breaker::{Game, GameConfig};

    /// Browser-side state around the game
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        batch: VertexBatch,
        document: Document,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Pointer client x to playfield pixels
        fn pointer_x(&self, client_x: f32) -> f32 {
            let rect = self.canvas.get_bounding_client_rect();
            client_to_playfield_x(
                client_x,
                rect.left() as f32,
                rect.width() as f32,
                &self.game.config,
            )
        }

        /// Push the batch to the GPU and the text to the overlay
        fn present(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
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
            self.show_message(self.batch.texts.first());
        }

        fn show_message(&self, text: Option<&TextDraw>) {
            let Some(el) = self.document.get_element_by_id("message") else {
                return;
            };
            match text {
                Some(text) => {
                    el.set_text_content(Some(&text.style.text));
                    let style = format!(
                        "color: {}; font: {}; text-align: center;",
                        text.style.color, text.style.font
                    );
                    let _ = el.set_attribute("style", &style);
                    let _ = el.set_attribute("class", "");
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Feed score/lives text sinks from pending events
        fn update_hud(&mut self) {
            for event in self.game.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => set_text(&self.document, "score", score),
                    GameEvent::LivesChanged(lives) => set_text(&self.document, "lives", lives),
                    GameEvent::Started { new_game } => {
                        log::info!("Started (new game: {})", new_game)
                    }
                    _ => {}
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, value: u32) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    /// Optional JSON config embedded in the page
    fn load_config(document: &Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        else {
            return GameConfig::default();
        };

        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from page");
                config
            }
            Err(e) => {
                log::warn!("Ignoring page config: {}", e);
                GameConfig::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = load_config(&document);
        let (pf_w, pf_h) = (config.playfield.width, config.playfield.height);

        // Backing store at device resolution, laid out at playfield size
        let dpr = window.device_pixel_ratio();
        let width = (pf_w as f64 * dpr) as u32;
        let height = (pf_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", pf_w));
        let _ = style.set_property("height", &format!("{}px", pf_h));

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(config, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Invalid config: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("No suitable GPU adapter: {}", e);
                return;
            }
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            match RenderState::new(surface, &adapter, width, height, (pf_w, pf_h)).await {
                Ok(render_state) => Some(render_state),
                Err(e) => {
                    log::error!("Failed to create device: {}", e);
                    None
                }
            };

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            batch: VertexBatch::new(),
            document: document.clone(),
            canvas,
        }));

        // Start screen
        {
            let mut a = app.borrow_mut();
            let a = &mut *a;
            a.game.redraw(&mut a.batch);
            a.present();
            set_text(&a.document, "score", a.game.state.score);
            set_text(&a.document, "lives", a.game.state.lives);
        }

        setup_input_handlers(&document, app.clone());
        setup_start_button(&document, app);

        log::info!("Brick Breaker ready");
    }

    fn setup_input_handlers(document: &Document, app: Rc<RefCell<App>>) {
        // Mouse move, anywhere on the page
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let x = a.pointer_x(event.client_x() as f32);
                a.game.pointer(x);
            });
            let _ = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    let x = a.pointer_x(touch.client_x() as f32);
                    if a.game.pointer(x) {
                        event.prevent_default();
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_button(document: &Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("startButton") else {
            log::warn!("No #startButton on the page");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let started = {
                let mut a = app.borrow_mut();
                let started = a.game.start();
                a.update_hud();
                started
            };
            // Already running: the loop is live, nothing to schedule
            if started {
                request_animation_frame(app.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let running = {
            let mut a = app.borrow_mut();
            let a = &mut *a;
            let result = a.game.frame(&mut a.batch);
            a.present();
            a.update_hud();
            result.running
        };

        if running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::renderer::VertexBatch;
    use brick_breaker::sim::{GameEvent, Outcome};
    use brick_breaker::{Autopilot, Game, GameConfig};

    /// Stop a demo that settles into an endless rally
    const MAX_TICKS: u64 = 200_000;

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot game - use `trunk serve` for the web version");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let (config, err) = GameConfig::load_or_default(&path);
            if let Some(e) = err {
                log::warn!("Using default config, could not load {}: {}", path, e);
            }
            config
        }
        None => GameConfig::default(),
    };
    let seed = std::env::var("BRICK_BREAKER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);

    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let pilot = Autopilot::default();
    let mut batch = VertexBatch::new();
    game.start();

    let mut result = None;
    while game.state.time_ticks < MAX_TICKS {
        pilot.steer(&mut game);
        let frame = game.frame(&mut batch);
        for event in game.drain_events() {
            match event {
                GameEvent::BrickDestroyed { col, row } => {
                    log::debug!("tick {}: brick ({}, {})", game.state.time_ticks, col, row)
                }
                GameEvent::BallLost => log::info!("Ball lost, {} lives left", game.state.lives),
                _ => {}
            }
        }
        if !frame.running {
            result = frame.outcome;
            break;
        }
    }

    let verdict = match result {
        Some(Outcome::Won) => "won",
        Some(Outcome::Lost) => "lost",
        None => "stopped at tick cap",
    };
    println!(
        "Seed {}: {} after {} ticks (score {}, lives {})",
        seed, verdict, game.state.time_ticks, game.state.score, game.state.lives
    );
    if let Ok(json) = serde_json::to_string(&game.state) {
        log::debug!("Final state: {}", json);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
