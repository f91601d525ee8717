//! Canvas Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

    use canvas_breakout::consts::FRAME_DT;
    use canvas_breakout::renderer::CanvasSurface;
    use canvas_breakout::{Game, GameEvent, PlatformError, Settings, Vector2};

    const CANVAS_ID: &str = "myCanvas";
    const GAME_OVER_ID: &str = "gameover";
    const UNSUPPORTED_MESSAGE: &str = "Sorry, your browser does not support the canvas element.";

    /// Game instance plus its drawing surface
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: f64,
        /// An animation frame is already requested
        frame_pending: bool,
    }

    thread_local! {
        static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Canvas Breakout starting...");

        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        let document = window.document().ok_or(PlatformError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| PlatformError::MissingElement(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| PlatformError::NotACanvas(CANVAS_ID.to_string()))?;

        // Capability check: older browsers expose the element without its API
        let supported =
            js_sys::Reflect::has(&canvas, &JsValue::from_str("getContext")).unwrap_or(false);
        if !supported {
            disable_board(&canvas);
            return Err(PlatformError::CanvasUnsupported);
        }

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(PlatformError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| PlatformError::ContextUnavailable)?;

        let settings = board_settings(&canvas);
        let surface = CanvasSurface::new(ctx, canvas.width(), canvas.height());
        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings),
            surface,
            last_time: 0.0,
            frame_pending: false,
        }));
        APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

        setup_pointer(&document, &canvas, app.clone());

        if document.ready_state() == "complete" {
            start(app);
        } else {
            setup_load(&window, app);
        }

        Ok(())
    }

    /// Page settings with the screen taken from the canvas itself
    fn board_settings(canvas: &HtmlCanvasElement) -> Settings {
        let mut settings = Settings::load().unwrap_or_else(|e| {
            log::warn!("Ignoring page settings: {}", e);
            Settings::default()
        });
        settings.screen = Vector2::new(canvas.width() as f32, canvas.height() as f32);

        if let Err(e) = settings.validate() {
            log::warn!("Canvas does not fit the game ({}), resizing to defaults", e);
            settings = Settings::default();
            canvas.set_width(settings.screen.x as u32);
            canvas.set_height(settings.screen.y as u32);
        }
        log::info!("Board is {}x{}", settings.screen.x, settings.screen.y);
        settings
    }

    fn disable_board(canvas: &HtmlCanvasElement) {
        canvas.set_text_content(Some(UNSUPPORTED_MESSAGE));
        let _ = canvas.set_attribute("class", "disabled");
        log::error!("{}", UNSUPPORTED_MESSAGE);
    }

    fn setup_pointer(document: &Document, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // Page coordinates to board coordinates
            let x = event.client_x() as f32 - canvas.offset_left() as f32;
            let y = event.client_y() as f32 - canvas.offset_top() as f32;
            app.borrow_mut().game.set_pointer(Vector2::new(x, y));
        });
        let _ = document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_load(window: &Window, app: Rc<RefCell<App>>) {
        let closure = Closure::once(move |_event: web_sys::Event| {
            start(app);
        });
        let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start(app: Rc<RefCell<App>>) {
        let schedule = {
            let mut a = app.borrow_mut();
            a.game.start() && !a.frame_pending
        };
        if schedule {
            request_animation_frame(app);
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule frames on");
            return;
        };
        app.borrow_mut().frame_pending = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let (running, events) = {
            let mut guard = app.borrow_mut();
            let App {
                game,
                surface,
                last_time,
                frame_pending,
            } = &mut *guard;
            *frame_pending = false;

            // Calculate delta time
            let dt = if *last_time > 0.0 {
                ((time - *last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            *last_time = time;

            let running = game.tick(dt, surface);
            (running, game.take_events())
        };

        for event in events {
            if event == GameEvent::GameOver {
                show_game_over();
            }
        }

        if running {
            request_animation_frame(app);
        }
    }

    /// Swap the board for the end-of-game notice
    fn show_game_over() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(canvas) = document.get_element_by_id(CANVAS_ID) {
            let _ = canvas.set_attribute("class", "hidden");
        }
        match document.get_element_by_id(GAME_OVER_ID) {
            Some(notice) => {
                let _ = notice.set_attribute("class", "");
            }
            None => log::warn!("No #{} element to show", GAME_OVER_ID),
        }
    }

    /// Start (or resume) the game from page script. Refused once the ball is lost.
    #[wasm_bindgen]
    pub fn start_game() {
        if let Some(app) = APP.with(|slot| slot.borrow().clone()) {
            start(app);
        }
    }

    /// Stop the game from page script
    #[wasm_bindgen]
    pub fn stop_game() {
        if let Some(app) = APP.with(|slot| slot.borrow().clone()) {
            app.borrow_mut().game.stop();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Breakout failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Breakout (native) starting...");
    log::info!("Native mode runs a headless autopilot session - build for wasm32 to play");

    let settings = canvas_breakout::Settings::load().unwrap_or_else(|e| {
        log::warn!("Ignoring settings: {}", e);
        canvas_breakout::Settings::default()
    });
    headless::run(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_breakout::consts::{CIRCLE_SEGMENTS, FRAME_DT};
    use canvas_breakout::renderer::{DrawList, Vertex};
    use canvas_breakout::{Game, GameEvent, Settings, Vector2};

    /// Upper bound on frames for one session
    const FRAME_LIMIT: u64 = 20_000;

    pub fn run(settings: Settings) {
        let mut game = Game::new(settings);
        let mut frame = DrawList::default();
        let mut lost = false;

        game.start();
        while game.stats().frames < FRAME_LIMIT {
            game.set_pointer(autopilot(&game));
            let running = game.tick(FRAME_DT, &mut frame);
            lost |= game.take_events().contains(&GameEvent::GameOver);
            if !running {
                break;
            }
        }
        if game.is_running() {
            game.stop();
        }

        let vertices = frame.tessellate(CIRCLE_SEGMENTS);
        let bytes: &[u8] = bytemuck::cast_slice::<Vertex, u8>(&vertices);
        log::info!(
            "Last frame: {} draw commands, {} vertices, {} bytes",
            frame.commands().len(),
            vertices.len(),
            bytes.len()
        );

        let stats = game.stats();
        println!(
            "{} after {} frames: {} waves, {} bricks destroyed",
            if lost { "Ball lost" } else { "Frame limit reached" },
            stats.frames,
            stats.waves,
            stats.bricks_destroyed
        );
    }

    /// Follow the ball, swaying so the bounce angle varies
    fn autopilot(game: &Game) -> Vector2 {
        let ball = game.ball_position();
        let t = game.stats().frames as f32 * 0.05;
        let sway = t.sin() * game.settings().paddle.size.x * 0.3;
        Vector2::new(ball.x + sway, ball.y)
    }
}
