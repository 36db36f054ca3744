//! Laser Chase entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use laser_chase::consts::*;
    use laser_chase::renderer::{DebugOverlay, DrawCmd, Style, build_scene};
    use laser_chase::sim::{SessionState, tick};
    use laser_chase::{Bounds, Settings};

    const CANVAS_STYLE: &str = "border:5px solid orange;cursor:none";
    const OVERLAY_STYLE: &str = "opacity:0.3;font-family:Courier New;font-size:10px;\
                                 position:absolute;top:25px;left:30px";

    /// Scene instance holding all state
    struct App {
        state: SessionState,
        settings: Settings,
        ctx: CanvasRenderingContext2d,
        overlay: DebugOverlay,
        overlay_el: Element,
        accumulator: f64,
        last_time: f64,
    }

    impl App {
        /// Run fixed-step ticks for the elapsed frame time
        fn update(&mut self, dt: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&self) {
            for cmd in build_scene(&self.state) {
                if let Err(e) = draw(&self.ctx, &cmd) {
                    log::warn!("Draw error: {:?}", e);
                    return;
                }
            }
        }

        fn update_overlay(&mut self) {
            if self.settings.show_debug {
                self.overlay.update(&self.state);
                self.overlay_el.set_text_content(Some(&self.overlay.text()));
            } else {
                self.overlay_el.set_text_content(None);
            }
        }
    }

    fn draw(ctx: &CanvasRenderingContext2d, cmd: &DrawCmd) -> Result<(), JsValue> {
        match cmd {
            DrawCmd::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawCmd::Circle {
                center,
                radius,
                style,
            } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, std::f64::consts::TAU)?;
                finish_path(ctx, style)?;
            }
            DrawCmd::Polygon { points, style } => {
                ctx.begin_path();
                if let Some((first, rest)) = points.split_first() {
                    ctx.move_to(first.x, first.y);
                    for p in rest {
                        ctx.line_to(p.x, p.y);
                    }
                    ctx.close_path();
                }
                finish_path(ctx, style)?;
            }
            DrawCmd::Segments { segments, style } => {
                ctx.begin_path();
                for (from, to) in segments {
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                }
                finish_path(ctx, style)?;
            }
        }
        Ok(())
    }

    fn finish_path(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
        ctx.set_stroke_style_str(style.stroke);
        if let Some([on, off]) = style.dash {
            let pattern = js_sys::Array::of2(&JsValue::from(on), &JsValue::from(off));
            ctx.set_line_dash(&pattern)?;
        }
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }
        ctx.stroke();
        if style.dash.is_some() {
            ctx.set_line_dash(&js_sys::Array::new())?;
        }
        Ok(())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Laser Chase starting...");

        match setup() {
            Ok(()) => log::info!("Laser Chase running!"),
            Err(e) => log::error!("Startup failed: {:?}", e),
        }
    }

    fn setup() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let bounds = Bounds::fit_4x3(f64::from(body.client_width()), f64::from(body.client_height()))
            .ok_or("window too small for the canvas")?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(JsValue::from)?;
        canvas.set_id("box");
        canvas.set_attribute("style", CANVAS_STYLE)?;
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);

        let overlay_el = document.create_element("pre")?;
        overlay_el.set_attribute("style", OVERLAY_STYLE)?;

        body.append_child(&canvas)?;
        body.append_child(&overlay_el)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()
            .map_err(JsValue::from)?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let state = SessionState::new(bounds, &settings, seed);

        log::info!(
            "Canvas {}x{}, keep-away radius {:.1}, seed {}",
            bounds.width,
            bounds.height,
            state.keep_away_radius,
            seed
        );

        let app = Rc::new(RefCell::new(App {
            state,
            settings,
            ctx,
            overlay: DebugOverlay::new(),
            overlay_el,
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone())?;

        request_animation_frame(app);
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Pointer move - the cat
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = DVec2::new(f64::from(event.offset_x()), f64::from(event.offset_y()));
                app.borrow_mut().state.on_pointer_move(pos);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut app = app.borrow_mut();
                match event.key().as_str() {
                    "s" | "S" => {
                        let next = app.state.strategy.next();
                        app.state.set_strategy(next);
                        app.settings.strategy = next;
                        app.settings.save();
                    }
                    "d" | "D" => {
                        app.settings.show_debug = !app.settings.show_debug;
                        log::info!("Debug overlay: {}", app.settings.show_debug);
                        app.settings.save();
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, animation stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            animation_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                (time - a.last_time) / 1000.0
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
            a.update_overlay();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Laser Chase (native) starting...");
    log::info!("Native mode has no window - build for wasm32 to see the scene");

    let mut settings = laser_chase::Settings::load();
    if let Some(name) = std::env::args().nth(1) {
        match laser_chase::sim::Strategy::from_name(&name) {
            Some(strategy) => settings.strategy = strategy,
            None => {
                log::error!(
                    "Unknown strategy '{}' (expected run-away, tether, keep-center or bounce)",
                    name
                );
                std::process::exit(2);
            }
        }
    }

    let violations = pointer_sweep(&settings);
    if violations > 0 {
        log::error!("Pointer sweep found {} invariant violations", violations);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a session with a seeded random pointer walk and count positions
/// that break the canvas or keep-away invariants
#[cfg(not(target_arch = "wasm32"))]
fn pointer_sweep(settings: &laser_chase::Settings) -> usize {
    use glam::DVec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use laser_chase::sim::{Strategy, tick};
    use laser_chase::{Bounds, SessionState};

    const MOVES: usize = 5000;
    const TICKS_PER_MOVE: usize = 3;

    let bounds = Bounds::new(800.0, 600.0);
    let seed = settings.seed.unwrap_or(0x1a5e_7ca7);
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = SessionState::new(bounds, settings, seed);

    log::info!(
        "Sweeping {} pointer moves ({}), keep-away radius {:.1}",
        MOVES,
        state.strategy.as_str(),
        state.keep_away_radius
    );

    let mut cat = bounds.center();
    let mut relocations = 0;
    let mut violations = 0;

    for _ in 0..MOVES {
        // Mostly small steps, occasionally a jump anywhere
        cat = if rng.random_bool(0.05) {
            DVec2::new(
                rng.random_range(0.0..=bounds.width),
                rng.random_range(0.0..=bounds.height),
            )
        } else {
            let step = DVec2::new(rng.random_range(-25.0..=25.0), rng.random_range(-25.0..=25.0));
            bounds.clamp(cat + step)
        };

        let before = state.laser;
        state.on_pointer_move(cat);
        if state.laser != before {
            relocations += 1;
        }
        for _ in 0..TICKS_PER_MOVE {
            tick(&mut state);
        }

        // Bouncing may overshoot a wall by one step and ignores the cat
        let in_bounds = !state.strategy.follows_cat() || bounds.contains(state.laser);
        let clear = !matches!(state.strategy, Strategy::RunAway | Strategy::Tether)
            || state.laser.distance(state.cat) >= state.keep_away_radius - 1e-6;
        if !in_bounds || !clear {
            violations += 1;
            log::warn!(
                "cat ({:.2}, {:.2}) laser ({:.2}, {:.2}) in_bounds={} clear={}",
                state.cat.x,
                state.cat.y,
                state.laser.x,
                state.laser.y,
                in_bounds,
                clear
            );
        }
    }

    log::info!(
        "Sweep done: {} relocations, {} violations",
        relocations,
        violations
    );
    println!("✓ Pointer sweep: {relocations} relocations, {violations} violations");
    violations
}
