//! Mystery Wheel entry point
//!
//! Wires the browser DOM to the deterministic sim: user actions become
//! `TickInput` fields, a fixed-timestep accumulator drives `tick`, and the
//! presentation re-reads state every animation frame. Native builds run a
//! headless scripted demo instead.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlInputElement, KeyboardEvent, MouseEvent};

    use mystery_wheel::Settings;
    use mystery_wheel::consts::*;
    use mystery_wheel::sim::{GamePhase, GameState, SpinStatus, TickInput, tick};
    use mystery_wheel::ui::{dom, wheel};

    /// How long the "you're in" confirmation stays up
    const JOIN_FLASH_TICKS: u32 = 2 * TICKS_PER_SECOND;

    /// Application state: the sim plus presentation-only animation values
    struct App {
        state: GameState,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        settings: Settings,
        /// Persistent wheel angle; increases monotonically across spins
        rotation: f32,
        spin_from: f32,
        spin_to: f32,
        spin_active: bool,
        flash_ticks: u32,
    }

    impl App {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                settings: Settings::load(),
                rotation: 0.0,
                spin_from: 0.0,
                spin_to: 0.0,
                spin_active: false,
                flash_ticks: 0,
            }
        }

        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, now_ms: f64) {
            if self.last_time == 0.0 {
                self.last_time = now_ms;
                return;
            }
            let dt = (((now_ms - self.last_time) / 1000.0) as f32).clamp(0.0, 0.1);
            self.last_time = now_ms;
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let pool_before = self.state.pool.len();
                let adding = self.input.add_name.is_some();
                // One-shot inputs are consumed by the tick they land in
                let input = std::mem::take(&mut self.input);
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                if adding && self.state.pool.len() > pool_before {
                    self.flash_ticks = JOIN_FLASH_TICKS;
                } else {
                    self.flash_ticks = self.flash_ticks.saturating_sub(1);
                }
                self.sync_wheel();
            }
        }

        /// Keep the wheel animation in lockstep with the spin cycle
        fn sync_wheel(&mut self) {
            match &self.state.spin {
                SpinStatus::Spinning { ticks_left, .. } => {
                    if !self.spin_active {
                        self.spin_active = true;
                        self.spin_from = self.rotation;
                        if let Some(index) = self.state.spin_target() {
                            self.spin_to = wheel::target_rotation(
                                self.rotation,
                                index,
                                self.state.pool.len(),
                            );
                        }
                        log::info!("Spin started ({} in the pool)", self.state.pool.len());
                    }
                    let progress = 1.0 - *ticks_left as f32 / SPIN_DURATION_TICKS as f32;
                    self.rotation = wheel::rotation_at(self.spin_from, self.spin_to, progress);
                }
                _ => {
                    if self.spin_active {
                        self.spin_active = false;
                        self.rotation = self.spin_to;
                        if let Some(winner) = self.state.announced_winner() {
                            log::info!("Winner selected: {winner}");
                        }
                    }
                }
            }
        }

        fn render(&self, ctx: &CanvasRenderingContext2d, size: f64) {
            dom::draw_wheel(
                ctx,
                &self.state.pool,
                self.rotation,
                size,
                self.settings.effective_glow(),
            );
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                self.update_hud(&document);
            }
        }

        /// Sync DOM counters, lists, and control states with the sim
        fn update_hud(&self, document: &Document) {
            let state = &self.state;

            dom::set_text(document, "participant-count", &state.pool.len().to_string());
            dom::set_text(
                document,
                "winner-count",
                &format!("{}/{WINNER_QUOTA}", state.winners.len()),
            );
            dom::set_text(
                document,
                "boxes-left",
                &(WINNER_QUOTA - state.winners.len()).to_string(),
            );

            dom::render_name_list(document, "participants-list", &state.pool);
            dom::render_name_list(document, "winners-list", &state.winners);

            // Winner announcement banner during the hold phase
            if let Some(el) = document.get_element_by_id("winner-banner") {
                let class = match state.announced_winner() {
                    None => "hidden",
                    Some(_) if self.settings.reduced_motion => "",
                    Some(_) => "pulse",
                };
                let _ = el.set_attribute("class", class);
            }
            if let Some(winner) = state.announced_winner() {
                dom::set_text(document, "winner-name", winner);
            }

            let started = state.phase != GamePhase::NotStarted;
            dom::set_visible(document, "start-btn", !started);
            dom::set_visible(document, "game-controls", started);
            dom::set_visible(
                document,
                "entry-form",
                state.phase == GamePhase::InProgress && state.winners.len() < WINNER_QUOTA,
            );
            dom::set_visible(document, "join-flash", self.flash_ticks > 0);

            dom::set_enabled(document, "spin-btn", state.can_spin());
            let label = if !state.spin.is_idle() {
                "Spinning..."
            } else if state.is_complete() {
                "All winners selected"
            } else {
                "Spin the wheel"
            };
            dom::set_text(document, "spin-btn", label);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Mystery Wheel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let (canvas, ctx) =
            dom::canvas_context(&document, "wheel-canvas").expect("no wheel canvas");
        let size = canvas.client_width().max(300) as f64;
        canvas.set_width(size as u32);
        canvas.set_height(size as u32);

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));
        log::info!("Game initialized with seed: {seed}");

        setup_controls(app.clone(), &document);
        start_loop(app, ctx, size);

        log::info!("Mystery Wheel running!");
    }

    fn setup_controls(app: Rc<RefCell<App>>, document: &Document) {
        // Entry form: button click or Enter in the name field
        {
            let app = app.clone();
            if let Some(btn) = document.get_element_by_id("join-btn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    submit_name(&app);
                });
                let _ = btn
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
        {
            let app = app.clone();
            if let Some(field) = document.get_element_by_id("name-input") {
                let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                    if event.key() == "Enter" {
                        submit_name(&app);
                    }
                });
                let _ = field
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        {
            let app = app.clone();
            if let Some(btn) = document.get_element_by_id("start-btn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    app.borrow_mut().input.start = true;
                });
                let _ = btn
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
        {
            let app = app.clone();
            if let Some(btn) = document.get_element_by_id("spin-btn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    app.borrow_mut().input.spin = true;
                });
                let _ = btn
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
        {
            let app = app.clone();
            if let Some(btn) = document.get_element_by_id("reset-btn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let mut app = app.borrow_mut();
                    // Park the wheel where it is; a canceled spin must not
                    // jump to its stale landing angle
                    let here = app.rotation;
                    app.spin_to = here;
                    app.spin_active = false;
                    app.input.reset = true;
                    log::info!("Game reset");
                });
                let _ = btn
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Settings checkboxes
        setup_toggle(app.clone(), document, "glow-toggle", |settings, on| {
            settings.glow_effects = on;
        });
        setup_toggle(app, document, "reduced-motion-toggle", |settings, on| {
            settings.reduced_motion = on;
        });
    }

    fn submit_name(app: &Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(field) = document
            .get_element_by_id("name-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let value = field.value();
        if !value.trim().is_empty() {
            app.borrow_mut().input.add_name = Some(value);
            field.set_value("");
        }
    }

    fn setup_toggle(
        app: Rc<RefCell<App>>,
        document: &Document,
        id: &str,
        apply: fn(&mut Settings, bool),
    ) {
        let Some(el) = document.get_element_by_id(id) else {
            return;
        };
        let id = id.to_string();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let Some(field) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(&id))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let mut app = app.borrow_mut();
            apply(&mut app.settings, field.checked());
            app.settings.save();
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// requestAnimationFrame loop holding the app and canvas context
    fn start_loop(app: Rc<RefCell<App>>, ctx: CanvasRenderingContext2d, size: f64) {
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let starter = handle.clone();

        *starter.borrow_mut() = Some(Closure::new(move |time: f64| {
            {
                let mut app = app.borrow_mut();
                app.update(time);
                app.render(&ctx, size);
            }
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    handle
                        .borrow()
                        .as_ref()
                        .expect("frame closure")
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }));

        let window = web_sys::window().expect("no window");
        let _ = window.request_animation_frame(
            starter
                .borrow()
                .as_ref()
                .expect("frame closure")
                .as_ref()
                .unchecked_ref(),
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mystery_wheel::sim::{GameState, TickInput, tick};

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Mystery Wheel (native demo) seed: {seed}");

    let mut state = GameState::new(seed);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    for name in ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "in"] {
        tick(
            &mut state,
            &TickInput {
                add_name: Some(name.to_string()),
                ..Default::default()
            },
        );
    }
    println!("Pool: {:?}", state.pool);

    while !state.is_complete() && !state.pool.is_empty() {
        tick(
            &mut state,
            &TickInput {
                spin: true,
                ..Default::default()
            },
        );
        while !state.spin.is_idle() {
            tick(&mut state, &TickInput::default());
        }
        if let Some(winner) = state.winners.last() {
            println!("Winner #{}: {winner}", state.winners.len());
        }
    }
    println!("Winners: {:?}", state.winners);
}
