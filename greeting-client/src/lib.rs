//! Fireworks Greeting - WASM client
//!
//! Binds the particle simulation and wish selection from `greeting-common`
//! to a browser page: canvas, frame callbacks, timers, Web Audio and the DOM.

use greeting_common::Settings;
use wasm_bindgen::{closure::WasmClosure, prelude::*};
use web_sys::{Element, EventTarget, KeyboardEvent, MouseEvent};

mod animator;
mod audio;
mod canvas;
mod director;
mod loader;
mod page;
mod stage;

use crate::{canvas::CanvasSurface, director::Director, page::Page, stage::Stage};

/// Page controller. Construct it once the DOM is ready and keep it alive for
/// the lifetime of the page.
#[wasm_bindgen]
pub struct Celebration {
    director: Director,

    _onresize: Listener<dyn FnMut()>,
    _onkeypress: Option<Listener<dyn FnMut(KeyboardEvent)>>,
    _onsubmit: Option<Listener<dyn FnMut(MouseEvent)>>,
    _onclick: Listener<dyn FnMut(MouseEvent)>,
}

/// A registered event callback. Dropping it removes the listener before the
/// closure is freed.
struct Listener<T: ?Sized + WasmClosure> {
    target: EventTarget,
    event: &'static str,
    callback: Closure<T>,
}

impl<T: ?Sized + WasmClosure> Listener<T> {
    fn add(target: &EventTarget, event: &'static str, callback: Closure<T>) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl<T: ?Sized + WasmClosure> Drop for Listener<T> {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[wasm_bindgen]
impl Celebration {
    /// `options` may be `undefined` or a partial settings object, e.g.
    /// `{ wishesUrl: "data/wishes.json", maxParticles: 1500 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Celebration, JsValue> {
        console_error_panic_hook::set_once();
        let settings = parse_settings(options)?;
        // a second instance keeps the logger installed by the first
        let _ = console_log::init_with_level(settings.log_level());

        let page = Page::new(settings.elements.clone())?;
        let surface = CanvasSurface::create(page.document(), &settings.elements.fireworks)?;
        let stage = Stage::new(settings, surface).into_shared();
        let director = Director::new(stage, page);

        let onresize = {
            let stage = director.stage.clone();
            Closure::wrap(Box::new(move || {
                if let Err(e) = stage.borrow_mut().surface.fit_window() {
                    log::warn!("resize failed: {:?}", e);
                }
            }) as Box<dyn FnMut()>)
        };
        let onresize = Listener::add(director.page.window(), "resize", onresize)?;

        let onkeypress = {
            let director = director.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.key() == "Enter" {
                    report(director.submit_name());
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let onkeypress = match director.page.name_input() {
            Some(input) => Some(Listener::add(&input, "keypress", onkeypress)?),
            None => None,
        };

        let onsubmit = match director
            .page
            .document()
            .get_element_by_id(&director.page.ids().submit_button)
        {
            Some(button) => {
                let director = director.clone();
                let onsubmit = Closure::wrap(Box::new(move |_e: MouseEvent| {
                    report(director.submit_name());
                }) as Box<dyn FnMut(MouseEvent)>);
                Some(Listener::add(&button, "click", onsubmit)?)
            }
            None => None,
        };

        // clicks anywhere on the main page, except on buttons, launch a small burst
        let onclick = {
            let director = director.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if targets_button(&e) || !director.page.main_visible() {
                    return;
                }
                director.burst_at(e.client_x() as f32, e.client_y() as f32);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let onclick = Listener::add(director.page.document(), "click", onclick)?;

        director.load_wishes();
        director.page.focus_name_input();
        log::info!("Celebration initialized");

        Ok(Celebration {
            director,
            _onresize: onresize,
            _onkeypress: onkeypress,
            _onsubmit: onsubmit,
            _onclick: onclick,
        })
    }

    /// Validate the name field and switch to the main page.
    pub fn submit_name(&self) -> Result<(), JsValue> {
        self.director.submit_name()
    }

    /// Fire at all five preset positions at once.
    pub fn celebrate(&self) {
        self.director.celebrate();
    }

    /// Fire the preset positions one after another.
    pub fn auto_fireworks(&self) -> Result<(), JsValue> {
        self.director.auto_fireworks()
    }

    pub fn burst_at(&self, x: f32, y: f32) {
        self.director.burst_at(x, y);
    }

    /// Pick a new set of wishes for the current guest.
    pub fn shuffle_wishes(&self) -> Result<(), JsValue> {
        let name = self
            .director
            .stage
            .borrow()
            .guest
            .as_ref()
            .map(|guest| guest.to_string())
            .unwrap_or_else(|| greeting_common::DEFAULT_KEY.to_string());
        self.director.show_wishes(&name)
    }

    pub fn play_beep(&self) {
        self.director.play_beep();
    }

    pub fn play_melody(&self) {
        self.director.play_melody();
    }

    pub fn particle_count(&self) -> usize {
        self.director.stage.borrow().system.len()
    }

    pub fn is_animating(&self) -> bool {
        self.director.animator.is_running()
    }
}

fn parse_settings(options: JsValue) -> Result<Settings, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Settings::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))
}

fn targets_button(e: &MouseEvent) -> bool {
    e.target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .is_some()
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("{:?}", e);
    }
}
