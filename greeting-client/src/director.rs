//! Reactions to user actions: bursts, the staggered show, name submission.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use greeting_common::{GuestName, DEFAULT_KEY};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Window;

use crate::{animator::Animator, loader, page::Page, stage::SharedStage};

/// Prompt shown when the name field is submitted blank.
const NAME_PROMPT: &str = "Please enter your name!";

/// A staggered sequence's interval timer. The timer is cleared when the
/// sequence runs out or when this is dropped.
struct Stagger {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    // keeps the interval callback alive
    _tick: Closure<dyn FnMut()>,
}

impl Drop for Stagger {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}

#[derive(Clone)]
pub struct Director {
    pub stage: SharedStage,
    pub animator: Rc<Animator>,
    pub page: Rc<Page>,
    stagger: Rc<RefCell<Option<Stagger>>>,
}

impl Director {
    pub fn new(stage: SharedStage, page: Page) -> Self {
        Self {
            animator: Rc::new(Animator::new(Rc::clone(&stage))),
            stage,
            page: Rc::new(page),
            stagger: Rc::new(RefCell::new(None)),
        }
    }

    /// Fire at every preset position at once.
    pub fn celebrate(&self) {
        self.stage.borrow_mut().celebrate();
        self.animator.request();
    }

    pub fn burst_at(&self, x: f32, y: f32) {
        self.stage.borrow_mut().burst_at(x, y);
        self.animator.request();
    }

    /// Fire the preset positions one at a time on an interval timer.
    pub fn auto_fireworks(&self) -> Result<(), JsValue> {
        // restarting replaces (and stops) a sequence still in progress
        drop(self.stagger.borrow_mut().take());

        let (mut sequence, interval_ms) = {
            let stage = self.stage.borrow();
            (stage.staggered(), stage.settings.stagger_interval_ms)
        };

        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick = {
            let stage = Rc::clone(&self.stage);
            let animator = Rc::clone(&self.animator);
            let page = Rc::clone(&self.page);
            let handle = Rc::clone(&handle);
            Closure::wrap(Box::new(move || {
                let fired = {
                    let mut stage = stage.borrow_mut();
                    let stage = &mut *stage;
                    sequence.advance(&mut stage.system, &mut stage.rng)
                };
                if fired {
                    animator.request();
                }
                if sequence.is_exhausted() {
                    if let Some(id) = handle.take() {
                        page.window().clear_interval_with_handle(id);
                        log::debug!("staggered fireworks finished");
                    }
                }
            }) as Box<dyn FnMut()>)
        };

        let id = self
            .page
            .window()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                interval_ms,
            )?;
        handle.set(Some(id));
        *self.stagger.borrow_mut() = Some(Stagger {
            window: self.page.window().clone(),
            handle,
            _tick: tick,
        });
        Ok(())
    }

    /// Start the staggered show after `delay_ms`.
    pub fn auto_fireworks_after(&self, delay_ms: i32) -> Result<(), JsValue> {
        let director = self.clone();
        let start = Closure::once_into_js(move || {
            if let Err(e) = director.auto_fireworks() {
                log::error!("failed to start staggered fireworks: {:?}", e);
            }
        });
        self.page
            .window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                start.unchecked_ref(),
                delay_ms,
            )?;
        Ok(())
    }

    /// Show a fresh set of wishes for `name`. Leaves the list alone when the
    /// catalog has nothing to offer.
    pub fn show_wishes(&self, name: &str) -> Result<(), JsValue> {
        let wishes = self.stage.borrow_mut().pick_wishes(name);
        if wishes.is_empty() {
            return Ok(());
        }
        self.page.render_wishes(&wishes)
    }

    /// Fetch the wishes document in the background, then show the initial set.
    pub fn load_wishes(&self) {
        let director = self.clone();
        let url = self.stage.borrow().settings.wishes_url.clone();
        spawn_local(async move {
            let catalog = loader::load_catalog(&url).await;
            let name = {
                let mut stage = director.stage.borrow_mut();
                stage.catalog = catalog;
                stage
                    .guest
                    .as_ref()
                    .map(|guest| guest.to_string())
                    .unwrap_or_else(|| DEFAULT_KEY.to_string())
            };
            if let Err(e) = director.show_wishes(&name) {
                log::warn!("failed to show wishes: {:?}", e);
            }
        });
    }

    /// Handle the intro form. A blank name only shows a prompt.
    pub fn submit_name(&self) -> Result<(), JsValue> {
        let guest = match GuestName::parse(&self.page.name_value()) {
            Ok(guest) => guest,
            Err(e) => {
                log::debug!("rejected name: {}", e);
                self.page.alert(NAME_PROMPT);
                return Ok(());
            }
        };
        log::info!("welcome, {}", guest);

        self.page.show_main()?;
        let greeting = self.stage.borrow_mut().pick_greeting(guest.as_str());
        self.page.set_greeting(&greeting);
        self.show_wishes(guest.as_str())?;

        let delay_ms = {
            let mut stage = self.stage.borrow_mut();
            stage.guest = Some(guest);
            stage.settings.auto_start_delay_ms
        };

        self.play_music();
        self.auto_fireworks_after(delay_ms)
    }

    /// Try the `<audio>` element first and fall back to the synthesized melody.
    pub fn play_music(&self) {
        let Some(player) = self.page.music_player() else {
            log::debug!("no music element, using synthesized melody");
            self.play_melody();
            return;
        };
        match player.play() {
            Ok(promise) => {
                let director = self.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("Could not play music: {:?}", e);
                        director.play_melody();
                    }
                });
            }
            Err(e) => {
                log::warn!("Could not play music: {:?}", e);
                self.play_melody();
            }
        }
    }

    pub fn play_melody(&self) {
        if let Err(e) = self.stage.borrow_mut().audio.melody() {
            log::warn!("Audio playback not available: {:?}", e);
        }
    }

    pub fn play_beep(&self) {
        if let Err(e) = self.stage.borrow_mut().audio.beep() {
            log::debug!("beep skipped: {:?}", e);
        }
    }
}
