//! `requestAnimationFrame` driver for the particle system.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

use crate::stage::SharedStage;

type FrameCallback = RefCell<Option<Closure<dyn FnMut(f64)>>>;

/// Runs frames while particles are alive and goes idle once they are gone.
/// At most one frame callback is pending at any time.
pub struct Animator {
    stage: SharedStage,
    callback: Rc<FrameCallback>,
    /// Id of the scheduled frame, if any
    pending: Rc<Cell<Option<i32>>>,
}

impl Animator {
    pub fn new(stage: SharedStage) -> Self {
        let callback: Rc<FrameCallback> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let on_frame = {
            let stage = Rc::clone(&stage);
            let pending = Rc::clone(&pending);
            let this: Weak<FrameCallback> = Rc::downgrade(&callback);
            Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                {
                    let mut stage = stage.borrow_mut();
                    if !stage.frame() {
                        log::debug!(
                            "animation idle, {} frames so far",
                            stage.frame_loop.frames()
                        );
                        return;
                    }
                }
                let Some(callback) = this.upgrade() else {
                    return;
                };
                match schedule(&callback) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => {
                        log::error!("failed to schedule frame: {:?}", e);
                        stage.borrow_mut().frame_loop.reset();
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };
        *callback.borrow_mut() = Some(on_frame);

        Self {
            stage,
            callback,
            pending,
        }
    }

    /// Make sure the loop is running. A no-op while frames are already scheduled.
    pub fn request(&self) {
        if !self.stage.borrow_mut().frame_loop.request() {
            return;
        }
        match schedule(&self.callback) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => {
                log::error!("failed to start frame loop: {:?}", e);
                self.stage.borrow_mut().frame_loop.reset();
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.stage.borrow().frame_loop.is_running()
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        // the callback is freed with us, so the browser must not call it anymore
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn schedule(callback: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let callback = callback.borrow();
    let callback = callback.as_ref().ok_or("frame callback dropped")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}
