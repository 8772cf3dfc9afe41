use crate::core::{PointerState, SeaScene};
use crate::render::CanvasPainter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SeaScene,
    pub painter: CanvasPainter,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let pointer = *self.pointer.borrow();
        self.scene.render_frame(&pointer, &mut self.painter);
    }
}

/// A requestAnimationFrame loop that can be cancelled synchronously.
///
/// The tick closure re-registers itself each frame. `cancel` drops the pending
/// frame id and the closure, so nothing runs against a disposed canvas.
pub struct AnimationLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            frame_ctx.borrow_mut().frame();
            pending_tick.set(schedule(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(schedule(&tick));

        Self { pending, tick }
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Releases the closure and with it the frame context.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
