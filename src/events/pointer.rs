use crate::core::PointerState;
use crate::dom::EventListener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the page pointer in canvas backing pixels.
///
/// `mousemove` is global so the wake follows the pointer even over content
/// layered above the canvas; leaving the page resets to the off-surface
/// sentinel.
pub fn wire_pointer_tracking(
    canvas: &web::HtmlCanvasElement,
    pointer: &Rc<RefCell<PointerState>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);
    let Some(window) = web::window() else {
        return listeners;
    };

    let canvas_move = canvas.clone();
    let pointer_move = pointer.clone();
    listeners.push(EventListener::new(&window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            *pointer_move.borrow_mut() = input::pointer_canvas_px(ev, &canvas_move);
        }
    }));

    let leave_target: Option<web::EventTarget> = window
        .document()
        .and_then(|d| d.document_element())
        .map(Into::into);
    if let Some(target) = leave_target {
        let pointer_leave = pointer.clone();
        listeners.push(EventListener::new(&target, "mouseleave", move |_| {
            *pointer_leave.borrow_mut() = PointerState::off_surface();
        }));
    }
    listeners
}
