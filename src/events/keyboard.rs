use crate::dom::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward every page-level key press to `handler` by key name.
pub fn wire_global_keydown(mut handler: impl FnMut(&str) + 'static) -> Option<EventListener> {
    let window = web::window()?;
    Some(EventListener::new(&window, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handler(&ev.key());
        }
    }))
}
