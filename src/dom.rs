use crate::core::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("2d rendering context unavailable")]
    NoContext,
    #[error("empty media list")]
    EmptyMedia,
    #[error("dom: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        MountError::Dom(format!("{:?}", v))
    }
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn document() -> Result<web::Document, MountError> {
    web::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)
}

/// Create an element of type `T` with the given class attribute.
pub fn create<T: JsCast>(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> Result<T, MountError> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|e| MountError::Dom(format!("{} is not the expected type: {:?}", tag, e)))
}

/// An event listener that deregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A `ResizeObserver` on one element, disconnected when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn new(
        target: &web::Element,
        mut handler: impl FnMut() + 'static,
    ) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| handler())
            as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())?;
        observer.observe(target);
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Match the canvas backing store to its container's size times devicePixelRatio.
///
/// The displayed (CSS) size stays at the container's logical size. Returns the
/// new backing size in pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let css_w = container.client_width().max(0);
    let css_h = container.client_height().max(0);
    let (w_px, h_px) = backing_size(css_w as f64, css_h as f64, dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    (w_px, h_px)
}

/// Attribute lookup suitable for `SceneParams::with_overrides`.
pub fn attribute_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name| el.get_attribute(name)
}
