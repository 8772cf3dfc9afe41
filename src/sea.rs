use crate::core::{Flock, PointerState, SceneParams, SeaScene};
use crate::dom::{self, EventListener, MountError, ResizeWatch};
use crate::events;
use crate::frame::{AnimationLoop, FrameContext};
use crate::render::CanvasPainter;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The parallax sea background: wave grid, birds and pointer wake.
pub struct SeaWindow {
    canvas: web::HtmlCanvasElement,
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
    resize_watch: Option<ResizeWatch>,
}

impl SeaWindow {
    /// Create a canvas inside `container` and start animating.
    ///
    /// Fails without touching the container when no 2D context is available.
    pub fn mount(container: &web::HtmlElement) -> Result<Self, MountError> {
        let document = dom::document()?;
        let canvas: web::HtmlCanvasElement = dom::create(&document, "canvas", "sea-window__canvas")?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(MountError::NoContext)?;
        _ = canvas.style().set_property("display", "block");
        container.append_child(&canvas)?;

        let params = SceneParams::default().with_overrides(dom::attribute_lookup(container));
        let (w, h) = dom::sync_canvas_backing_size(&canvas, container);
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let flock = Flock::new(&params.birds, seed, Vec2::new(w as f32, h as f32));
        log::info!(
            "[sea] mounted {}x{} px, grid {}x{}, {} birds, seed {}",
            w,
            h,
            params.wave.rows,
            params.wave.cols,
            flock.len(),
            seed
        );

        let pointer = Rc::new(RefCell::new(PointerState::default()));
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            scene: SeaScene::new(params, flock, w, h),
            painter: CanvasPainter::new(ctx),
            pointer: pointer.clone(),
        }));

        let resync = resync_surface(&canvas, container, &frame_ctx);
        let mut listeners = wire_window_resize(&resync);
        listeners.extend(events::pointer::wire_pointer_tracking(&canvas, &pointer));
        let resize_watch = {
            let resync = resync.clone();
            ResizeWatch::new(container, move || resync())
                .map_err(|e| log::warn!("[sea] no ResizeObserver, window resize only: {}", e))
                .ok()
        };

        let frame_loop = AnimationLoop::start(frame_ctx);
        Ok(Self {
            canvas,
            frame_loop: Some(frame_loop),
            listeners,
            resize_watch,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.frame_loop.as_ref().is_some_and(|l| l.is_running())
    }

    /// Stop the frame loop, drop every listener and remove the canvas.
    pub fn unmount(&mut self) {
        let Some(mut frame_loop) = self.frame_loop.take() else {
            return;
        };
        frame_loop.cancel();
        self.listeners.clear();
        self.resize_watch = None;
        self.canvas.remove();
        log::info!("[sea] unmounted");
    }
}

impl Drop for SeaWindow {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Re-run surface sizing for `container`; the scene only hears about real changes.
fn resync_surface(
    canvas: &web::HtmlCanvasElement,
    container: &web::HtmlElement,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> Rc<dyn Fn()> {
    let canvas = canvas.clone();
    let container = container.clone();
    let frame_ctx = frame_ctx.clone();
    Rc::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas, &container);
        if frame_ctx.borrow_mut().scene.resize(w, h) {
            log::debug!("[sea] resized to {}x{} px", w, h);
        }
    })
}

fn wire_window_resize(resync: &Rc<dyn Fn()>) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    ["resize", "orientationchange"]
        .into_iter()
        .map(|event| {
            let resync = resync.clone();
            EventListener::new(&window, event, move |_| resync())
        })
        .collect()
}
