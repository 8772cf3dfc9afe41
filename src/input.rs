use crate::core::PointerState;
use web_sys as web;

/// Map a page-level mouse event into the canvas backing-pixel space.
///
/// Returns the off-surface sentinel while the canvas has no layout size.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> PointerState {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return PointerState::off_surface();
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    PointerState::at(sx, sy)
}
