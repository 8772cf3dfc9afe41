#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod marquee;
mod overlay;
mod render;
mod sea;

use marquee::PhotoWall;
use sea::SeaWindow;

const SEA_CONTAINER_ID: &str = "sea-window";
const WALL_CONTAINER_ID: &str = "project-wall";

// Components mounted from page markup; they live until `unmount_all`.
thread_local! {
    static MOUNTED: RefCell<Vec<Mounted>> = const { RefCell::new(Vec::new()) };
}

enum Mounted {
    Sea(SeaWindow),
    Wall(PhotoWall),
}

/// JS handle for a parallax sea background.
#[wasm_bindgen]
pub struct SeaWindowHandle {
    inner: SeaWindow,
}

#[wasm_bindgen]
impl SeaWindowHandle {
    /// Mount into `container`; `undefined` if the canvas cannot animate.
    pub fn mount(container: web::HtmlElement) -> Option<SeaWindowHandle> {
        match SeaWindow::mount(&container) {
            Ok(inner) => Some(Self { inner }),
            Err(e) => {
                log::warn!("[sea] not mounted: {}", e);
                None
            }
        }
    }

    pub fn unmount(&mut self) {
        self.inner.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_mounted()
    }
}

/// JS handle for a media marquee with its lightbox.
#[wasm_bindgen]
pub struct PhotoWallHandle {
    inner: PhotoWall,
}

#[wasm_bindgen]
impl PhotoWallHandle {
    /// Mount into `container` with an array of media URLs; `undefined` if empty.
    pub fn mount(container: web::HtmlElement, media: js_sys::Array) -> Option<PhotoWallHandle> {
        let sources: Vec<String> = media.iter().filter_map(|v| v.as_string()).collect();
        match PhotoWall::mount(&container, sources) {
            Ok(inner) => Some(Self { inner }),
            Err(e) => {
                log::warn!("[marquee] not mounted: {}", e);
                None
            }
        }
    }

    pub fn unmount(&mut self) {
        self.inner.unmount();
    }

    #[wasm_bindgen(getter, js_name = lightboxOpen)]
    pub fn lightbox_open(&self) -> bool {
        self.inner.is_lightbox_open()
    }
}

/// Tear down every component mounted from page markup.
#[wasm_bindgen(js_name = unmountAll)]
pub fn unmount_all() {
    let mounted = MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    log::info!("unmounting {} component(s)", mounted.len());
    for component in mounted {
        match component {
            Mounted::Sea(mut s) => s.unmount(),
            Mounted::Wall(mut w) => w.unmount(),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sea-window starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    }
    Ok(())
}

/// Mount components for the well-known container ids, if present.
fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(container) = find_container(&document, SEA_CONTAINER_ID) {
        match SeaWindow::mount(&container) {
            Ok(sea) => MOUNTED.with(|m| m.borrow_mut().push(Mounted::Sea(sea))),
            Err(e) => log::warn!("[sea] #{} left empty: {}", SEA_CONTAINER_ID, e),
        }
    }

    if let Some(container) = find_container(&document, WALL_CONTAINER_ID) {
        let sources = container
            .get_attribute("data-media")
            .map(|raw| parse_media_list(&raw))
            .unwrap_or_default();
        match PhotoWall::mount(&container, sources) {
            Ok(wall) => MOUNTED.with(|m| m.borrow_mut().push(Mounted::Wall(wall))),
            Err(e) => log::warn!("[marquee] #{} left empty: {}", WALL_CONTAINER_ID, e),
        }
    }
    Ok(())
}

fn find_container(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn parse_media_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
