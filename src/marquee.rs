use crate::core::{
    track_style, ClickTarget, Lightbox, MarqueeParams, MarqueeStrip, MediaItem, MARQUEE_STYLESHEET,
};
use crate::dom::{self, EventListener, MountError};
use crate::events;
use crate::overlay::LightboxView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const STYLESHEET_ID: &str = "sea-window-marquee";
const CARD_SELECTOR: &str = ".photo-wall__card";
const MISSING_CLASS: &str = "photo-wall__card--missing";
const PLACEHOLDER_SRC: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 160 90'><rect width='160' height='90' fill='%231e293b'/><path d='M62 60l14-18 10 12 8-8 14 14z' fill='%23475569'/><circle cx='98' cy='34' r='6' fill='%23475569'/></svg>";

struct WallState {
    strip: MarqueeStrip,
    lightbox: Lightbox,
    view: LightboxView,
    document: web::Document,
}

impl WallState {
    fn select(&mut self, display_index: usize) {
        let Some(item) = self.strip.item_at(display_index) else {
            return;
        };
        self.lightbox.open(item);
        let Some(selected) = self.lightbox.selection() else {
            return;
        };
        if let Err(e) = self.view.show(&self.document, selected) {
            log::warn!("[marquee] lightbox failed for {}: {}", selected.src, e);
            self.lightbox.close();
            self.view.hide();
        }
    }

    fn click(&mut self, target: ClickTarget) {
        if self.lightbox.handle_click(target) {
            self.view.hide();
        }
    }
}

/// Infinitely scrolling media strip with a click-to-open lightbox.
pub struct PhotoWall {
    wrapper: web::HtmlElement,
    state: Rc<RefCell<WallState>>,
    listeners: Vec<EventListener>,
    mounted: bool,
}

impl PhotoWall {
    /// Render `sources` into `container`. An empty list renders nothing.
    pub fn mount(container: &web::HtmlElement, sources: Vec<String>) -> Result<Self, MountError> {
        let strip = MarqueeStrip::new(sources).ok_or(MountError::EmptyMedia)?;
        let params = MarqueeParams::default().with_overrides(dom::attribute_lookup(container));
        let document = dom::document()?;
        ensure_stylesheet(&document)?;

        let wrapper: web::HtmlElement = dom::create(&document, "div", "photo-wall")?;
        for side in ["left", "right"] {
            let class = format!("photo-wall__mask photo-wall__mask--{}", side);
            let mask: web::HtmlElement = dom::create(&document, "div", &class)?;
            wrapper.append_child(&mask)?;
        }
        let title: web::HtmlElement = dom::create(&document, "div", "photo-wall__title")?;
        title.set_inner_text(&params.title);
        wrapper.append_child(&title)?;

        let track: web::HtmlElement = dom::create(&document, "div", "photo-wall__track")?;
        _ = track.set_attribute("style", &track_style(&params));
        let mut listeners = Vec::with_capacity(strip.display_len() + 4);
        for (i, item) in strip.display_items() {
            let (card, on_error) = build_card(&document, i, item)?;
            track.append_child(&card)?;
            listeners.push(on_error);
        }
        wrapper.append_child(&track)?;

        let view = LightboxView::build(&document)?;
        let state = Rc::new(RefCell::new(WallState {
            strip,
            lightbox: Lightbox::default(),
            view,
            document,
        }));
        listeners.extend(wire_lightbox(&track, &state));
        container.append_child(&wrapper)?;

        log::info!(
            "[marquee] mounted {} items ({} cards), {}s cycle",
            state.borrow().strip.len(),
            state.borrow().strip.display_len(),
            params.cycle_secs
        );
        Ok(Self {
            wrapper,
            state,
            listeners,
            mounted: true,
        })
    }

    pub fn is_lightbox_open(&self) -> bool {
        let s = self.state.borrow();
        s.lightbox.is_open() && s.view.is_open()
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.listeners.clear();
        {
            let mut st = self.state.borrow_mut();
            st.lightbox.close();
            st.view.remove();
        }
        self.wrapper.remove();
        log::info!("[marquee] unmounted");
    }
}

impl Drop for PhotoWall {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn ensure_stylesheet(document: &web::Document) -> Result<(), MountError> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let style: web::HtmlElement = dom::create(document, "style", "")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(MARQUEE_STYLESHEET));
    let head = document.head().ok_or(MountError::NoDocument)?;
    head.append_child(&style)?;
    Ok(())
}

fn build_card(
    document: &web::Document,
    index: usize,
    item: &MediaItem,
) -> Result<(web::HtmlElement, EventListener), MountError> {
    let card: web::HtmlElement = dom::create(document, "div", "photo-wall__card")?;
    _ = card.set_attribute("data-index", &index.to_string());

    let media: web::HtmlElement = if item.is_video() {
        let video: web::HtmlVideoElement = dom::create(document, "video", "")?;
        video.set_src(&item.src);
        video.set_muted(true);
        video.set_loop(true);
        video.set_autoplay(true);
        _ = video.set_attribute("muted", "");
        _ = video.set_attribute("playsinline", "");
        video.into()
    } else {
        let img: web::HtmlImageElement = dom::create(document, "img", "")?;
        img.set_src(&item.src);
        img.set_alt(&format!("Project {}", index));
        _ = img.set_attribute("loading", "lazy");
        img.into()
    };
    card.append_child(&media)?;

    if item.is_video() {
        let badge: web::HtmlElement = dom::create(document, "span", "photo-wall__badge")?;
        badge.set_inner_text("\u{25B6}");
        card.append_child(&badge)?;
    }
    let hover: web::HtmlElement = dom::create(document, "div", "photo-wall__hover")?;
    hover.set_inner_text(if item.is_video() { "\u{25B6}" } else { "\u{2922}" });
    card.append_child(&hover)?;

    let on_error = placeholder_on_error(&card, &media, item);
    Ok((card, on_error))
}

/// Swap a broken card to the placeholder without disturbing its siblings.
fn placeholder_on_error(
    card: &web::HtmlElement,
    media: &web::HtmlElement,
    item: &MediaItem,
) -> EventListener {
    let card = card.clone();
    let media_el = media.clone();
    let src = item.src.clone();
    EventListener::new(media, "error", move |_| {
        if card.class_list().contains(MISSING_CLASS) {
            return;
        }
        _ = card.class_list().add_1(MISSING_CLASS);
        log::warn!("[marquee] failed to load {}", src);
        if let Some(img) = media_el.dyn_ref::<web::HtmlImageElement>() {
            img.set_src(PLACEHOLDER_SRC);
        } else if let Some(video) = media_el.dyn_ref::<web::HtmlVideoElement>() {
            video.set_poster(PLACEHOLDER_SRC);
        }
    })
}

fn wire_lightbox(track: &web::HtmlElement, state: &Rc<RefCell<WallState>>) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(4);

    // One delegated listener for every card in the strip.
    let st = state.clone();
    listeners.push(EventListener::new(track, "click", move |ev| {
        let index = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(CARD_SELECTOR).ok().flatten())
            .and_then(|card| card.get_attribute("data-index"))
            .and_then(|raw| raw.parse::<usize>().ok());
        if let Some(i) = index {
            st.borrow_mut().select(i);
        }
    }));

    let (root, close_button, media_slot) = {
        let s = state.borrow();
        (
            s.view.root().clone(),
            s.view.close_button().clone(),
            s.view.media_slot().clone(),
        )
    };

    let st = state.clone();
    listeners.push(EventListener::new(&root, "click", move |_| {
        st.borrow_mut().click(ClickTarget::Backdrop);
    }));

    let st = state.clone();
    listeners.push(EventListener::new(&close_button, "click", move |ev| {
        ev.stop_propagation();
        st.borrow_mut().click(ClickTarget::CloseButton);
    }));

    let st = state.clone();
    listeners.push(EventListener::new(&media_slot, "click", move |ev| {
        ev.stop_propagation();
        st.borrow_mut().click(ClickTarget::Media);
    }));

    let st = state.clone();
    if let Some(l) = events::keyboard::wire_global_keydown(move |key| {
        let mut s = st.borrow_mut();
        if s.lightbox.handle_key(key) {
            s.view.hide();
        }
    }) {
        listeners.push(l);
    }
    listeners
}
