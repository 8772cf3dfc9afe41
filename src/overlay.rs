use crate::core::MediaItem;
use crate::dom::{self, MountError};
use web_sys as web;

/// Modal lightbox DOM: backdrop, close button and a media slot.
///
/// Built hidden once per photo wall; `show`/`hide` swap the media in and out.
pub struct LightboxView {
    root: web::HtmlElement,
    close_button: web::HtmlElement,
    media_slot: web::HtmlElement,
    video: Option<web::HtmlVideoElement>,
}

impl LightboxView {
    pub fn build(document: &web::Document) -> Result<Self, MountError> {
        let root: web::HtmlElement = dom::create(document, "div", "lightbox hidden")?;
        _ = root.set_attribute("role", "dialog");
        _ = root.set_attribute("aria-modal", "true");

        let close_button: web::HtmlElement = dom::create(document, "button", "lightbox__close")?;
        _ = close_button.set_attribute("aria-label", "Close");
        close_button.set_inner_text("\u{2715}");

        let media_slot: web::HtmlElement = dom::create(document, "div", "lightbox__media")?;
        root.append_child(&close_button)?;
        root.append_child(&media_slot)?;

        let body = document.body().ok_or(MountError::NoDocument)?;
        body.append_child(&root)?;
        Ok(Self {
            root,
            close_button,
            media_slot,
            video: None,
        })
    }

    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn close_button(&self) -> &web::HtmlElement {
        &self.close_button
    }

    pub fn media_slot(&self) -> &web::HtmlElement {
        &self.media_slot
    }

    /// Show `item` at full size: videos with controls and sound, images contained.
    pub fn show(&mut self, document: &web::Document, item: &MediaItem) -> Result<(), MountError> {
        self.clear_media();
        if item.is_video() {
            let video: web::HtmlVideoElement = dom::create(document, "video", "")?;
            video.set_src(&item.src);
            video.set_controls(true);
            video.set_autoplay(true);
            self.media_slot.append_child(&video)?;
            self.video = Some(video);
        } else {
            let img: web::HtmlImageElement = dom::create(document, "img", "")?;
            img.set_src(&item.src);
            img.set_alt("Enlarged view");
            self.media_slot.append_child(&img)?;
        }
        _ = self.root.class_list().remove_1("hidden");
        Ok(())
    }

    pub fn hide(&mut self) {
        self.clear_media();
        _ = self.root.class_list().add_1("hidden");
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        !self.root.class_list().contains("hidden")
    }

    pub fn remove(&mut self) {
        self.hide();
        self.root.remove();
    }

    fn clear_media(&mut self) {
        if let Some(video) = self.video.take() {
            _ = video.pause();
        }
        self.media_slot.set_inner_html("");
    }
}
