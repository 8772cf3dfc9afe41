use crate::core::media::MediaItem;

/// What a click inside the open lightbox landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    CloseButton,
    /// The media itself; swallowed so the backdrop never sees it.
    Media,
}

/// Zero-or-one selected item; the modal is open exactly while one is selected.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    selection: Option<MediaItem>,
}

impl Lightbox {
    pub fn open(&mut self, item: &MediaItem) {
        self.selection = Some(item.clone());
    }

    /// Returns `true` if a selection was cleared.
    pub fn close(&mut self) -> bool {
        self.selection.take().is_some()
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    #[inline]
    pub fn selection(&self) -> Option<&MediaItem> {
        self.selection.as_ref()
    }

    /// Returns `true` if the click changed the selection.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(),
            ClickTarget::Media => false,
        }
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        is_dismiss_key(key) && self.close()
    }
}

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
