use crate::constants::VIDEO_EXTENSIONS;
use crate::core::params::MarqueeParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Video if the source ends in a known video extension (any case), else image.
pub fn classify(src: &str) -> MediaKind {
    let lower = src.to_ascii_lowercase();
    match lower.rsplit_once('.') {
        Some((_, ext)) if VIDEO_EXTENSIONS.contains(&ext) => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub src: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(src: impl Into<String>) -> Self {
        let src = src.into();
        let kind = classify(&src);
        Self { src, kind }
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// The media list shown twice end-to-end so the scroll can wrap invisibly.
#[derive(Clone, Debug)]
pub struct MarqueeStrip {
    items: Vec<MediaItem>,
}

impl MarqueeStrip {
    /// `None` for an empty list: the marquee renders nothing.
    pub fn new<S: Into<String>>(sources: impl IntoIterator<Item = S>) -> Option<Self> {
        let items: Vec<MediaItem> = sources.into_iter().map(MediaItem::new).collect();
        (!items.is_empty()).then_some(Self { items })
    }

    /// Number of distinct items (one copy).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn display_len(&self) -> usize {
        self.items.len() * 2
    }

    /// Item shown at `display_index` in the doubled strip.
    pub fn item_at(&self, display_index: usize) -> Option<&MediaItem> {
        if display_index >= self.display_len() {
            return None;
        }
        self.items.get(display_index % self.items.len())
    }

    pub fn display_items(&self) -> impl Iterator<Item = (usize, &MediaItem)> + '_ {
        self.items.iter().chain(self.items.iter()).enumerate()
    }
}

/// Inline style for the track; the duration is the time to scroll one copy.
pub fn track_style(params: &MarqueeParams) -> String {
    format!("animation-duration: {}s;", params.cycle_secs)
}

/// Keyframes and layout rules shared by every strip and lightbox on the page.
///
/// The track holds two copies, so translating it by -50% moves exactly one
/// copy's width before the animation restarts. Hovering the track pauses it.
pub const MARQUEE_STYLESHEET: &str = r#"
@keyframes sea-window-marquee {
  0% { transform: translateX(0); }
  100% { transform: translateX(-50%); }
}
.photo-wall { position: relative; width: 100%; overflow: hidden; padding: 4rem 0; background: #0f172a; }
.photo-wall__mask { position: absolute; top: 0; bottom: 0; width: 6rem; z-index: 10; pointer-events: none; }
.photo-wall__mask--left { left: 0; background: linear-gradient(to right, #0f172a, transparent); }
.photo-wall__mask--right { right: 0; background: linear-gradient(to left, #0f172a, transparent); }
.photo-wall__title { position: absolute; top: 1rem; left: 0; right: 0; text-align: center; z-index: 10; opacity: 0; transition: opacity 0.3s; pointer-events: none; color: rgba(255,255,255,0.3); font: 12px monospace; letter-spacing: 0.2em; text-transform: uppercase; }
.photo-wall:hover .photo-wall__title { opacity: 1; }
.photo-wall__track { display: flex; width: max-content; animation: sea-window-marquee 60s linear infinite; }
.photo-wall__track:hover { animation-play-state: paused; }
.photo-wall__card { position: relative; flex-shrink: 0; margin: 0 1rem; width: 20rem; aspect-ratio: 16 / 9; border-radius: 0.5rem; overflow: hidden; background: #1e293b; cursor: pointer; transition: transform 0.3s; }
.photo-wall__card:hover { transform: scale(1.05); }
.photo-wall__card img, .photo-wall__card video { width: 100%; height: 100%; object-fit: cover; opacity: 0.8; }
.photo-wall__card--missing img, .photo-wall__card--missing video { object-fit: contain; opacity: 0.4; }
.photo-wall__badge { position: absolute; top: 0.5rem; right: 0.5rem; padding: 0.2rem 0.4rem; border-radius: 999px; background: rgba(0,0,0,0.5); color: rgba(255,255,255,0.8); font-size: 12px; pointer-events: none; }
.photo-wall__hover { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; opacity: 0; transition: opacity 0.3s; background: rgba(0,0,0,0.2); color: rgba(255,255,255,0.9); font-size: 28px; pointer-events: none; }
.photo-wall__card:hover .photo-wall__hover { opacity: 1; }
.lightbox { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; padding: 3rem; background: rgba(2,6,23,0.9); backdrop-filter: blur(12px); }
.lightbox.hidden { display: none; }
.lightbox__close { position: absolute; top: 2rem; right: 2rem; border: 0; border-radius: 999px; padding: 0.5rem 0.9rem; background: rgba(255,255,255,0.1); color: rgba(255,255,255,0.7); font-size: 24px; cursor: pointer; }
.lightbox__media { position: relative; max-width: 100%; max-height: 100%; display: flex; align-items: center; justify-content: center; }
.lightbox__media img, .lightbox__media video { max-width: 100%; max-height: 85vh; object-fit: contain; border-radius: 0.375rem; box-shadow: 0 0 50px rgba(0,0,0,0.5); }
"#;
