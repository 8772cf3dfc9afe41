//! Platform-independent logic for the sea field and the media marquee.
//!
//! Nothing here touches web-sys, so host-side tests can load the whole tree.
pub mod birds;
pub mod lightbox;
pub mod media;
pub mod params;
pub mod pointer;
pub mod scene;
pub mod waves;

pub use birds::*;
pub use lightbox::*;
pub use media::*;
pub use params::*;
pub use pointer::*;
pub use scene::*;
pub use waves::*;
