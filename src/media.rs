//! Media placeholders.
//!
//! Stored revisions reference their images through placeholder tokens such
//! as `[[IMG_1]]` plus a [`MediaMap`] from placeholder to URL. This module
//! resolves the placeholders into `<img>` elements when a revision is
//! displayed and turns images back into placeholders when it is saved.

mod element;
mod extract;
mod media_map;
mod protect;
mod resolve;
mod video;

pub use extract::{dehydrate, normalize_legacy_images};
pub use media_map::{MediaMap, is_placeholder, placeholder_for};
pub use protect::{PROTECTION_RANGE_END, PROTECTION_RANGE_START};
pub use resolve::{hydrate, render_for_publish, resolve_media, resolve_media_with_options};
pub use video::ensure_video_controls;
