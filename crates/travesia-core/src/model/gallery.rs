use serde::{Deserialize, Serialize};

/// A gallery item, tagged once at the point where it enters the engine.
///
/// Exactly two constructors. The tag is assigned by the normalizer from the
/// raw wire shape; no downstream code ever re-derives "is this new?" by
/// shape-probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GalleryItem {
    /// Persisted image with a backend-assigned stable identifier.
    Existing {
        id: i64,
        /// Content reference (URL or opaque content id) as currently held.
        content: String,
        /// Display position, 1-based.
        order: u32,
        /// Content reference as fetched from the server, present only when
        /// the item was round-tripped unmodified through the edit UI. The
        /// fast-path equality check reads this instead of `content`, which
        /// the UI may have rewritten to a local blob reference.
        original_content: Option<String>,
    },
    /// Not-yet-persisted image carrying a raw local resource.
    New {
        raw_resource: String,
        /// Display position, 1-based.
        order: u32,
    },
}

impl GalleryItem {
    /// Display position of this item.
    pub fn order(&self) -> u32 {
        match self {
            GalleryItem::Existing { order, .. } => *order,
            GalleryItem::New { order, .. } => *order,
        }
    }

    /// True for the `New` variant.
    pub fn is_new(&self) -> bool {
        matches!(self, GalleryItem::New { .. })
    }

    /// Stable backend identifier, when persisted.
    pub fn stable_id(&self) -> Option<i64> {
        match self {
            GalleryItem::Existing { id, .. } => Some(*id),
            GalleryItem::New { .. } => None,
        }
    }

    /// The content reference to use for equality against the server side.
    ///
    /// Prefers `original_content` (the fetched reference) over `content`
    /// (which may be a local rewrite); `None` for new items.
    pub fn comparable_content(&self) -> Option<&str> {
        match self {
            GalleryItem::Existing {
                content,
                original_content,
                ..
            } => Some(original_content.as_deref().unwrap_or(content)),
            GalleryItem::New { .. } => None,
        }
    }
}
