//! Human-readable summary renderer for package diffs.
//!
//! Backs the edit console's live "pending changes" indicator. Informational
//! only; never feeds back into the structured diff or the payload.

use crate::diff::model::{GalleryChanges, GalleryUpdateReason, HotelChanges, PackageDiff};

/// Render a short Markdown/text summary of a [`PackageDiff`].
pub fn render_human_summary(diff: &PackageDiff) -> String {
    let mut out = String::new();

    out.push_str("## Pending changes\n\n");

    if !diff.has_changes() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    if !diff.scalar_changes.is_empty() {
        out.push_str(&format!(
            "- **Fields** ({}): {}\n",
            diff.scalar_changes.len(),
            diff.scalar_changes
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if diff.destination_changes.changed {
        out.push_str(&format!(
            "- **Destinations**: list replaced ({} stops)\n",
            diff.destination_changes.replacement.len()
        ));
    }

    match &diff.gallery_changes {
        GalleryChanges::NoChange => {}
        GalleryChanges::OrderOnly { order } => {
            out.push_str(&format!(
                "- **Images**: only display order changed ({} items)\n",
                order.len()
            ));
        }
        GalleryChanges::FullUpdate { reason } => {
            let label = match reason {
                GalleryUpdateReason::CountDiffers => "count differs",
                GalleryUpdateReason::NewImagesPresent => "new images present",
                GalleryUpdateReason::ContentChanged => "image content changed",
                GalleryUpdateReason::ItemsReplaced => "images replaced",
            };
            out.push_str(&format!("- **Images**: full update ({label})\n"));
        }
    }

    if diff.wholesaler_changes.changed {
        out.push_str(&format!(
            "- **Wholesalers**: association replaced ({} ids)\n",
            diff.wholesaler_changes.replacement.len()
        ));
    }

    match diff.hotel_changes {
        HotelChanges::Unchanged => {}
        HotelChanges::Attached => out.push_str("- **Hotel**: attached\n"),
        HotelChanges::Detached => out.push_str("- **Hotel**: removed\n"),
        HotelChanges::IdentityChanged => out.push_str("- **Hotel**: changed\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_changes_summary() {
        let summary = render_human_summary(&PackageDiff::default());
        assert!(summary.contains("No changes detected"));
    }

    #[test]
    fn test_changed_fields_listed() {
        let mut diff = PackageDiff::default();
        diff.scalar_changes
            .insert("titulo".to_string(), serde_json::json!("Cancún 7 días"));
        let summary = render_human_summary(&diff);
        assert!(summary.contains("titulo"));
        assert!(!summary.contains("No changes detected"));
    }
}
