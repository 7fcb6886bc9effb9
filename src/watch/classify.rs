// src/watch/classify.rs

//! Mapping from raw `notify` event kinds to [`EventCategory`] values.

use notify::EventKind;
use notify::event::ModifyKind;

use crate::types::{EventCategory, EventMask};

/// Classify a raw event kind.
///
/// Returns the (possibly empty) set of categories the kind belongs to.
/// Metadata-only changes, access notifications and unknown kinds map to no
/// category, so no mask can enable them.
pub fn classify(kind: &EventKind) -> EventMask {
    match kind {
        EventKind::Create(_) => EventMask::NONE.with(EventCategory::Create),
        EventKind::Modify(ModifyKind::Name(_)) => EventMask::NONE.with(EventCategory::Rename),
        EventKind::Modify(ModifyKind::Metadata(_)) => EventMask::NONE,
        EventKind::Modify(_) => EventMask::NONE.with(EventCategory::Modify),
        EventKind::Remove(_) => EventMask::NONE.with(EventCategory::Delete),
        EventKind::Access(_) | EventKind::Any | EventKind::Other => EventMask::NONE,
    }
}

/// True if at least one category of `kind` is enabled in `mask`.
pub fn enabled_by(kind: &EventKind, mask: EventMask) -> bool {
    classify(kind).intersects(mask)
}
