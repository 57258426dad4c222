//! Pointer-down target classification

/// Class carried by the resize handle element
pub const RESIZE_HANDLE_CLASS: &str = "resize-handle";

/// Child elements that keep their own pointer behaviour
pub const INTERACTIVE_TAGS: &[&str] = &[
    "input", "select", "button", "a", "textarea", "iframe", "label",
];

/// Where a pointer-down landed inside a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Plain widget surface: starts a drag
    Body,
    /// The resize handle: starts a resize
    ResizeHandle,
    /// A form control, link or embedded frame: no gesture
    Interactive,
}

impl PointerTarget {
    /// Classify an event target by tag name and class list
    pub fn classify(tag_name: &str, class_list: &str) -> Self {
        if class_list
            .split_whitespace()
            .any(|class| class == RESIZE_HANDLE_CLASS)
        {
            return PointerTarget::ResizeHandle;
        }

        let tag = tag_name.to_ascii_lowercase();
        if INTERACTIVE_TAGS.contains(&tag.as_str()) {
            PointerTarget::Interactive
        } else {
            PointerTarget::Body
        }
    }
}
