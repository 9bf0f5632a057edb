// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single slide of the "how it works" sequence.

use std::num::NonZeroU32;

/// One step of the carousel.
///
/// Steps are plain immutable values. Their ordering inside a
/// [`StepCarousel`](crate::StepCarousel) is the order they were given in;
/// `id` is only a stable key for rendering and must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    pub id: NonZeroU32,
    pub title: String,
    pub content: String,
    /// Single glyph shown in the preview panel (usually an emoji).
    pub icon: String,
}

impl Step {
    /// Build a step. Returns `None` when `id` is zero.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        content: impl Into<String>,
        icon: impl Into<String>,
    ) -> Option<Self> {
        Some(Self {
            id: NonZeroU32::new(id)?,
            title: title.into(),
            content: content.into(),
            icon: icon.into(),
        })
    }

    /// Name of the first blank display field, if any.
    pub(crate) fn blank_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.content.trim().is_empty() {
            Some("content")
        } else if self.icon.trim().is_empty() {
            Some("icon")
        } else {
            None
        }
    }
}
