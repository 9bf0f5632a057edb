// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline styles shared by several sections, plus the class palette for
//! content tones.

use foodsave_types::content::Tone;

pub const BRAND_GRADIENT: &str =
    "background: linear-gradient(135deg, hsl(179 100% 19%), hsl(179 100% 16%));";
pub const BRAND_GRADIENT_LIGHT: &str =
    "background: linear-gradient(135deg, hsl(179 100% 16%), hsl(179 80% 25%));";
pub const STAT_CARD: &str = "background: linear-gradient(135deg, rgba(255,255,255,0.1), rgba(255,255,255,0.05)); \
     backdrop-filter: blur(10px); border: 1px solid rgba(255,255,255,0.1);";
pub const IMPACT_NUMBER: &str = "background: linear-gradient(135deg, hsl(45 85% 55%), hsl(120 70% 45%)); \
     -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;";
/// Yellow used for the active step title.
pub const STEP_TITLE: &str = "color: rgb(252, 247, 98);";

/// Left-border accent for light category cards.
pub fn border_accent(tone: Tone) -> &'static str {
    match tone {
        Tone::Teal => "border-teal-600",
        Tone::Green => "border-green-600",
        Tone::Yellow => "border-yellow-600",
        Tone::Red => "border-red-600",
        Tone::Blue => "border-blue-600",
        Tone::Purple => "border-purple-600",
    }
}

pub fn heading_text(tone: Tone) -> &'static str {
    match tone {
        Tone::Teal => "text-teal-800",
        Tone::Green => "text-green-800",
        Tone::Yellow => "text-yellow-800",
        Tone::Red => "text-red-800",
        Tone::Blue => "text-blue-800",
        Tone::Purple => "text-purple-800",
    }
}

/// Classes for the tinted impact cards: (card, value, caption).
pub fn tinted_card(tone: Tone) -> (&'static str, &'static str, &'static str) {
    match tone {
        Tone::Red => (
            "from-red-50 to-red-100 border-red-200",
            "text-red-600",
            "text-red-700",
        ),
        Tone::Blue => (
            "from-blue-50 to-blue-100 border-blue-200",
            "text-blue-600",
            "text-blue-700",
        ),
        Tone::Green => (
            "from-green-50 to-green-100 border-green-200",
            "text-green-600",
            "text-green-700",
        ),
        Tone::Purple => (
            "from-purple-50 to-purple-100 border-purple-200",
            "text-purple-600",
            "text-purple-700",
        ),
        Tone::Teal => (
            "from-teal-50 to-teal-100 border-teal-200",
            "text-teal-600",
            "text-teal-700",
        ),
        Tone::Yellow => (
            "from-yellow-50 to-yellow-100 border-yellow-200",
            "text-yellow-600",
            "text-yellow-700",
        ),
    }
}

/// Background of the round icon badge in the solution cards.
pub fn badge_background(tone: Tone) -> &'static str {
    match tone {
        Tone::Yellow => "bg-yellow-400",
        Tone::Green => "bg-green-400",
        Tone::Blue => "bg-blue-400",
        Tone::Teal => "bg-teal-400",
        Tone::Red => "bg-red-400",
        Tone::Purple => "bg-purple-400",
    }
}
