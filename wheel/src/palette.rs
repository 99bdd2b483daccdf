//! Segment colours and theme-dependent chrome colours.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Fixed segment palette. Options take `PALETTE[color_index]`.
pub const PALETTE: [&str; 20] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2", "#F8B739", "#52B788",
    "#FF8B94", "#A8DADC", "#E76F51", "#2A9D8F", "#E9C46A", "#F4A261", "#8E7CC3", "#6A994E", "#BC4749", "#457B9D",
];

/// Separator, label, and rim colour drawn over the wedges.
pub const SEPARATOR_COLOR: &str = "#ffffff";

/// Palette slot for the `n`th option added to a store holding `count` entries.
#[must_use]
pub fn color_index_for(count: usize) -> usize {
    count % PALETTE.len()
}

/// CSS colour for a palette slot. Out-of-range slots wrap.
#[must_use]
pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Page colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value stored in `localStorage` and written to `data-theme`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Colours for the placeholder disc drawn when there are no options.
    #[must_use]
    pub fn empty_wheel(self) -> EmptyWheelColors {
        match self {
            Self::Dark => EmptyWheelColors { fill: "#334155", stroke: "#475569", text: "#94a3b8" },
            Self::Light => EmptyWheelColors { fill: "#e2e8f0", stroke: "#cbd5e1", text: "#64748b" },
        }
    }
}

/// Fill, rim, and caption colours of the empty wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWheelColors {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub text: &'static str,
}
