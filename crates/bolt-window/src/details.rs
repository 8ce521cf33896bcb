//! Geometry and chrome options for a top-level window.

/// Parameters the host uses to build the on-screen window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDetails {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub preferred_width: u32,
    pub preferred_height: u32,
    pub startx: i32,
    pub starty: i32,
    pub resizeable: bool,
    pub frame: bool,
    /// Window hosts its app in a content iframe below the borderless overlay chrome.
    pub controls_overlay: bool,
}

impl Default for WindowDetails {
    fn default() -> Self {
        Self {
            min_width: 250,
            min_height: 180,
            max_width: 1000,
            max_height: 1000,
            preferred_width: 800,
            preferred_height: 608,
            startx: 100,
            starty: 100,
            resizeable: true,
            frame: true,
            controls_overlay: true,
        }
    }
}

impl WindowDetails {
    /// Clamps the preferred size into the min/max bounds.
    pub fn clamped_size(&self) -> (u32, u32) {
        let width = self
            .preferred_width
            .clamp(self.min_width, self.max_width.max(self.min_width));
        let height = self
            .preferred_height
            .clamp(self.min_height, self.max_height.max(self.min_height));
        (width, height)
    }
}
