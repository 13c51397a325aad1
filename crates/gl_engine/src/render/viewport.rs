//! Viewport state pushed into the GL context

use super::graphics::GraphicsApi;

/// Rectangle of the framebuffer that rendered output is mapped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Viewport covering the whole framebuffer
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Default resize callback: map output onto the whole new framebuffer
///
/// No letterboxing, no aspect-ratio preservation.
pub fn fit_viewport<G: GraphicsApi + ?Sized>(graphics: &mut G, width: u32, height: u32) {
    graphics.set_viewport(Viewport::full(width, height));
}
