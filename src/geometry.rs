//! Scroll-progress formulas shared by the scroll-driven effects.

use crate::host::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParallaxFrame {
    Tracking {
        offset: f64,
        opacity: f64,
        visible: bool,
    },
    /// Section still below the fold.
    Below,
    /// Section scrolled past; the last frame stays applied.
    Above,
}

pub fn parallax_frame(section: Rect, viewport_height: f64) -> ParallaxFrame {
    if section.top < viewport_height && section.bottom > 0.0 {
        let progress =
            ((viewport_height - section.top) / (viewport_height * 0.8)).clamp(0.0, 1.0);
        ParallaxFrame::Tracking {
            offset: (1.0 - progress) * 300.0,
            opacity: (progress * 0.15).min(0.12),
            visible: progress > 0.2,
        }
    } else if section.top >= viewport_height {
        ParallaxFrame::Below
    } else {
        ParallaxFrame::Above
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavGlass {
    Resting,
    Scrolled { blur: f64, alpha: f64 },
}

pub fn nav_glass_frame(header_bottom: f64, viewport_height: f64) -> NavGlass {
    if header_bottom > 0.0 {
        return NavGlass::Resting;
    }
    let scroll_past = header_bottom.abs();
    let progress = (scroll_past / (viewport_height * 0.5)).min(1.0);
    NavGlass::Scrolled {
        blur: progress * 12.0,
        alpha: (0.3 + progress * 0.5).min(0.85),
    }
}

/// Opacity of the section's background layer: fades in while the top edge
/// travels up the viewport, holds at 1 while the section covers it, fades out
/// with the bottom edge.
pub fn crossfade_progress(section: Rect, viewport_height: f64) -> f64 {
    if !(section.top < viewport_height && section.bottom > 0.0) {
        return 0.0;
    }
    let progress = if section.top >= 0.0 {
        1.0 - section.top / viewport_height
    } else if section.bottom <= viewport_height {
        section.bottom / viewport_height
    } else {
        1.0
    };
    progress.clamp(0.0, 1.0)
}
