//! Scroll-driven values for the progress bar, parallax layers and glow.

use crate::constants::*;
use std::f32::consts::TAU;

/// Fraction of the page scrolled, in `[0, 1]`. An unscrollable page is at 0.
pub fn scroll_progress(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

pub fn progress_bar_width(progress: f32) -> String {
    format!("{}%", progress * 100.0)
}

/// Whether a box spanning `top..bottom` (viewport coordinates) is on screen.
#[inline]
pub fn in_viewport(top: f32, bottom: f32, viewport_height: f32) -> bool {
    bottom > 0.0 && top < viewport_height
}

#[inline]
pub fn hero_offset(scrolled: f32) -> f32 {
    scrolled * HERO_PARALLAX_RATE
}

/// Background offset for the `index`-th content section (technology,
/// services, case studies); deeper sections move faster.
#[inline]
pub fn section_background_offset(scrolled: f32, offset_top: f32, index: usize) -> f32 {
    let speed = SECTION_PARALLAX_BASE + index as f32 * SECTION_PARALLAX_STEP;
    -(scrolled - offset_top) * speed
}

/// The team section drifts slower; `index` is its position among all
/// parallax sections.
#[inline]
pub fn team_background_offset(scrolled: f32, offset_top: f32, index: usize) -> f32 {
    let speed = TEAM_PARALLAX_BASE + index as f32 * TEAM_PARALLAX_STEP;
    -(scrolled - offset_top) * speed
}

#[inline]
pub fn icon_float_offset(scrolled: f32, index: usize) -> f32 {
    (scrolled * ICON_FLOAT_FREQUENCY + index as f32).sin() * ICON_FLOAT_AMPLITUDE
}

/// How close a box centre is to the middle of the viewport: 1 at the
/// middle, falling linearly to 0 at either edge and beyond.
pub fn center_proximity(center_y: f32, viewport_height: f32) -> f32 {
    let half = viewport_height / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    (1.0 - (center_y - half).abs() / half).max(0.0)
}

#[inline]
pub fn card_float_offset(scrolled: f32, index: usize, proximity: f32) -> f32 {
    (scrolled * ICON_FLOAT_FREQUENCY + index as f32).sin() * CARD_FLOAT_AMPLITUDE * proximity
}

pub fn card_glow_shadow(proximity: f32) -> String {
    format!(
        "0 0 {}px rgba(0, 122, 255, {})",
        proximity * CARD_GLOW_BLUR,
        proximity * CARD_GLOW_ALPHA
    )
}

/// Glow intensity in `[0, 1]`, one full cycle over the page.
#[inline]
pub fn glow_intensity(progress: f32) -> f32 {
    (progress * TAU).sin() * 0.5 + 0.5
}

pub fn glow_text_shadow(intensity: f32) -> String {
    format!(
        "0 0 {}px rgba(0, 122, 255, {})",
        GLOW_BLUR_BASE + intensity * GLOW_BLUR_SPAN,
        GLOW_ALPHA_BASE + intensity * GLOW_ALPHA_SPAN
    )
}

pub fn dynamic_hue(progress: f32) -> u32 {
    HUE_BASE + (progress.clamp(0.0, 1.0) * HUE_SPAN).floor() as u32
}

pub fn dynamic_color(progress: f32) -> String {
    format!("hsl({}, 70%, 60%)", dynamic_hue(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn unscrollable_page_has_zero_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn bar_width_is_percent() {
        assert_eq!(progress_bar_width(0.25), "25%");
        assert_eq!(progress_bar_width(1.0), "100%");
    }

    #[test]
    fn sections_scroll_at_increasing_speed() {
        let a = section_background_offset(1500.0, 1000.0, 0);
        let b = section_background_offset(1500.0, 1000.0, 2);
        assert!((a + 250.0).abs() < 1e-3);
        assert!((b + 350.0).abs() < 1e-3);
    }

    #[test]
    fn team_section_drifts_slower() {
        // fourth parallax section overall
        let team = team_background_offset(1500.0, 1000.0, 3);
        assert!((team + 125.0).abs() < 1e-3);
        assert!(team > section_background_offset(1500.0, 1000.0, 0));
    }

    #[test]
    fn proximity_peaks_at_viewport_middle() {
        assert_eq!(center_proximity(400.0, 800.0), 1.0);
        assert!((center_proximity(200.0, 800.0) - 0.5).abs() < 1e-6);
        assert!((center_proximity(600.0, 800.0) - 0.5).abs() < 1e-6);
        assert_eq!(center_proximity(0.0, 800.0), 0.0);
        assert_eq!(center_proximity(-300.0, 800.0), 0.0);
        assert_eq!(center_proximity(1200.0, 800.0), 0.0);
        assert_eq!(center_proximity(10.0, 0.0), 0.0);
    }

    #[test]
    fn cards_float_only_near_the_middle() {
        let scrolled = 157.0;
        let full = card_float_offset(scrolled, 1, 1.0);
        assert!((full - (1.57f32 + 1.0).sin() * 3.0).abs() < 1e-4);
        assert!((card_float_offset(scrolled, 1, 0.5) - full * 0.5).abs() < 1e-4);
        assert_eq!(card_float_offset(scrolled, 1, 0.0), 0.0);
    }

    #[test]
    fn card_glow_scales_with_proximity() {
        assert_eq!(card_glow_shadow(1.0), "0 0 30px rgba(0, 122, 255, 0.3)");
        assert_eq!(card_glow_shadow(0.0), "0 0 0px rgba(0, 122, 255, 0)");
        assert_eq!(card_glow_shadow(0.5), "0 0 15px rgba(0, 122, 255, 0.15)");
    }

    #[test]
    fn hue_spans_blue_to_purple() {
        assert_eq!(dynamic_hue(0.0), 200);
        assert_eq!(dynamic_hue(0.5), 230);
        assert_eq!(dynamic_hue(1.0), 260);
        assert_eq!(dynamic_color(0.0), "hsl(200, 70%, 60%)");
    }

    #[test]
    fn glow_midpoint_at_page_ends() {
        assert!((glow_intensity(0.0) - 0.5).abs() < 1e-6);
        assert!((glow_intensity(0.25) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_test_excludes_boxes_above_and_below() {
        assert!(in_viewport(-10.0, 20.0, 800.0));
        assert!(!in_viewport(-100.0, 0.0, 800.0));
        assert!(!in_viewport(800.0, 900.0, 800.0));
    }
}
