//! Declarative entrance and hover animation descriptors
//!
//! Descriptors hold no state. They render to inline CSS custom properties that
//! drive the shared `motion-enter` / `motion-hover` keyframes in the
//! stylesheet, so the same description plays in any CSS-capable renderer and
//! collapses to nothing when motion is reduced.

use std::fmt::Write;

/// Whether animations are played or dropped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    /// Render final frames immediately
    Reduced,
}

/// Easing curve for a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    /// Spring approximated by an overshooting cubic bezier
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)".to_string(),
            Easing::Spring { stiffness, damping } => {
                // Less damping relative to stiffness means more overshoot
                let ratio = (damping / stiffness.max(1.0)).clamp(0.01, 1.0);
                let overshoot = 1.0 + (1.0 - ratio) * 0.6;
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", overshoot)
            }
        }
    }
}

/// Visual properties at one end of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl MotionFrame {
    /// Fully visible, untransformed
    pub const IDENTITY: MotionFrame = MotionFrame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn hidden() -> Self {
        MotionFrame {
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

/// Timing of a single transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

/// Entrance of one element: from `initial` to `animate`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemMotion {
    pub initial: MotionFrame,
    pub animate: MotionFrame,
    pub transition: Transition,
}

impl ItemMotion {
    /// Inline style playing this entrance after `extra_delay_ms`
    pub fn style(&self, extra_delay_ms: u32, preference: MotionPreference) -> String {
        if preference == MotionPreference::Reduced {
            return String::new();
        }

        let mut style = String::new();
        let _ = write!(
            style,
            "--motion-from-opacity: {}; --motion-from-transform: {}; \
             --motion-to-opacity: {}; --motion-to-transform: {}; ",
            self.initial.opacity,
            self.initial.transform_css(),
            self.animate.opacity,
            self.animate.transform_css(),
        );
        let _ = write!(
            style,
            "animation: motion-enter {}ms {} {}ms both;",
            self.transition.duration_ms,
            self.transition.easing.css(),
            self.transition.delay_ms.saturating_add(extra_delay_ms),
        );
        style
    }
}

/// Staggered entrance policy for a group of siblings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Delay before the first child starts
    pub delay_children_ms: u32,
    /// Added per child after the first
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.stagger_children_ms.saturating_mul(index))
    }

    /// Style for child `index` entering with `item`
    pub fn child_style(
        &self,
        index: usize,
        item: &ItemMotion,
        preference: MotionPreference,
    ) -> String {
        item.style(self.delay_for(index), preference)
    }
}

/// Hover micro-animation for skill chips: scale pulse and rotation wobble
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverPulse {
    pub peak_scale: f32,
    pub rotate_deg: f32,
    pub duration_ms: u32,
}

impl HoverPulse {
    pub fn style(&self, preference: MotionPreference) -> String {
        if preference == MotionPreference::Reduced {
            return String::new();
        }
        format!(
            "--hover-scale: {}; --hover-rotate: {}deg; --hover-duration: {}ms;",
            self.peak_scale, self.rotate_deg, self.duration_ms
        )
    }
}

/// Container stagger for every content block
pub const CONTAINER: Stagger = Stagger {
    delay_children_ms: 300,
    stagger_children_ms: 200,
};

/// Child entrance: rise 20px and fade in on a spring
pub const ITEM: ItemMotion = ItemMotion {
    initial: MotionFrame::hidden().offset(0.0, 20.0),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(
        500,
        Easing::Spring {
            stiffness: 100.0,
            damping: 12.0,
        },
    ),
};

/// Whole page fades in once loading ends
pub const PAGE: ItemMotion = ItemMotion {
    initial: MotionFrame::hidden(),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(1000, Easing::EaseOut),
};

/// Hero heading drops in from above
pub const HEADLINE: ItemMotion = ItemMotion {
    initial: MotionFrame::IDENTITY.offset(0.0, -50.0),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(500, Easing::EaseOut),
};

/// Subtitle fades in after the heading
pub const SUBTITLE: ItemMotion = ItemMotion {
    initial: MotionFrame::hidden(),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(500, Easing::EaseOut).delayed(300),
};

/// Social links pop in last
pub const SOCIAL: ItemMotion = ItemMotion {
    initial: MotionFrame::IDENTITY.scaled(0.0),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(400, Easing::EaseOut).delayed(500),
};

/// Content block entrance, restarted whenever the section changes
pub const CONTENT: ItemMotion = ItemMotion {
    initial: MotionFrame::hidden().offset(0.0, 20.0),
    animate: MotionFrame::IDENTITY,
    transition: Transition::new(500, Easing::EaseOut),
};

pub const SKILL_CHIP_HOVER: HoverPulse = HoverPulse {
    peak_scale: 1.1,
    rotate_deg: 3.0,
    duration_ms: 500,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(CONTAINER.delay_for(0), 300);
        assert_eq!(CONTAINER.delay_for(1), 500);
        assert_eq!(CONTAINER.delay_for(3), 900);
    }

    #[test]
    fn test_stagger_saturates() {
        let stagger = Stagger {
            delay_children_ms: u32::MAX - 1,
            stagger_children_ms: 10,
        };
        assert_eq!(stagger.delay_for(5), u32::MAX);
    }

    #[test]
    fn test_item_style_contains_frames_and_timing() {
        let style = CONTAINER.child_style(2, &ITEM, MotionPreference::Full);
        assert!(style.contains("--motion-from-opacity: 0;"));
        assert!(style.contains("translate(0px, 20px)"));
        assert!(style.contains("animation: motion-enter 500ms"));
        assert!(style.ends_with("700ms both;"));
    }

    #[test]
    fn test_transition_delay_adds_to_stagger() {
        let style = SUBTITLE.style(100, MotionPreference::Full);
        assert!(style.ends_with("400ms both;"));
    }

    #[test]
    fn test_reduced_motion_renders_nothing() {
        assert!(ITEM.style(0, MotionPreference::Reduced).is_empty());
        assert!(SKILL_CHIP_HOVER.style(MotionPreference::Reduced).is_empty());
    }

    #[test]
    fn test_spring_easing_overshoots() {
        let css = ITEM.transition.easing.css();
        assert!(css.starts_with("cubic-bezier(0.34, "));
        let loose = Easing::Spring {
            stiffness: 100.0,
            damping: 5.0,
        };
        let stiff = Easing::Spring {
            stiffness: 100.0,
            damping: 100.0,
        };
        assert_ne!(loose.css(), stiff.css());
        assert_eq!(stiff.css(), "cubic-bezier(0.34, 1.00, 0.64, 1)");
    }

    #[test]
    fn test_hover_pulse_style() {
        let style = SKILL_CHIP_HOVER.style(MotionPreference::Full);
        assert_eq!(
            style,
            "--hover-scale: 1.1; --hover-rotate: 3deg; --hover-duration: 500ms;"
        );
    }

    #[test]
    fn test_identity_transform() {
        assert_eq!(
            MotionFrame::IDENTITY.transform_css(),
            "translate(0px, 0px) scale(1) rotate(0deg)"
        );
    }
}
