//! Motion context: whether entrance animations play
//!
//! Provides:
//! - MotionContext for the reactive motion preference
//! - Reduced-motion detection via prefers-reduced-motion
//! - Motion wrapper and stagger_style helper that apply the core descriptors

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

use crate::core::motion::{ItemMotion, MotionPreference, Stagger};

#[cfg(feature = "hydrate")]
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Motion context shared by every animated element
#[derive(Clone, Copy)]
pub struct MotionContext {
    pub preference: RwSignal<MotionPreference>,
}

impl MotionContext {
    pub fn new(preference: MotionPreference) -> Self {
        Self {
            preference: RwSignal::new(preference),
        }
    }
}

/// Detect the system reduced-motion preference
fn detect_system_preference() -> MotionPreference {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
                if media_query.matches() {
                    return MotionPreference::Reduced;
                }
            }
        }
    }
    MotionPreference::Full
}

/// Provide motion context to the application
pub fn provide_motion_context() -> MotionContext {
    let ctx = MotionContext::new(detect_system_preference());

    // Follow system preference changes
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
                    let preference = ctx.preference;
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            preference.set(if e.matches() {
                                MotionPreference::Reduced
                            } else {
                                MotionPreference::Full
                            });
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Keep the closure alive
                    handler.forget();
                }
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Use motion context, falling back to full motion outside the app root
pub fn use_motion_context() -> MotionContext {
    use_context::<MotionContext>().unwrap_or_else(|| MotionContext::new(MotionPreference::Full))
}

/// Element that plays `motion` once when mounted
#[component]
pub fn Motion(
    motion: ItemMotion,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let preference = use_motion_context().preference;
    let style = move || motion.style(0, preference.get());

    view! {
        <div class=format!("motion {}", class) style=style>
            {children()}
        </div>
    }
}

/// Style for the `index`-th child of a staggered group
pub fn stagger_style(
    stagger: Stagger,
    item: ItemMotion,
    index: usize,
) -> impl Fn() -> String + Send + Sync + Clone + 'static {
    let preference = use_motion_context().preference;
    move || stagger.child_style(index, &item, preference.get())
}
