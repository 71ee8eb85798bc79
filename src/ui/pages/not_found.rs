//! Not found page component
//!
//! A 404 page for any route other than the portfolio itself.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::PROFILE;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-cyber-dark flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 glass-panel rounded-full flex items-center justify-center">
                    <Icon name=icons::FILE_QUESTION class="w-12 h-12 text-cyber-neon" />
                </div>

                <h1 class="text-6xl font-bold text-gradient mb-4">"404"</h1>

                <p class="font-mono text-gray-400 mb-8 max-w-md mx-auto">
                    <span class="text-cyber-neon">"> "</span>
                    "Route not found. The requested resource is not part of this system."
                </p>

                <A href="/" attr:class="glass-panel px-6 py-3 uppercase text-sm tracking-wider nav-control-active">
                    "Return home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500 font-mono">{PROFILE.name}</p>
            </div>
        </div>
    }
}
