use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Full-screen placeholder shown while the view is loading
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="h-screen bg-cyber-dark flex items-center justify-center" data-view="loading">
            <div class="text-cyber-neon animate-pulse flex flex-col items-center" role="status" aria-live="polite">
                <Icon name=icons::TERMINAL class="w-16 h-16 animate-spin" />
                <p class="mt-4 font-mono">"Initializing System..."</p>
            </div>
        </div>
    }
}
