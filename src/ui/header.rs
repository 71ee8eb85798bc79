//! Hero header: name, headline and contact links

use leptos::prelude::*;

use crate::core::content::{CONTACTS, ContactLink, LinkKind, PROFILE};
use crate::core::motion;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

fn link_icon(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Email => icons::MAIL,
        LinkKind::Phone => icons::PHONE,
        LinkKind::GitHub => icons::GITHUB,
        LinkKind::LinkedIn => icons::LINKEDIN,
    }
}

#[component]
pub fn HeroHeader() -> impl IntoView {
    view! {
        <header class="text-center mb-16">
            <Motion motion=motion::HEADLINE>
                <h1 class="text-5xl md:text-7xl font-bold mb-4 text-gradient">{PROFILE.name}</h1>
            </Motion>
            <Motion motion=motion::SUBTITLE>
                <p class="text-xl text-gray-400 mb-8">{PROFILE.headline}</p>
            </Motion>
            <Motion motion=motion::SOCIAL class="flex justify-center gap-6 mt-8">
                {CONTACTS.iter().map(|link| view! { <ContactButton link=*link /> }).collect_view()}
            </Motion>
        </header>
    }
}

#[component]
fn ContactButton(link: ContactLink) -> impl IntoView {
    let (target, rel) = if link.is_external() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    view! {
        <a
            href=link.href()
            target=target
            rel=rel
            class="gradient-border"
            title=link.label
            aria-label=link.label
        >
            <div class="p-3 hover:text-cyber-neon transition-colors">
                <Icon name=link_icon(link.kind) class="w-6 h-6" />
            </div>
        </a>
    }
}
