//! Portfolio page
//!
//! [`PortfolioPage`] owns the view controller for the lifetime of the page;
//! [`PortfolioView`] renders whatever state it is given. In the browser the
//! controller runs on `BrowserScheduler`;
//! the server renders the initial loading state and hydration starts the timer.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{PROFILE, person_json_ld};
use crate::core::motion;
use crate::core::{Layout, Scheduler, Section, ViewController, ViewState};
use crate::ui::header::HeroHeader;
use crate::ui::icon::{Icon, icons};
use crate::ui::loading::LoadingScreen;
use crate::ui::motion::{Motion, use_motion_context};
use crate::ui::nav::SectionNav;
use crate::ui::sections::ContentBlock;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    #[cfg(feature = "hydrate")]
    let on_select = use_view_controller(crate::core::scheduler::BrowserScheduler, state);

    // Server render: no timer, the page stays in its initial state
    #[cfg(not(feature = "hydrate"))]
    let on_select = Callback::new(move |section: Section| {
        state.update(|state| {
            state.select_section(section);
        });
    });

    view! {
        <SeoMeta />
        <PortfolioView state=state on_select=on_select />
    }
}

/// Start the loading timer on `scheduler` and tie the controller to the
/// current reactive owner.
///
/// Every state change is written to `state`. Cleaning up the owner tears the
/// controller down, cancelling a timer that has not fired yet. The returned
/// callback selects a section and does nothing once the controller is
/// disposed.
pub fn use_view_controller<S>(scheduler: S, state: RwSignal<ViewState>) -> Callback<Section>
where
    S: Scheduler + 'static,
    S::Handle: 'static,
{
    let mut controller = ViewController::new(scheduler, move |next| state.set(next));
    controller.initialize();

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        controller.try_update_value(|controller| controller.teardown());
    });

    Callback::new(move |section: Section| {
        controller.try_with_value(|controller| {
            controller.select_section(section);
        });
    })
}

/// Render of a view state: loading placeholder, or header, navigation and
/// the active content block
#[component]
pub fn PortfolioView(
    #[prop(into)] state: Signal<ViewState>,
    on_select: Callback<Section>,
) -> impl IntoView {
    let loading = Memo::new(move |_| state.with(|state| state.loading));
    let layout = Memo::new(move |_| Layout::plan(&state.get()));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingScreen /> }>
            <ReadyView layout=layout on_select=on_select />
        </Show>
    }
}

#[component]
fn ReadyView(layout: Memo<Layout>, on_select: Callback<Section>) -> impl IntoView {
    let nav_items = Signal::derive(move || layout.with(|layout| layout.nav().to_vec()));
    let content = Memo::new(move |_| layout.with(|layout| layout.content_blocks().first().copied()));
    let preference = use_motion_context().preference;

    view! {
        <div class="min-h-screen bg-cyber-dark hero-gradient" data-view="ready">
            <Motion motion=motion::PAGE class="container mx-auto px-4 py-12">
                <GuidePanel />
                <HeroHeader />
                <SectionNav items=nav_items on_select=on_select />
                // Re-created on every section change, so the entrance restarts
                // and the previous block is dropped without an exit animation
                {move || {
                    content
                        .get()
                        .map(|section| {
                            view! {
                                <main
                                    class="glass-panel p-8 motion"
                                    data-active=section.id()
                                    style=move || motion::CONTENT.style(0, preference.get())
                                >
                                    <ContentBlock section=section />
                                </main>
                            }
                        })
                }}
            </Motion>
        </div>
    }
}

#[component]
fn GuidePanel() -> impl IntoView {
    view! {
        <div class="fixed bottom-8 right-8 glass-panel p-4 z-50">
            <div class="flex items-center gap-4">
                <Icon name=icons::BRAIN_CIRCUIT class="w-8 h-8 text-cyber-neon animate-pulse" />
                <div class="font-mono text-sm">
                    <p class="text-cyber-accent">"AI Guide: Ready to assist"</p>
                    <p class="text-xs text-gray-400">"Click sections to explore"</p>
                </div>
            </div>
        </div>
    }
}

/// SEO meta tags and JSON-LD person record
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} | Portfolio", PROFILE.name);
    let description = format!("{} - {}", PROFILE.name, PROFILE.headline);

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        <Meta property="og:type" content="profile" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        <script type="application/ld+json" inner_html=person_json_ld().to_string()></script>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::{LOADING_DELAY, ManualScheduler};
    use std::time::Duration;

    fn render(state: ViewState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_select = Callback::new(|_: Section| {});
            view! { <PortfolioView state=Signal::stored(state) on_select=on_select /> }.to_html()
        })
    }

    fn ready(section: Section) -> ViewState {
        let mut state = ViewState::new();
        state.finish_loading();
        state.select_section(section);
        state
    }

    #[test]
    fn test_loading_renders_placeholder_only() {
        let html = render(ViewState::new());
        assert!(html.contains("data-view=\"loading\""));
        assert!(html.contains("Initializing System..."));
        assert!(!html.contains("data-view=\"ready\""));
        assert!(!html.contains("data-content="));
    }

    #[test]
    fn test_each_section_renders_exactly_one_block() {
        for section in Section::ALL {
            let html = render(ready(section));
            assert!(html.contains("data-view=\"ready\""));
            assert_eq!(html.matches("data-content=").count(), 1);
            assert!(html.contains(&format!("data-content=\"{}\"", section.id())));
        }
    }

    #[test]
    fn test_navigation_marks_active_control() {
        let html = render(ready(Section::Skills));
        assert_eq!(html.matches("data-nav=").count(), 4);
        assert_eq!(html.matches("nav-control-active").count(), 1);
        assert!(html.contains("aria-selected=\"true\""));
    }

    #[test]
    fn test_skills_block_replaces_intro() {
        let html = render(ready(Section::Skills));
        assert!(html.contains("Skills.unlock()"));
        assert!(html.contains("Certifications"));
        assert!(!html.contains("data-content=\"intro\""));
    }

    #[test]
    fn test_header_links() {
        let html = render(ready(Section::Intro));
        assert!(html.contains(PROFILE.name));
        assert!(html.contains("href=\"mailto:hello@example.com\""));
        assert!(html.contains("href=\"tel:+15550100199\""));
        assert!(html.contains("href=\"https://github.com/yourusername\""));
    }

    #[test]
    fn test_live_controller_replaces_placeholder_after_delay() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::new();
            let state = RwSignal::new(ViewState::new());
            let on_select = use_view_controller(scheduler.clone(), state);
            let render = move || {
                view! { <PortfolioView state=state on_select=on_select /> }.to_html()
            };

            let before = render();
            assert!(before.contains("data-view=\"loading\""));
            assert!(!before.contains("data-view=\"ready\""));

            scheduler.advance(Duration::from_millis(1999));
            assert!(render().contains("data-view=\"loading\""));

            scheduler.advance(Duration::from_millis(1));
            let after = render();
            assert!(!after.contains("data-view=\"loading\""));
            assert!(after.contains("data-view=\"ready\""));
            assert!(after.contains("data-content=\"intro\""));
        });
    }

    #[test]
    fn test_live_controller_selects_section() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::new();
            let state = RwSignal::new(ViewState::new());
            let on_select = use_view_controller(scheduler.clone(), state);
            scheduler.advance(LOADING_DELAY);

            on_select.run(Section::Skills);
            let html = view! { <PortfolioView state=state on_select=on_select /> }.to_html();
            assert!(html.contains("data-content=\"skills\""));
            assert!(!html.contains("data-content=\"intro\""));
            assert_eq!(html.matches("data-content=").count(), 1);
        });
    }

    #[test]
    fn test_owner_cleanup_before_delay_keeps_placeholder() {
        let page = Owner::new();
        let scheduler = ManualScheduler::new();
        let state = page.with(|| RwSignal::new(ViewState::new()));

        let controller_scope = page.child();
        let on_select =
            controller_scope.with(|| use_view_controller(scheduler.clone(), state));
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance(Duration::from_millis(1500));
        controller_scope.cleanup();
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(LOADING_DELAY), 0);

        // The callback went away with its scope
        assert!(on_select.try_run(Section::Projects).is_none());

        page.with(|| {
            assert!(state.with_untracked(|state| state.loading));
            let on_select = Callback::new(|_: Section| {});
            let html = view! { <PortfolioView state=state on_select=on_select /> }.to_html();
            assert!(html.contains("data-view=\"loading\""));
            assert!(!html.contains("data-view=\"ready\""));
        });
    }
}
