use leptos::prelude::*;

use crate::core::{NavItem, Section};

/// Navigation bar switching between content sections
#[component]
pub fn SectionNav(
    /// One control per section, in order, with the active flag already resolved
    items: Signal<Vec<NavItem>>,
    /// Called with the section of the activated control
    on_select: Callback<Section>,
) -> impl IntoView {
    view! {
        <nav class="mb-16">
            <ul class="flex justify-center gap-6 flex-wrap" role="tablist">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let is_active = Signal::derive(move || {
                            items.with(|items| {
                                items.iter().any(|item| item.section == section && item.active)
                            })
                        });

                        let button_class = move || {
                            if is_active.get() {
                                "nav-control nav-control-active"
                            } else {
                                "nav-control"
                            }
                        };

                        view! {
                            <li class="nav-item">
                                <button
                                    class=button_class
                                    role="tab"
                                    data-nav=section.id()
                                    aria-selected=move || is_active.get().to_string()
                                    on:click=move |_| on_select.run(section)
                                >
                                    {section.id()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
