//! 月ナビゲーション

use kaihan_gallery_common::NavLink;
use leptos::prelude::*;

#[component]
pub fn TimelineNav(nav: RwSignal<Option<Vec<NavLink>>>) -> impl IntoView {
    view! {
        <nav class="timeline-nav" class:hidden=move || nav.with(Option::is_none)>
            <For
                each=move || nav.get().unwrap_or_default()
                key=|link| link.anchor.clone()
                children=move |link| {
                    let href = link.href();
                    view! { <a href=href>{link.label}</a> }
                }
            />
        </nav>
    }
}
