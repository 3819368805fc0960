//! ヘッダーコンポーネント（タイトルと作品数・期間）

use kaihan_gallery_common::StatsView;
use leptos::prelude::*;

#[component]
pub fn Header(stats: RwSignal<Option<StatsView>>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"凯晗书画作品集"</h1>
            <p class="stats">{move || stats.get().map(|s| s.to_string())}</p>
        </header>
    }
}
