//! 作品なし・読み込み失敗の案内

use kaihan_gallery_common::EmptyNotice;
use leptos::prelude::*;

#[component]
pub fn EmptyMessage(notice: EmptyNotice) -> impl IntoView {
    view! {
        <div class="empty-message">
            <h2>{notice.title()}</h2>
            {notice
                .hints()
                .iter()
                .map(|hint| view! { <p>{*hint}</p> })
                .collect_view()}
        </div>
    }
}
