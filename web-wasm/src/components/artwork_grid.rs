//! 月別の作品グリッド

use crate::components::empty_message::EmptyMessage;
use crate::surface::{GridContent, SignalSurface};
use kaihan_gallery_common::{CardView, MonthSection};
use leptos::prelude::*;

#[component]
pub fn ArtworkGrid<F>(surface: SignalSurface, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <main id="artworks-container">
            {move || match surface.grid.get() {
                GridContent::Loading => view! { <p class="loading">"加载中..."</p> }.into_any(),
                GridContent::Empty(notice) => view! { <EmptyMessage notice=notice /> }.into_any(),
                GridContent::Sections(sections) => sections
                    .into_iter()
                    .map(|section| {
                        let on_open = on_open.clone();
                        view! { <MonthSectionView section=section surface=surface on_open=on_open /> }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </main>
    }
}

#[component]
fn MonthSectionView<F>(section: MonthSection, surface: SignalSurface, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let cards = section
        .cards
        .into_iter()
        .map(|card| {
            let on_open = on_open.clone();
            view! { <ArtworkCard card=card surface=surface on_open=on_open /> }
        })
        .collect_view();

    view! {
        <section class="month-section" id=section.anchor>
            <h2 class="month-header">{section.key}</h2>
            <div class="artworks-grid">{cards}</div>
        </section>
    }
}

/// 作品カード（コメント数表示は表示面のシグナルで個別に更新される）
#[component]
fn ArtworkCard<F>(card: CardView, surface: SignalSurface, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let comment_label = {
        let artwork_id = card.artwork_id.clone();
        move || surface.card_count(&artwork_id)
    };
    let badge_class = format!("confidence-badge {}", card.confidence_class);

    view! {
        <div
            class="artwork-card"
            data-id=card.artwork_id.clone()
            on:click={
                let artwork_id = card.artwork_id.clone();
                move |_| on_open(artwork_id.clone())
            }
        >
            <div class="artwork-image-container">
                <img class="artwork-image" src=card.image_path alt=card.alt loading="lazy" />
            </div>
            <div class="artwork-info">
                {card.title.map(|title| view! { <div class="artwork-title">{title}</div> })}
                <div class="artwork-date">
                    <span class=badge_class></span>
                    {card.date_display}
                </div>
                <div class="artwork-comments-count">{comment_label}</div>
            </div>
        </div>
    }
}
