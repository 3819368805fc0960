//! メインアプリケーションコンポーネント

use crate::api::artworks::HttpSource;
use crate::components::{
    artwork_grid::ArtworkGrid, artwork_modal::ArtworkModal, header::Header,
    timeline_nav::TimelineNav,
};
use crate::storage::LocalStorageBackend;
use crate::surface::SignalSurface;
use kaihan_gallery_common::{load, CommentStore, GallerySession, ModalCommand, DATA_URL};
use leptos::prelude::*;

type Session = GallerySession<LocalStorageBackend>;

#[component]
pub fn App() -> impl IntoView {
    let surface = SignalSurface::new();
    let session = StoredValue::new(None::<Session>);

    // 作品データ読み込み（起動時に1回）
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = load(&HttpSource::new(DATA_URL)).await;
        let mut target = surface;
        let started = GallerySession::start(loaded, CommentStore::new(LocalStorageBackend), &mut target);
        session.set_value(started);
    });

    // モーダル操作はすべてセッションへ
    let dispatch = move |command: ModalCommand| {
        let mut target = surface;
        session.update_value(|current| {
            if let Some(current) = current.as_mut() {
                current.dispatch(command, &mut target);
            }
        });
    };

    view! {
        <div class="container">
            <Header stats=surface.stats />
            <TimelineNav nav=surface.nav />
            <ArtworkGrid surface=surface on_open=move |artwork_id| dispatch(ModalCommand::Open(artwork_id)) />
            <ArtworkModal surface=surface dispatch=dispatch />
        </div>
    }
}
