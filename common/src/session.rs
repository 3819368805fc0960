//! ギャラリーのセッション
//!
//! 読み込んだ作品コレクション（不変）とコメントストアを `GalleryContext` にまとめ、
//! モーダル制御と一緒に `GallerySession` として保持する。
//! グローバル変数は使わず、テストでは独立したセッションを作れる。

use crate::clock::{Clock, SystemClock};
use crate::comment_store::CommentStore;
use crate::error::Result;
use crate::modal::{ModalCommand, ModalController, ModalState};
use crate::renderer::{render_empty, GalleryRenderer};
use crate::storage::Storage;
use crate::types::ArtworkCollection;
use crate::view::{EmptyNotice, ViewSurface};

pub struct GalleryContext<S, C = SystemClock> {
    pub collection: ArtworkCollection,
    pub store: CommentStore<S, C>,
}

impl<S: Storage, C: Clock> GalleryContext<S, C> {
    pub fn new(collection: ArtworkCollection, store: CommentStore<S, C>) -> Self {
        Self { collection, store }
    }
}

pub struct GallerySession<S, C = SystemClock> {
    context: GalleryContext<S, C>,
    modal: ModalController,
}

impl<S: Storage, C: Clock> GallerySession<S, C> {
    pub fn new(context: GalleryContext<S, C>) -> Self {
        Self {
            context,
            modal: ModalController::new(),
        }
    }

    /// 読み込み結果からセッションを開始して初回描画する
    ///
    /// 読み込み失敗時は案内を表示して None。
    pub fn start(
        loaded: Result<ArtworkCollection>,
        store: CommentStore<S, C>,
        surface: &mut impl ViewSurface,
    ) -> Option<Self> {
        match loaded {
            Ok(collection) => {
                let session = Self::new(GalleryContext::new(collection, store));
                session.render(surface);
                Some(session)
            }
            Err(e) => {
                tracing::error!(error = %e, "gallery unavailable");
                render_empty(EmptyNotice::LoadFailed, surface);
                None
            }
        }
    }

    pub fn render(&self, surface: &mut impl ViewSurface) {
        GalleryRenderer::new(&self.context).render(surface);
    }

    pub fn dispatch(&mut self, command: ModalCommand, surface: &mut impl ViewSurface) {
        self.modal.dispatch(command, &mut self.context, surface);
    }

    pub fn context(&self) -> &GalleryContext<S, C> {
        &self.context
    }

    pub fn modal_state(&self) -> &ModalState {
        self.modal.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::comment_store::STORAGE_KEY;
    use crate::error::Error;
    use crate::grouper::group_by_month;
    use crate::storage::MemoryStorage;
    use crate::testing::{artwork, china_clock, collection, RecordingSurface};
    use crate::view::CommentListView;

    const MAY_20: i64 = 1_716_168_600_000; // 2024-05-20 09:30 (UTC+8)
    const MAY_01: i64 = 1_714_527_000_000; // 2024-05-01 09:30 (UTC+8)
    const APR_10: i64 = 1_712_719_800_000; // 2024-04-10 11:30 (UTC+8)

    fn store(storage: MemoryStorage) -> CommentStore<MemoryStorage, ManualClock> {
        CommentStore::with_clock(storage, china_clock(MAY_20))
    }

    fn gallery() -> ArtworkCollection {
        let mut a1 = artwork("a1", MAY_20);
        a1.title = Some("静夜思".to_string());
        let a2 = artwork("a2", MAY_01);
        let mut a3 = artwork("a3", APR_10);
        a3.title = Some("未命名作品".to_string());
        collection(vec![a1, a2, a3])
    }

    #[test]
    fn test_grid_matches_grouper() {
        let collection = gallery();
        let expected: Vec<(String, Vec<String>)> = group_by_month(&collection.artworks, &china_clock(0))
            .into_iter()
            .map(|g| (g.key, g.artworks.iter().map(|a| a.id.clone()).collect()))
            .collect();

        let mut surface = RecordingSurface::default();
        GallerySession::start(Ok(collection), store(MemoryStorage::new()), &mut surface);

        let rendered: Vec<(String, Vec<String>)> = surface
            .sections
            .unwrap()
            .into_iter()
            .map(|s| (s.key, s.cards.into_iter().map(|c| c.artwork_id).collect()))
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_missing_document_yields_no_comments() {
        let mut surface = RecordingSurface::default();
        let session = GallerySession::start(Ok(gallery()), store(MemoryStorage::new()), &mut surface)
            .expect("セッション開始失敗");
        for artwork in &session.context().collection.artworks {
            assert!(session.context().store.read(&artwork.id).is_empty());
        }
        assert!(surface.empty.is_none());
    }

    #[test]
    fn test_corrupted_document_yields_no_comments() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "{\"a1\": {\"comments\": 3}");
        let mut surface = RecordingSurface::default();
        let session = GallerySession::start(Ok(gallery()), store(storage), &mut surface)
            .expect("セッション開始失敗");
        for artwork in &session.context().collection.artworks {
            assert!(session.context().store.read(&artwork.id).is_empty());
        }
        assert_eq!(surface.card("a1").unwrap().title.as_deref(), Some("静夜思"));
        assert_eq!(surface.card("a3").unwrap().title, None);
    }

    // シナリオA: 作品0件
    #[test]
    fn test_scenario_no_artworks() {
        let mut surface = RecordingSurface::default();
        let session = GallerySession::start(Ok(collection(vec![])), store(MemoryStorage::new()), &mut surface);

        assert!(session.is_some());
        assert_eq!(surface.empty, Some(EmptyNotice::NoArtworks));
        assert!(surface.nav_hidden);
        assert!(surface.nav.is_none());
    }

    // シナリオB: 取得が404
    #[test]
    fn test_scenario_load_failed() {
        let mut surface = RecordingSurface::default();
        let session = GallerySession::start(Err(Error::HttpStatus(404)), store(MemoryStorage::new()), &mut surface);

        assert!(session.is_none());
        assert_eq!(surface.empty, Some(EmptyNotice::LoadFailed));
        assert!(surface.sections.is_none());
    }

    // シナリオC: コメント0件の作品に追加してから開く
    #[test]
    fn test_scenario_first_comment_becomes_title() {
        let mut surface = RecordingSurface::default();
        let mut session = GallerySession::start(Ok(gallery()), store(MemoryStorage::new()), &mut surface)
            .expect("セッション開始失敗");

        session.dispatch(ModalCommand::Open("a2".to_string()), &mut surface);
        session.dispatch(ModalCommand::Submit("Hello".to_string()), &mut surface);
        session.dispatch(ModalCommand::Close, &mut surface);
        session.dispatch(ModalCommand::Open("a2".to_string()), &mut surface);

        let detail = surface.modal.as_ref().unwrap();
        assert!(detail.heading.starts_with("Hello - "));
        assert_eq!(surface.card_counts.get("a2"), Some(&None));

        // 全体を再描画しても同じ
        session.render(&mut surface);
        let card = surface.card("a2").unwrap();
        assert_eq!(card.title.as_deref(), Some("Hello"));
        assert_eq!(card.comment_label, None);
    }

    // シナリオD: ["Hello", "Nice"] → "Hello" を削除
    #[test]
    fn test_scenario_delete_first_comment() {
        let mut surface = RecordingSurface::default();
        let mut session = GallerySession::start(Ok(gallery()), store(MemoryStorage::new()), &mut surface)
            .expect("セッション開始失敗");

        session.dispatch(ModalCommand::Open("a1".to_string()), &mut surface);
        session.dispatch(ModalCommand::Submit("Hello".to_string()), &mut surface);
        session.dispatch(ModalCommand::Submit("Nice".to_string()), &mut surface);
        assert_eq!(surface.card_counts.get("a1"), Some(&Some("💬 1 条评论".to_string())));

        session.render(&mut surface);
        assert_eq!(surface.card("a1").unwrap().comment_label.as_deref(), Some("💬 1 条评论"));
        assert_eq!(surface.card("a1").unwrap().title.as_deref(), Some("Hello"));

        let hello = session.context().store.read("a1")[0].id.clone();
        session.dispatch(
            ModalCommand::Delete {
                artwork_id: "a1".to_string(),
                comment_id: hello,
            },
            &mut surface,
        );
        assert_eq!(surface.card_counts.get("a1"), Some(&None));
        match surface.comments.as_ref() {
            Some(CommentListView::Items(items)) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].text, "Nice");
            }
            other => panic!("unexpected comments: {:?}", other),
        }

        // "Nice" が新しいタイトルになる
        session.render(&mut surface);
        assert_eq!(surface.card("a1").unwrap().title.as_deref(), Some("Nice"));
        assert_eq!(surface.card("a1").unwrap().comment_label, None);

        // 全部消すとOCRタイトルに戻る
        let nice = session.context().store.read("a1")[0].id.clone();
        session.dispatch(
            ModalCommand::Delete {
                artwork_id: "a1".to_string(),
                comment_id: nice,
            },
            &mut surface,
        );
        session.render(&mut surface);
        assert_eq!(surface.card("a1").unwrap().title.as_deref(), Some("静夜思"));
        assert_eq!(surface.comments, Some(CommentListView::Empty));
    }

    // シナリオE: 同じ年月は1グループ、別の月は別グループ
    #[test]
    fn test_scenario_month_groups() {
        let mut surface = RecordingSurface::default();
        GallerySession::start(Ok(gallery()), store(MemoryStorage::new()), &mut surface);

        let sections = surface.sections.as_ref().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].key, "2024年05月");
        assert_eq!(sections[0].cards.len(), 2);
        assert_eq!(sections[1].key, "2024年04月");
        assert_eq!(sections[1].cards.len(), 1);
        assert_ne!(sections[0].key, sections[1].key);
    }

    #[test]
    fn test_write_failure_does_not_break_session() {
        let mut surface = RecordingSurface::default();
        let mut session = GallerySession::start(Ok(gallery()), store(MemoryStorage::new()), &mut surface)
            .expect("セッション開始失敗");
        session.context.store.storage_mut().set_quota_exceeded(true);

        session.dispatch(ModalCommand::Open("a1".to_string()), &mut surface);
        session.dispatch(ModalCommand::Submit("lost".to_string()), &mut surface);

        assert_eq!(surface.comments, Some(CommentListView::Empty));
        assert_eq!(session.modal_state(), &ModalState::Open("a1".to_string()));
    }
}
