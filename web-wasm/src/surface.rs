//! シグナルで実装した表示面
//!
//! コアから渡される表示モデルをシグナルに入れ、各コンポーネントが購読する。

use kaihan_gallery_common::{
    CommentListView, EmptyNotice, ModalDetail, MonthSection, NavLink, StatsView, ViewSurface,
};
use leptos::prelude::*;
use std::collections::HashMap;

/// グリッド領域の内容
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Loading,
    Empty(EmptyNotice),
    Sections(Vec<MonthSection>),
}

#[derive(Clone, Copy)]
pub struct SignalSurface {
    pub stats: RwSignal<Option<StatsView>>,
    /// None なら月ナビを隠す
    pub nav: RwSignal<Option<Vec<NavLink>>>,
    pub grid: RwSignal<GridContent>,
    /// 作品ID → コメント数表示
    pub card_counts: RwSignal<HashMap<String, Option<String>>>,
    pub modal: RwSignal<Option<ModalDetail>>,
    pub comments: RwSignal<CommentListView>,
    /// コメント入力欄
    pub draft: RwSignal<String>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            stats: RwSignal::new(None),
            nav: RwSignal::new(None),
            grid: RwSignal::new(GridContent::Loading),
            card_counts: RwSignal::new(HashMap::new()),
            modal: RwSignal::new(None),
            comments: RwSignal::new(CommentListView::Empty),
            draft: RwSignal::new(String::new()),
        }
    }

    pub fn card_count(&self, artwork_id: &str) -> Option<String> {
        self.card_counts
            .with(|counts| counts.get(artwork_id).cloned().flatten())
    }
}

impl ViewSurface for SignalSurface {
    fn show_stats(&mut self, stats: StatsView) {
        self.stats.set(Some(stats));
    }

    fn show_nav(&mut self, links: Vec<NavLink>) {
        self.nav.set(Some(links));
    }

    fn hide_nav(&mut self) {
        self.nav.set(None);
    }

    fn show_grid(&mut self, sections: Vec<MonthSection>) {
        self.card_counts.set(
            sections
                .iter()
                .flat_map(|s| s.cards.iter())
                .map(|c| (c.artwork_id.clone(), c.comment_label.clone()))
                .collect(),
        );
        self.grid.set(GridContent::Sections(sections));
    }

    fn show_empty(&mut self, notice: EmptyNotice) {
        self.grid.set(GridContent::Empty(notice));
    }

    fn update_card_count(&mut self, artwork_id: &str, label: Option<String>) {
        self.card_counts.update(|counts| {
            counts.insert(artwork_id.to_string(), label);
        });
    }

    fn show_modal(&mut self, detail: ModalDetail) {
        self.modal.set(Some(detail));
    }

    fn show_comments(&mut self, comments: CommentListView) {
        self.comments.set(comments);
    }

    fn clear_comment_input(&mut self) {
        self.draft.set(String::new());
    }

    fn hide_modal(&mut self) {
        self.modal.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaihan_gallery_common::CardView;

    fn card(id: &str, label: Option<&str>) -> CardView {
        CardView {
            artwork_id: id.to_string(),
            image_path: format!("images/{}.jpg", id),
            alt: id.to_string(),
            title: None,
            date_display: "2024年05月01日".to_string(),
            confidence_class: "confidence-high",
            comment_label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_show_grid_seeds_card_counts() {
        let mut surface = SignalSurface::new();
        surface.show_grid(vec![MonthSection {
            key: "2024年05月".to_string(),
            anchor: "section-2024年05月".to_string(),
            cards: vec![card("a1", Some("💬 2 条评论")), card("a2", None)],
        }]);

        assert_eq!(surface.card_count("a1").as_deref(), Some("💬 2 条评论"));
        assert_eq!(surface.card_count("a2"), None);
        assert!(matches!(surface.grid.get_untracked(), GridContent::Sections(ref s) if s.len() == 1));
    }

    #[test]
    fn test_update_card_count_only_touches_one_card() {
        let mut surface = SignalSurface::new();
        surface.show_grid(vec![MonthSection {
            key: "2024年05月".to_string(),
            anchor: "section-2024年05月".to_string(),
            cards: vec![card("a1", None), card("a2", None)],
        }]);

        surface.update_card_count("a1", Some("💬 1 条评论".to_string()));

        assert_eq!(surface.card_count("a1").as_deref(), Some("💬 1 条评论"));
        assert_eq!(surface.card_count("a2"), None);
    }

    #[test]
    fn test_nav_and_modal_visibility() {
        let mut surface = SignalSurface::new();
        assert!(surface.nav.get_untracked().is_none());

        surface.show_nav(vec![NavLink::for_month("2024年05月")]);
        assert_eq!(surface.nav.get_untracked().map(|n| n.len()), Some(1));
        surface.hide_nav();
        assert!(surface.nav.get_untracked().is_none());

        surface.draft.set("下书".to_string());
        surface.clear_comment_input();
        assert_eq!(surface.draft.get_untracked(), "");

        surface.show_empty(EmptyNotice::LoadFailed);
        assert_eq!(surface.grid.get_untracked(), GridContent::Empty(EmptyNotice::LoadFailed));
    }
}
