//! テスト用の表示面とデータ

use crate::clock::ManualClock;
use crate::types::{Artwork, ArtworkCollection, Confidence, TimeSource};
use crate::view::{
    CardView, CommentListView, EmptyNotice, ModalDetail, MonthSection, NavLink, StatsView,
    ViewSurface,
};
use chrono::FixedOffset;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ShowStats,
    ShowNav,
    HideNav,
    ShowGrid,
    ShowEmpty(EmptyNotice),
    UpdateCardCount(String, Option<String>),
    ShowModal(String),
    ShowComments,
    ClearCommentInput,
    HideModal,
}

/// 呼び出しを記録する表示面
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    pub stats: Option<StatsView>,
    pub nav: Option<Vec<NavLink>>,
    pub nav_hidden: bool,
    pub sections: Option<Vec<MonthSection>>,
    pub empty: Option<EmptyNotice>,
    pub card_counts: HashMap<String, Option<String>>,
    pub modal: Option<ModalDetail>,
    pub comments: Option<CommentListView>,
}

impl RecordingSurface {
    pub fn card(&self, artwork_id: &str) -> Option<&CardView> {
        self.sections
            .as_ref()?
            .iter()
            .flat_map(|s| s.cards.iter())
            .find(|c| c.artwork_id == artwork_id)
    }
}

impl ViewSurface for RecordingSurface {
    fn show_stats(&mut self, stats: StatsView) {
        self.calls.push(SurfaceCall::ShowStats);
        self.stats = Some(stats);
    }

    fn show_nav(&mut self, links: Vec<NavLink>) {
        self.calls.push(SurfaceCall::ShowNav);
        self.nav = Some(links);
        self.nav_hidden = false;
    }

    fn hide_nav(&mut self) {
        self.calls.push(SurfaceCall::HideNav);
        self.nav = None;
        self.nav_hidden = true;
    }

    fn show_grid(&mut self, sections: Vec<MonthSection>) {
        self.calls.push(SurfaceCall::ShowGrid);
        self.card_counts = sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .map(|c| (c.artwork_id.clone(), c.comment_label.clone()))
            .collect();
        self.sections = Some(sections);
        self.empty = None;
    }

    fn show_empty(&mut self, notice: EmptyNotice) {
        self.calls.push(SurfaceCall::ShowEmpty(notice));
        self.empty = Some(notice);
        self.sections = None;
    }

    fn update_card_count(&mut self, artwork_id: &str, label: Option<String>) {
        self.calls
            .push(SurfaceCall::UpdateCardCount(artwork_id.to_string(), label.clone()));
        self.card_counts.insert(artwork_id.to_string(), label);
    }

    fn show_modal(&mut self, detail: ModalDetail) {
        self.calls.push(SurfaceCall::ShowModal(detail.artwork_id.clone()));
        self.modal = Some(detail);
    }

    fn show_comments(&mut self, comments: CommentListView) {
        self.calls.push(SurfaceCall::ShowComments);
        self.comments = Some(comments);
    }

    fn clear_comment_input(&mut self) {
        self.calls.push(SurfaceCall::ClearCommentInput);
    }

    fn hide_modal(&mut self) {
        self.calls.push(SurfaceCall::HideModal);
        self.modal = None;
    }
}

/// UTC+8 の手動時計
pub fn china_clock(now_millis: i64) -> ManualClock {
    ManualClock::new(now_millis, FixedOffset::east_opt(8 * 3600).unwrap())
}

pub fn artwork(id: &str, timestamp: i64) -> Artwork {
    Artwork {
        id: id.to_string(),
        filename: format!("{}.jpg", id),
        path: format!("images/{}.jpg", id),
        title: None,
        timestamp,
        date_display: String::new(),
        time_source: TimeSource::FileMtime,
        confidence: Confidence::Low,
        issues: None,
        content: None,
        poem_source: None,
    }
}

pub fn collection(artworks: Vec<Artwork>) -> ArtworkCollection {
    ArtworkCollection {
        generated_at: None,
        total_count: artworks.len(),
        warnings: Vec::new(),
        artworks,
    }
}
