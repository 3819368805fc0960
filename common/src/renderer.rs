//! ギャラリー描画
//!
//! 作品メタデータとコメントストアから導出したタイトル・件数で
//! 統計・月ナビ・グリッドを組み立て、表示面へ渡す。

use crate::clock::Clock;
use crate::grouper::{group_by_month, MonthGroup};
use crate::overlay::{comment_count_label, display_title, displayed_comment_count};
use crate::session::GalleryContext;
use crate::storage::Storage;
use crate::types::{Artwork, ArtworkCollection, CommentsByArtwork};
use crate::view::{
    section_anchor, CardView, EmptyNotice, MonthSection, NavLink, StatsView, ViewSurface,
};

/// 作品なし・読み込み失敗の案内（ナビは隠す）
pub fn render_empty(notice: EmptyNotice, surface: &mut impl ViewSurface) {
    surface.hide_nav();
    surface.show_empty(notice);
}

/// 件数と期間（並び順の先頭 = 最新、末尾 = 最古）
pub fn render_stats(collection: &ArtworkCollection, surface: &mut impl ViewSurface) {
    let (Some(newest), Some(oldest)) = (collection.artworks.first(), collection.artworks.last())
    else {
        return;
    };
    surface.show_stats(StatsView {
        total_count: collection.total_count,
        oldest: oldest.date_display.clone(),
        newest: newest.date_display.clone(),
    });
}

/// 月ナビ（グループがなければ隠す）
pub fn render_nav(groups: &[MonthGroup<'_>], surface: &mut impl ViewSurface) {
    if groups.is_empty() {
        surface.hide_nav();
        return;
    }
    surface.show_nav(groups.iter().map(|g| NavLink::for_month(&g.key)).collect());
}

pub struct GalleryRenderer<'a, S, C> {
    context: &'a GalleryContext<S, C>,
}

impl<'a, S: Storage, C: Clock> GalleryRenderer<'a, S, C> {
    pub fn new(context: &'a GalleryContext<S, C>) -> Self {
        Self { context }
    }

    /// 全体描画（統計・ナビ・グリッド）
    pub fn render(&self, surface: &mut impl ViewSurface) {
        let collection = &self.context.collection;
        if collection.is_empty() {
            render_empty(EmptyNotice::NoArtworks, surface);
            return;
        }

        render_stats(collection, surface);
        let groups = group_by_month(&collection.artworks, self.context.store.clock());
        render_nav(&groups, surface);
        surface.show_grid(self.sections(&groups));
    }

    /// グリッド（月セクション × カード）
    pub fn render_grid(&self, surface: &mut impl ViewSurface) {
        let groups = group_by_month(&self.context.collection.artworks, self.context.store.clock());
        surface.show_grid(self.sections(&groups));
    }

    /// コメント変更後、1枚のカードの件数表示だけを更新
    pub fn update_card(&self, artwork_id: &str, surface: &mut impl ViewSurface) {
        if self.context.collection.find(artwork_id).is_none() {
            return;
        }
        let comments = self.context.store.read(artwork_id);
        surface.update_card_count(artwork_id, comment_count_label(displayed_comment_count(&comments)));
    }

    /// コメント文書は描画1回につき1度だけ読む
    fn sections(&self, groups: &[MonthGroup<'_>]) -> Vec<MonthSection> {
        let comments = self.context.store.read_all();
        groups
            .iter()
            .map(|group| MonthSection {
                key: group.key.clone(),
                anchor: section_anchor(&group.key),
                cards: group.artworks.iter().map(|a| card(a, &comments)).collect(),
            })
            .collect()
    }
}

fn card(artwork: &Artwork, document: &CommentsByArtwork) -> CardView {
    let comments = document
        .get(&artwork.id)
        .map(|entry| entry.comments.as_slice())
        .unwrap_or_default();
    let title = display_title(artwork, comments);
    let alt = if title.is_empty() {
        artwork.filename.clone()
    } else {
        title.clone()
    };

    CardView {
        artwork_id: artwork.id.clone(),
        image_path: artwork.path.clone(),
        alt,
        title: (!title.is_empty()).then_some(title),
        date_display: artwork.date_display.clone(),
        confidence_class: artwork.confidence.css_class(),
        comment_label: comment_count_label(displayed_comment_count(comments)),
    }
}
