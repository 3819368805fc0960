//! 画面表示モデルと表示面(ViewSurface)の契約
//!
//! レンダラとモーダル制御はここで定義する値を表示面へ渡すだけで、
//! DOMやフレームワークには依存しない。

use std::fmt;

/// 統計表示（件数と期間）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total_count: usize,
    /// 並び順の末尾（最も古い）作品の日付
    pub oldest: String,
    /// 並び順の先頭（最も新しい）作品の日付
    pub newest: String,
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "共 {} 幅作品 | {} - {}", self.total_count, self.oldest, self.newest)
    }
}

/// 月ナビゲーションのリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// セクション要素のID（"section-YYYY年MM月"）
    pub anchor: String,
}

impl NavLink {
    pub fn for_month(key: &str) -> Self {
        Self {
            label: key.to_string(),
            anchor: section_anchor(key),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub fn section_anchor(month_key: &str) -> String {
    format!("section-{}", month_key)
}

/// 作品カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub artwork_id: String,
    pub image_path: String,
    /// 画像の alt（タイトルがなければファイル名）
    pub alt: String,
    pub title: Option<String>,
    pub date_display: String,
    pub confidence_class: &'static str,
    pub comment_label: Option<String>,
}

/// 月セクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSection {
    pub key: String,
    pub anchor: String,
    pub cards: Vec<CardView>,
}

/// 作品がない・読み込めないときの案内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyNotice {
    /// データはあるが作品が0件
    NoArtworks,
    /// 取得・解析に失敗
    LoadFailed,
}

impl EmptyNotice {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyNotice::NoArtworks => "暂无作品",
            EmptyNotice::LoadFailed => "加载失败",
        }
    }

    /// 対処方法の案内文
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            EmptyNotice::NoArtworks => &[
                "请将书法作品照片放入 images/ 目录",
                "然后运行 kaihan-gallery generate",
            ],
            EmptyNotice::LoadFailed => &[
                "请确保已运行 kaihan-gallery generate 生成数据",
                "或将书法作品照片放入 images/ 目录后重新运行",
            ],
        }
    }
}

/// モーダルの作品詳細
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalDetail {
    pub artwork_id: String,
    pub image_path: String,
    /// "タイトル - 日付" または日付のみ
    pub heading: String,
    pub source_label: String,
    pub confidence_class: &'static str,
    pub confidence_label: String,
}

impl ModalDetail {
    /// "时间来源: ..."
    pub fn source_line(&self) -> String {
        format!("时间来源: {}", self.source_label)
    }
}

/// コメント一覧の1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentItemView {
    pub comment_id: String,
    pub text: String,
    pub date: String,
}

/// モーダルのコメント一覧
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentListView {
    #[default]
    Empty,
    Items(Vec<CommentItemView>),
}

impl CommentListView {
    pub const EMPTY_MESSAGE: &'static str = "暂无评论";
}

/// ホスト文書が提供する表示面
///
/// 統計・月ナビ・グリッド・モーダル（画像/日付/時間来源）・コメント一覧・
/// 閉じるボタン・コメント入力欄。
pub trait ViewSurface {
    fn show_stats(&mut self, stats: StatsView);

    fn show_nav(&mut self, links: Vec<NavLink>);

    fn hide_nav(&mut self);

    fn show_grid(&mut self, sections: Vec<MonthSection>);

    /// グリッド領域を案内表示に置き換える
    fn show_empty(&mut self, notice: EmptyNotice);

    /// 1枚のカードのコメント数表示だけを書き換える
    fn update_card_count(&mut self, artwork_id: &str, label: Option<String>);

    fn show_modal(&mut self, detail: ModalDetail);

    fn show_comments(&mut self, comments: CommentListView);

    fn clear_comment_input(&mut self);

    fn hide_modal(&mut self);
}
