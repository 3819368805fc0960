//! 作品詳細モーダルの状態機械
//!
//! 状態は Closed と Open(作品ID) の2つ。コメントの追加・削除はすべて
//! ここを経由してストアに反映し、モーダルのコメント一覧と該当カード1枚だけを
//! 再描画する。

use crate::clock::Clock;
use crate::overlay::display_title;
use crate::renderer::GalleryRenderer;
use crate::session::GalleryContext;
use crate::storage::Storage;
use crate::view::{CommentItemView, CommentListView, ModalDetail, ViewSurface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(String),
}

/// ホストのイベント層から渡されるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalCommand {
    Open(String),
    Close,
    Submit(String),
    Delete {
        artwork_id: String,
        comment_id: String,
    },
}

/// 入力欄での送信ショートカット（Ctrl/Cmd + Enter）
pub fn is_submit_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key == "Enter" && (ctrl || meta)
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// 開いている作品ID
    pub fn active_artwork(&self) -> Option<&str> {
        match &self.state {
            ModalState::Open(id) => Some(id),
            ModalState::Closed => None,
        }
    }

    pub fn dispatch<S: Storage, C: Clock>(
        &mut self,
        command: ModalCommand,
        context: &mut GalleryContext<S, C>,
        surface: &mut impl ViewSurface,
    ) {
        match command {
            ModalCommand::Open(artwork_id) => self.open(&artwork_id, context, surface),
            ModalCommand::Close => self.close(surface),
            ModalCommand::Submit(text) => self.submit_comment(&text, context, surface),
            ModalCommand::Delete {
                artwork_id,
                comment_id,
            } => self.delete_comment(&artwork_id, &comment_id, context, surface),
        }
    }

    /// 作品を開く（見つからなければ何もしない）
    pub fn open<S: Storage, C: Clock>(
        &mut self,
        artwork_id: &str,
        context: &GalleryContext<S, C>,
        surface: &mut impl ViewSurface,
    ) {
        let Some(artwork) = context.collection.find(artwork_id) else {
            tracing::debug!(artwork_id, "open ignored: unknown artwork");
            return;
        };

        let comments = context.store.read(artwork_id);
        let title = display_title(artwork, &comments);
        let heading = if title.is_empty() {
            artwork.date_display.clone()
        } else {
            format!("{} - {}", title, artwork.date_display)
        };

        self.state = ModalState::Open(artwork_id.to_string());
        tracing::debug!(artwork_id, "modal opened");

        surface.show_modal(ModalDetail {
            artwork_id: artwork.id.clone(),
            image_path: artwork.path.clone(),
            heading,
            source_label: artwork.time_source.label().to_string(),
            confidence_class: artwork.confidence.css_class(),
            confidence_label: artwork.confidence.label().to_string(),
        });
        render_comments(artwork_id, context, surface);
    }

    pub fn close(&mut self, surface: &mut impl ViewSurface) {
        if self.state == ModalState::Closed {
            return;
        }
        self.state = ModalState::Closed;
        tracing::debug!("modal closed");
        surface.hide_modal();
    }

    /// 開いている作品にコメントを追加（閉じていれば何もしない）
    pub fn submit_comment<S: Storage, C: Clock>(
        &mut self,
        text: &str,
        context: &mut GalleryContext<S, C>,
        surface: &mut impl ViewSurface,
    ) {
        let Some(artwork_id) = self.active_artwork().map(str::to_string) else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }

        context.store.add(&artwork_id, text);
        surface.clear_comment_input();
        render_comments(&artwork_id, context, surface);
        GalleryRenderer::new(context).update_card(&artwork_id, surface);
    }

    /// コメントを削除（開いている作品と一致しなくてもよい）
    ///
    /// モーダルの一覧は開いている作品のときだけ描き直す。
    pub fn delete_comment<S: Storage, C: Clock>(
        &mut self,
        artwork_id: &str,
        comment_id: &str,
        context: &mut GalleryContext<S, C>,
        surface: &mut impl ViewSurface,
    ) {
        context.store.delete(artwork_id, comment_id);
        if self.active_artwork() == Some(artwork_id) {
            render_comments(artwork_id, context, surface);
        }
        GalleryRenderer::new(context).update_card(artwork_id, surface);
    }
}

/// モーダルのコメント一覧を描画
fn render_comments<S: Storage, C: Clock>(
    artwork_id: &str,
    context: &GalleryContext<S, C>,
    surface: &mut impl ViewSurface,
) {
    let comments = context.store.read(artwork_id);
    if comments.is_empty() {
        surface.show_comments(CommentListView::Empty);
        return;
    }

    surface.show_comments(CommentListView::Items(
        comments
            .into_iter()
            .map(|c| CommentItemView {
                comment_id: c.id,
                text: c.text,
                date: c.date,
            })
            .collect(),
    ));
}
