//! Kaihan Gallery Common Library
//!
//! 生成ツール(CLI)とWeb(WASM)で共有される型と、
//! コメント注釈の重ね合わせ・描画パイプライン

pub mod types;
pub mod error;
pub mod clock;
pub mod storage;
pub mod comment_store;
pub mod overlay;
pub mod grouper;
pub mod loader;
pub mod view;
pub mod renderer;
pub mod modal;
pub mod session;

#[cfg(test)]
mod testing;

pub use types::{
    Artwork, ArtworkCollection, ArtworkComments, CommentRecord, CommentsByArtwork, Confidence,
    DateIssue, GenerationWarning, PoemSource, TimeSource, UNTITLED_SENTINEL,
};
pub use error::{Error, Result};
pub use clock::{Clock, ManualClock, SystemClock};
pub use storage::{MemoryStorage, Storage};
pub use comment_store::{CommentStore, STORAGE_KEY};
pub use overlay::{comment_count_label, display_title, displayed_comment_count};
pub use grouper::{group_by_month, month_key, MonthGroup};
pub use loader::{check_status, load, parse_collection, DocumentSource, DATA_URL};
pub use view::{
    CardView, CommentItemView, CommentListView, EmptyNotice, ModalDetail, MonthSection, NavLink,
    StatsView, ViewSurface,
};
pub use renderer::GalleryRenderer;
pub use modal::{is_submit_shortcut, ModalCommand, ModalController, ModalState};
pub use session::{GalleryContext, GallerySession};
