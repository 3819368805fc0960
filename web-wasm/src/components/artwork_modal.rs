//! 作品詳細モーダル（コメント一覧と入力欄）

use crate::surface::SignalSurface;
use kaihan_gallery_common::{is_submit_shortcut, CommentListView, ModalCommand, ModalDetail};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

#[component]
pub fn ArtworkModal<F>(surface: SignalSurface, dispatch: F) -> impl IntoView
where
    F: Fn(ModalCommand) + 'static + Clone + Send + Sync,
{
    move || {
        let detail = surface.modal.get()?;
        let dispatch = dispatch.clone();
        Some(view! { <ModalBody detail=detail surface=surface dispatch=dispatch /> })
    }
}

#[component]
fn ModalBody<F>(detail: ModalDetail, surface: SignalSurface, dispatch: F) -> impl IntoView
where
    F: Fn(ModalCommand) + 'static + Clone + Send + Sync,
{
    let source_line = detail.source_line();
    let alt = detail.heading.clone();
    let badge_class = format!("confidence-badge {}", detail.confidence_class);
    let confidence = format!(" ({})", detail.confidence_label);

    let submit = {
        let dispatch = dispatch.clone();
        move || dispatch(ModalCommand::Submit(surface.draft.get_untracked()))
    };
    let submit_on_key = submit.clone();

    view! {
        <div
            class="modal"
            on:click={
                let dispatch = dispatch.clone();
                move |ev: MouseEvent| {
                    // 背景部分のクリックのみ
                    if ev.target() == ev.current_target() {
                        dispatch(ModalCommand::Close);
                    }
                }
            }
        >
            <div class="modal-content">
                <button
                    class="modal-close"
                    on:click={
                        let dispatch = dispatch.clone();
                        move |_| dispatch(ModalCommand::Close)
                    }
                >
                    "×"
                </button>
                <img class="modal-image" src=detail.image_path alt=alt />
                <div class="modal-info">
                    <div class="modal-date">{detail.heading}</div>
                    <div class="modal-source">
                        {source_line}" "<span class=badge_class></span>{confidence}
                    </div>
                </div>
                <CommentList comments=surface.comments artwork_id=detail.artwork_id dispatch=dispatch.clone() />
                <div class="comment-form">
                    <textarea
                        class="comment-input"
                        placeholder="添加评论... (Ctrl+Enter 发送)"
                        prop:value=move || surface.draft.get()
                        on:input=move |ev| surface.draft.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if is_submit_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                                ev.prevent_default();
                                submit_on_key();
                            }
                        }
                    ></textarea>
                    <button class="add-comment-btn" on:click=move |_| submit()>"发送"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CommentList<F>(comments: RwSignal<CommentListView>, artwork_id: String, dispatch: F) -> impl IntoView
where
    F: Fn(ModalCommand) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="modal-comments">
            {move || match comments.get() {
                CommentListView::Empty => {
                    view! { <p class="no-comments">{CommentListView::EMPTY_MESSAGE}</p> }.into_any()
                }
                CommentListView::Items(items) => items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <div class="comment-item" data-comment-id=item.comment_id.clone()>
                                <button
                                    class="comment-delete"
                                    title="删除"
                                    on:click={
                                        let dispatch = dispatch.clone();
                                        let artwork_id = artwork_id.clone();
                                        let comment_id = item.comment_id.clone();
                                        move |ev: MouseEvent| {
                                            ev.stop_propagation();
                                            dispatch(ModalCommand::Delete {
                                                artwork_id: artwork_id.clone(),
                                                comment_id: comment_id.clone(),
                                            });
                                        }
                                    }
                                >
                                    "×"
                                </button>
                                <div class="comment-text">{item.text}</div>
                                <div class="comment-date">{item.date}</div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
