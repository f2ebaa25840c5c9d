//! 管理员文档详情
//!
//! 展示文档元信息、摘要与讨论串；留言与状态变更都是"提交后整页重拉"，
//! 消息列表始终以后端返回为准。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::{ChatMessage, DocStatus, DocumentDetail};

use crate::api::ApiClient;
use crate::components::icons::{ArrowLeft, Send};
use crate::components::navbar::Navbar;
use crate::components::state_views::{ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::status::{StatusBadge, StatusButtons};
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn AdminDocPage(doc_id: String) -> impl IntoView {
    let api = ApiClient::from_env();

    let (doc, set_doc) = signal(ViewState::<DocumentDetail>::Unconfigured);
    let (draft, set_draft) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let (notification, set_notification) = notification_signal();

    let fetch_doc = {
        let api = api.clone();
        let doc_id = doc_id.clone();
        move |show_loading: bool| {
            let Some(api) = api.clone() else {
                return;
            };
            let doc_id = doc_id.clone();

            if show_loading {
                set_doc.set(ViewState::Loading);
            }
            spawn_local(async move {
                let result = api.admin_doc(&doc_id).await;
                if result.is_err() {
                    push_notification(set_notification, "Failed to load document", true);
                }
                // 刷新失败时不覆盖已加载的内容
                match (result, show_loading) {
                    (Ok(detail), _) => set_doc.set(ViewState::Loaded(detail)),
                    (Err(e), true) => set_doc.set(ViewState::Error(e.to_string())),
                    (Err(_), false) => {}
                }
            });
        }
    };

    Effect::new({
        let fetch_doc = fetch_doc.clone();
        move |_| fetch_doc(true)
    });

    let on_send = {
        let api = api.clone();
        let doc_id = doc_id.clone();
        let fetch_doc = fetch_doc.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let text = draft.get().trim().to_string();
            if text.is_empty() || sending.get() {
                return;
            }
            let Some(api) = api.clone() else {
                return;
            };
            let doc_id = doc_id.clone();
            let fetch_doc = fetch_doc.clone();

            set_sending.set(true);
            spawn_local(async move {
                match api.admin_send_message(&doc_id, text).await {
                    Ok(()) => {
                        set_draft.set(String::new());
                        fetch_doc(false);
                    }
                    Err(e) => {
                        push_notification(
                            set_notification,
                            format!("Message not sent: {e}"),
                            true,
                        );
                    }
                }
                set_sending.set(false);
            });
        }
    };

    let on_status = {
        let api = api.clone();
        let doc_id = doc_id.clone();
        let fetch_doc = fetch_doc.clone();
        Callback::new(move |status: DocStatus| {
            let Some(api) = api.clone() else {
                return;
            };
            let doc_id = doc_id.clone();
            let fetch_doc = fetch_doc.clone();

            spawn_local(async move {
                match api.admin_update_status(&doc_id, status).await {
                    Ok(()) => fetch_doc(false),
                    Err(e) => {
                        push_notification(
                            set_notification,
                            format!("Status update failed: {e}"),
                            true,
                        );
                    }
                }
            });
        })
    };

    let current_status = Signal::derive(move || {
        doc.get()
            .loaded()
            .map(|d| d.status.clone())
            .unwrap_or(DocStatus::Pending)
    });

    let body = move || match doc.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading document..." /> }.into_any(),
        ViewState::Empty => view! { <ErrorNotice message="Document not found." /> }.into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(d) => {
            view! {
                <div class="space-y-8">
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body space-y-2">
                            <div class="flex items-center justify-between gap-4 flex-wrap">
                                <h2 class="card-title">{d.filename.clone()}</h2>
                                <StatusBadge status=d.status.clone() />
                            </div>
                            <p class="text-sm text-base-content/60">
                                "Category: "
                                {d.category.clone().unwrap_or_else(|| "Uncategorized".to_string())}
                            </p>
                            <div>
                                <p class="font-semibold">"AI Summary"</p>
                                <p class="text-base-content/70 whitespace-pre-wrap">
                                    {d.summary.clone().unwrap_or_else(|| "No summary available.".to_string())}
                                </p>
                            </div>
                            <div class="pt-2">
                                <p class="font-semibold mb-2">"Update Status"</p>
                                <StatusButtons current=current_status on_select=on_status />
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title mb-2">"Discussion"</h2>
                            {if d.messages.is_empty() {
                                view! {
                                    <p class="text-base-content/50 italic">
                                        "No messages yet. Start the discussion below."
                                    </p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="space-y-3">
                                        {d.messages
                                            .iter()
                                            .cloned()
                                            .map(message_bubble)
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }}

                            <form class="join w-full mt-4" on:submit=on_send.clone()>
                                <input
                                    type="text"
                                    placeholder="Write a message to the department..."
                                    class="input input-bordered join-item flex-1"
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    prop:value=draft
                                />
                                <button
                                    type="submit"
                                    class="btn btn-primary join-item gap-2"
                                    disabled=move || sending.get()
                                >
                                    <Send attr:class="h-4 w-4" /> "Send"
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-4xl mx-auto px-6 py-12 space-y-6">
                <Link to=AppRoute::AdminDepartments>
                    <span class="btn btn-ghost btn-sm gap-2">
                        <ArrowLeft attr:class="h-4 w-4" /> "Back to Departments"
                    </span>
                </Link>
                {body}
            </section>
        </div>
    }
}

/// 单条消息气泡；管理员消息靠右并高亮
fn message_bubble(msg: ChatMessage) -> impl IntoView {
    let mine = msg.sender == "Admin";
    let (chat_side, bubble) = if mine {
        ("chat chat-end", "chat-bubble chat-bubble-primary")
    } else {
        ("chat chat-start", "chat-bubble")
    };

    view! {
        <div class=chat_side>
            <div class="chat-header text-xs text-base-content/60">
                {msg.sender.clone()}
                {msg.timestamp
                    .as_ref()
                    .map(|t| format!(" · {t}"))
                    .unwrap_or_default()}
            </div>
            <div class=bubble>{msg.message.clone()}</div>
        </div>
    }
}
