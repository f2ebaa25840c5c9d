//! 员工文档详情
//!
//! 文档元信息与聊天记录分开拉取：聊天每 3 秒轮询一次，
//! 发送消息的响应即为刷新后的完整列表，直接替换本地状态。
//! 文档内检索走后端语义接口，空白查询在本地拦截。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::{ChatMessage, DocStatus, DocumentDetail};

use crate::api::{ApiClient, sanitize_query};
use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Search, Send};
use crate::components::navbar::Navbar;
use crate::components::state_views::{ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::status::{StatusBadge, StatusButtons};
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::view_state::ViewState;
use crate::web::Interval;
use crate::web::route::AppRoute;
use crate::web::router::Link;

const CHAT_POLL_MILLIS: u32 = 3_000;

/// 后端未配置或请求仍在途时禁止提交，与上传页对未配置态的处理一致
fn can_submit(configured: bool, busy: bool) -> bool {
    configured && !busy
}

#[component]
pub fn EmployeeDocPage(doc_id: String) -> impl IntoView {
    let auth = use_auth();
    let sender = move || {
        auth.session
            .get()
            .map(|s| s.username)
            .unwrap_or_else(|| "Employee".to_string())
    };

    let api = ApiClient::from_env();
    let configured = api.is_some();

    let (doc, set_doc) = signal(ViewState::<DocumentDetail>::Unconfigured);
    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (draft, set_draft) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let (search_query, set_search_query) = signal(String::new());
    let (search_result, set_search_result) = signal::<Option<ViewState<String>>>(None);

    let (notification, set_notification) = notification_signal();

    // 初始加载：详情与聊天并行
    Effect::new({
        let api = api.clone();
        let doc_id = doc_id.clone();
        move |_| {
            let Some(api) = api.clone() else {
                return;
            };

            set_doc.set(ViewState::Loading);
            {
                let api = api.clone();
                let doc_id = doc_id.clone();
                spawn_local(async move {
                    let result = api.employee_doc(&doc_id).await;
                    if result.is_err() {
                        push_notification(set_notification, "Failed to load document", true);
                    }
                    set_doc.set(ViewState::from_result(result));
                });
            }

            let doc_id = doc_id.clone();
            spawn_local(async move {
                if let Ok(list) = api.employee_chat(&doc_id).await {
                    set_messages.set(list);
                }
            });
        }
    });

    // 聊天轮询。拉取失败静默保留当前列表，下个周期重试。
    if let Some(api) = api.clone() {
        let doc_id = doc_id.clone();
        let interval = Interval::new(CHAT_POLL_MILLIS, move || {
            let api = api.clone();
            let doc_id = doc_id.clone();
            spawn_local(async move {
                if let Ok(list) = api.employee_chat(&doc_id).await {
                    set_messages.set(list);
                }
            });
        });
        let interval = send_wrapper::SendWrapper::new(interval);
        on_cleanup(move || drop(interval));
    }

    let on_send = {
        let api = api.clone();
        let doc_id = doc_id.clone();
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
            let from = sender();

            set_sending.set(true);
            spawn_local(async move {
                match api.employee_send_chat(&doc_id, from, text).await {
                    Ok(list) => {
                        // 仅在发送成功时清空输入框
                        set_draft.set(String::new());
                        set_messages.set(list);
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

    let on_search = {
        let api = api.clone();
        let doc_id = doc_id.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let Some(q) = sanitize_query(&search_query.get()) else {
                push_notification(set_notification, "Enter keywords to search", true);
                return;
            };
            let Some(api) = api.clone() else {
                return;
            };
            let doc_id = doc_id.clone();

            set_search_result.set(Some(ViewState::Loading));
            spawn_local(async move {
                let state = ViewState::from_result(
                    api.employee_doc_search(&doc_id, &q).await.map(|r| r.result),
                );
                set_search_result.set(Some(state));
            });
        }
    };

    let on_status = {
        let api = api.clone();
        let doc_id = doc_id.clone();
        Callback::new(move |status: DocStatus| {
            let Some(api) = api.clone() else {
                return;
            };
            let doc_id = doc_id.clone();

            spawn_local(async move {
                match api.employee_update_status(&doc_id, status.clone()).await {
                    Ok(()) => {
                        // 本地同步，无需整页重拉
                        set_doc.update(|state| {
                            if let ViewState::Loaded(d) = state {
                                d.status = status;
                            }
                        });
                    }
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

    let search_view = move || match search_result.get() {
        None => ().into_any(),
        Some(ViewState::Loading) => view! { <LoadingNotice label="Searching..." /> }.into_any(),
        Some(ViewState::Error(msg)) => view! { <ErrorNotice message=msg /> }.into_any(),
        Some(ViewState::Loaded(text)) if !text.trim().is_empty() => view! {
            <div class="p-4 rounded-box bg-base-200 text-sm whitespace-pre-wrap">{text}</div>
        }
        .into_any(),
        Some(_) => view! {
            <p class="text-base-content/50 italic text-sm">"No answer found in this document."</p>
        }
        .into_any(),
    };

    let chat_view = move || {
        let me = sender();
        let list = messages.get();
        if list.is_empty() {
            return view! {
                <p class="text-base-content/50 italic">"No messages yet."</p>
            }
            .into_any();
        }
        view! {
            <div class="space-y-3 max-h-96 overflow-y-auto">
                {list
                    .into_iter()
                    .map(|msg| {
                        let mine = msg.sender == me;
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
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let body = move || match doc.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading document..." /> }.into_any(),
        ViewState::Empty => view! { <ErrorNotice message="Document not found." /> }.into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(d) => view! {
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
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-4xl mx-auto px-6 py-12 space-y-6">
                <Link to=AppRoute::EmployeeDashboard>
                    <span class="btn btn-ghost btn-sm gap-2">
                        <ArrowLeft attr:class="h-4 w-4" /> "Back to My Documents"
                    </span>
                </Link>

                {body}

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body space-y-3">
                        <h2 class="card-title">"Ask this document"</h2>
                        <form class="join w-full" on:submit=on_search.clone()>
                            <input
                                type="text"
                                placeholder="e.g. what is the total amount due?"
                                class="input input-bordered join-item flex-1"
                                on:input=move |ev| set_search_query.set(event_target_value(&ev))
                                prop:value=search_query
                            />
                            <button
                                type="submit"
                                class="btn btn-primary join-item gap-2"
                                disabled=move || {
                                    let searching = search_result
                                        .get()
                                        .is_some_and(|s| s.is_loading());
                                    !can_submit(configured, searching)
                                }
                            >
                                <Search attr:class="h-4 w-4" /> "Ask"
                            </button>
                        </form>
                        {search_view}
                    </div>
                </div>

                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title mb-2">"Chat with Admin"</h2>
                        {chat_view}
                        <form class="join w-full mt-4" on:submit=on_send.clone()>
                            <input
                                type="text"
                                placeholder="Type a message..."
                                class="input input-bordered join-item flex-1"
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                prop:value=draft
                            />
                            <button
                                type="submit"
                                class="btn btn-primary join-item gap-2"
                                disabled=move || !can_submit(configured, sending.get())
                            >
                                <Send attr:class="h-4 w-4" /> "Send"
                            </button>
                        </form>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submits_require_a_configured_backend() {
        assert!(!can_submit(false, false));
        assert!(!can_submit(false, true));
    }

    #[test]
    fn in_flight_request_blocks_resubmit() {
        assert!(!can_submit(true, true));
        assert!(can_submit(true, false));
    }
}
