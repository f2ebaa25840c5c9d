//! 员工面板
//!
//! 只拉取本部门的文档（部门经由请求头传递，由后端过滤）。
//! 关键词与状态过滤都在客户端完成，不再发请求。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::{DocStatus, DocumentSummary};

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::icons::{ArrowRight, FileText, Filter, Search};
use crate::components::navbar::Navbar;
use crate::components::state_views::{EmptyNotice, ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::status::StatusBadge;
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 状态过滤：`None` 表示“全部”
type StatusFilter = Option<DocStatus>;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let department = move || {
        auth.session
            .get()
            .map(|s| s.department)
            .unwrap_or_default()
    };

    let api = ApiClient::from_env();
    let (docs, set_docs) = signal(ViewState::<Vec<DocumentSummary>>::Unconfigured);
    let (query, set_query) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<StatusFilter>(None);
    let (notification, set_notification) = notification_signal();

    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(api) = api.clone() else {
                return;
            };
            let dept = department();
            if dept.is_empty() {
                return;
            }

            set_docs.set(ViewState::Loading);
            spawn_local(async move {
                let result = api.employee_docs(&dept).await.map(|resp| resp.documents);
                if result.is_err() {
                    push_notification(set_notification, "Failed to load your documents", true);
                }
                set_docs.set(ViewState::from_list_result(result));
            });
        }
    });

    // 统计卡基于完整列表，不随过滤变化
    let counts = move || {
        let list = docs.get();
        let list = list.loaded().map(Vec::as_slice).unwrap_or(&[]);
        let total = list.len();
        let of = |wanted: &DocStatus| list.iter().filter(|d| &d.status == wanted).count();
        (
            total,
            of(&DocStatus::Pending),
            of(&DocStatus::InProgress),
            of(&DocStatus::Completed),
        )
    };

    let filtered = move || {
        let q = query.get();
        let filter = status_filter.get();
        docs.get()
            .loaded()
            .map(|list| {
                list.iter()
                    .filter(|d| d.matches_query(&q))
                    .filter(|d| filter.as_ref().is_none_or(|s| &d.status == s))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let filter_pills = move || {
        let active = status_filter.get();
        let pill = |label: String, value: StatusFilter, active: bool| {
            let class = if active {
                "btn btn-sm btn-primary"
            } else {
                "btn btn-sm btn-ghost"
            };
            view! {
                <button class=class on:click=move |_| set_status_filter.set(value.clone())>
                    {label}
                </button>
            }
        };

        view! {
            <div class="flex items-center gap-2 flex-wrap">
                <Filter attr:class="h-4 w-4 text-base-content/50" />
                {pill("All".to_string(), None, active.is_none())}
                {DocStatus::KNOWN
                    .iter()
                    .cloned()
                    .map(|status| {
                        let is_active = active.as_ref() == Some(&status);
                        pill(status.to_string(), Some(status), is_active)
                    })
                    .collect_view()}
            </div>
        }
    };

    let list_view = move || match docs.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading your documents..." /> }.into_any(),
        ViewState::Empty => view! {
            <EmptyNotice
                title="No documents assigned to your department yet."
                hint="Documents routed here by the processing pipeline will show up automatically."
            />
        }
        .into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(_) => {
            let visible = filtered();
            if visible.is_empty() {
                return view! {
                    <EmptyNotice
                        title="No documents match the current filters."
                        hint="Clear the search box or pick a different status."
                    />
                }
                .into_any();
            }
            view! {
                <div class="card bg-base-100 shadow-sm divide-y divide-base-200">
                    {visible
                        .into_iter()
                        .map(|doc: DocumentSummary| {
                            let preview = doc.preview_text().to_string();
                            view! {
                                <Link to=AppRoute::EmployeeDoc(doc.doc_id.clone())>
                                    <div class="p-6 hover:bg-base-200 transition flex items-start justify-between gap-4">
                                        <div class="min-w-0">
                                            <p class="font-semibold flex items-center gap-2">
                                                <FileText attr:class="h-4 w-4 text-primary shrink-0" />
                                                {doc.filename.clone()}
                                            </p>
                                            <p class="text-sm text-base-content/70 mt-1 truncate">
                                                {preview}
                                            </p>
                                            <p class="text-xs text-base-content/40 mt-1">
                                                {doc.last_update.clone().unwrap_or_default()}
                                            </p>
                                        </div>
                                        <div class="flex items-center gap-3 shrink-0">
                                            <StatusBadge status=doc.status.clone() />
                                            <ArrowRight attr:class="h-4 w-4 text-base-content/40" />
                                        </div>
                                    </div>
                                </Link>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-5xl mx-auto px-6 py-12 space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">{department} " Documents"</h1>
                    <p class="text-base-content/60 mt-1">
                        "Documents routed to your department by the AI pipeline."
                    </p>
                </div>

                {move || {
                    let (total, pending, in_progress, completed) = counts();
                    view! {
                        <div class="stats shadow w-full stats-vertical sm:stats-horizontal bg-base-100">
                            <div class="stat">
                                <div class="stat-title">"Total"</div>
                                <div class="stat-value text-primary">{total}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Pending"</div>
                                <div class="stat-value text-warning">{pending}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"In Progress"</div>
                                <div class="stat-value text-info">{in_progress}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Completed"</div>
                                <div class="stat-value text-success">{completed}</div>
                            </div>
                        </div>
                    }
                }}

                <div class="flex flex-col sm:flex-row sm:items-center gap-4 justify-between">
                    <label class="input input-bordered flex items-center gap-2 sm:max-w-xs w-full">
                        <Search attr:class="h-4 w-4 text-base-content/50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Filter by name or summary"
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            prop:value=query
                        />
                    </label>
                    {filter_pills}
                </div>

                {list_view}
            </section>
        </div>
    }
}
