//! 部门总览与部门详情
//!
//! 总览展示各部门的待处理/进行中/已完成计数；点击卡片进入该部门的
//! 文档列表，再点击文档进入管理员文档详情。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::{DepartmentDetailResponse, DepartmentSummary, DocumentSummary};

use crate::api::ApiClient;
use crate::components::icons::{ArrowLeft, ArrowRight, Building2, FileText};
use crate::components::navbar::Navbar;
use crate::components::state_views::{EmptyNotice, ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::status::StatusBadge;
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_navigate};

#[component]
pub fn AdminDepartmentsPage() -> impl IntoView {
    let api = ApiClient::from_env();
    let navigate = use_navigate();

    let (overview, set_overview) = signal(ViewState::<Vec<DepartmentSummary>>::Unconfigured);
    let (notification, set_notification) = notification_signal();

    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(api) = api.clone() else {
                return;
            };

            set_overview.set(ViewState::Loading);
            spawn_local(async move {
                let result = api.departments_overview().await.map(|resp| resp.departments);
                if result.is_err() {
                    push_notification(set_notification, "Failed to load departments", true);
                }
                set_overview.set(ViewState::from_list_result(result));
            });
        }
    });

    let overview_view = move || match overview.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading departments..." /> }.into_any(),
        ViewState::Empty => view! {
            <EmptyNotice title="No departments reported by the backend yet." />
        }
        .into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(departments) => view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {departments
                    .into_iter()
                    .map(|dept: DepartmentSummary| {
                        let navigate = navigate.clone();
                        let slug = dept.slug.clone();
                        view! {
                            <div
                                class="card bg-base-100 shadow hover:shadow-xl transition cursor-pointer"
                                on:click=move |_| {
                                    navigate(AppRoute::AdminDepartment(slug.clone()))
                                }
                            >
                                <div class="card-body">
                                    <h3 class="card-title flex items-center gap-2">
                                        <Building2 attr:class="h-5 w-5 text-primary" />
                                        {dept.name}
                                    </h3>
                                    <div class="flex gap-2 mt-2">
                                        <span class="badge badge-warning badge-outline">
                                            {dept.pending} " pending"
                                        </span>
                                        <span class="badge badge-info badge-outline">
                                            {dept.in_progress} " in progress"
                                        </span>
                                        <span class="badge badge-success badge-outline">
                                            {dept.completed} " completed"
                                        </span>
                                    </div>
                                    <p class="text-sm text-base-content/50 mt-2">
                                        "Last activity: "
                                        {dept.last_activity.unwrap_or_else(|| "—".to_string())}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-7xl mx-auto px-6 py-12 space-y-8">
                <h1 class="text-3xl font-bold">"Departments"</h1>
                {overview_view}
            </section>
        </div>
    }
}

#[component]
pub fn AdminDepartmentPage(slug: String) -> impl IntoView {
    let api = ApiClient::from_env();

    let (detail, set_detail) = signal(ViewState::<DepartmentDetailResponse>::Unconfigured);
    let (notification, set_notification) = notification_signal();

    Effect::new({
        let api = api.clone();
        let slug = slug.clone();
        move |_| {
            let Some(api) = api.clone() else {
                return;
            };
            let slug = slug.clone();

            set_detail.set(ViewState::Loading);
            spawn_local(async move {
                let result = api.department_detail(&slug).await;
                if result.is_err() {
                    push_notification(set_notification, "Failed to load department", true);
                }
                set_detail.set(ViewState::from_result(result));
            });
        }
    });

    let title_slug = slug.clone();
    let title = move || match detail.get() {
        ViewState::Loaded(d) => d
            .department
            .map(|info| info.name)
            .unwrap_or_else(|| title_slug.clone()),
        _ => title_slug.clone(),
    };

    let detail_view = move || match detail.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading documents..." /> }.into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        // from_result 不产生 Empty，这里以文档列表为空作为空态
        ViewState::Empty => view! { <EmptyNotice title="Nothing here." /> }.into_any(),
        ViewState::Loaded(d) if d.documents.is_empty() => view! {
            <EmptyNotice
                title="No documents routed to this department yet."
                hint="Uploaded documents appear here once classification assigns them."
            />
        }
        .into_any(),
        ViewState::Loaded(d) => view! {
            <div class="card bg-base-100 shadow-sm divide-y divide-base-200">
                {d.documents
                    .into_iter()
                    .map(|doc: DocumentSummary| {
                        let preview = doc.preview_text().to_string();
                        view! {
                            <Link to=AppRoute::AdminDoc(doc.doc_id.clone())>
                                <div class="p-6 hover:bg-base-200 transition flex items-start justify-between gap-4">
                                    <div class="min-w-0">
                                        <p class="font-semibold flex items-center gap-2">
                                            <FileText attr:class="h-4 w-4 text-primary shrink-0" />
                                            {doc.filename.clone()}
                                        </p>
                                        <p class="text-sm text-base-content/70 mt-1 truncate">
                                            {preview}
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
        .into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-5xl mx-auto px-6 py-12 space-y-8">
                <div class="flex items-center gap-4">
                    <Link to=AppRoute::AdminDepartments>
                        <span class="btn btn-ghost btn-sm gap-2">
                            <ArrowLeft attr:class="h-4 w-4" /> "All Departments"
                        </span>
                    </Link>
                    <h1 class="text-3xl font-bold">{title}</h1>
                </div>
                {detail_view}
            </section>
        </div>
    }
}
