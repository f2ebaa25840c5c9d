//! 管理员面板
//!
//! 并行拉取全局统计与最近活动，两块数据各自独立流转视图状态。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::{ActivityItem, AdminStats};

use crate::api::ApiClient;
use crate::components::icons::{Building2, FilePlus, Search};
use crate::components::navbar::Navbar;
use crate::components::state_views::{EmptyNotice, ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::auth::use_auth;
use crate::view_state::ViewState;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let username = move || {
        auth.session
            .get()
            .map(|s| s.username)
            .unwrap_or_else(|| "Admin".to_string())
    };

    let api = ApiClient::from_env();
    let (stats, set_stats) = signal(ViewState::<AdminStats>::Unconfigured);
    let (activity, set_activity) = signal(ViewState::<Vec<ActivityItem>>::Unconfigured);
    let (notification, set_notification) = notification_signal();

    // 初始加载：两块数据并行请求，互不阻塞
    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(api) = api.clone() else {
                return;
            };

            set_stats.set(ViewState::Loading);
            set_activity.set(ViewState::Loading);

            {
                let api = api.clone();
                spawn_local(async move {
                    let result = api.admin_stats().await;
                    if result.is_err() {
                        push_notification(set_notification, "Failed to load dashboard data", true);
                    }
                    set_stats.set(ViewState::from_result(result));
                });
            }

            spawn_local(async move {
                let result = api.admin_activity().await;
                if result.is_err() {
                    push_notification(set_notification, "Failed to load recent activity", true);
                }
                set_activity.set(ViewState::from_list_result(result));
            });
        }
    });

    let stats_view = move || match stats.get() {
        ViewState::Unconfigured => view! { <UnconfiguredNotice /> }.into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Loading stats..." /> }.into_any(),
        ViewState::Empty => view! { <EmptyNotice title="No stats available yet." /> }.into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(s) => view! {
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total Documents"</div>
                    <div class="stat-value text-primary">{s.total_docs}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Processed Today"</div>
                    <div class="stat-value">{s.processed_today}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pending"</div>
                    <div class="stat-value text-warning">{s.pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Completed"</div>
                    <div class="stat-value text-success">{s.completed}</div>
                </div>
            </div>
        }
        .into_any(),
    };

    let activity_view = move || match activity.get() {
        ViewState::Unconfigured => view! {
            <p class="text-base-content/60 italic">
                "Backend not connected yet. Activity will appear here once it is."
            </p>
        }
        .into_any(),
        ViewState::Loading => view! { <LoadingNotice label="Fetching activity..." /> }.into_any(),
        ViewState::Empty => view! { <EmptyNotice title="No recent activity yet." /> }.into_any(),
        ViewState::Error(msg) => view! { <ErrorNotice message=msg /> }.into_any(),
        ViewState::Loaded(items) => view! {
            <div class="card bg-base-100 shadow-sm divide-y divide-base-200">
                {items
                    .into_iter()
                    .map(|item: ActivityItem| view! {
                        <div class="p-6 hover:bg-base-200 transition">
                            <p class="font-semibold">{item.doc_name}</p>
                            <p class="text-sm text-base-content/70">
                                {item.action} " → " {item.department}
                            </p>
                            <p class="text-sm text-base-content/40 mt-1">
                                {item.time.unwrap_or_else(|| "—".to_string())}
                            </p>
                        </div>
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

            <section class="max-w-7xl mx-auto px-6 py-12 space-y-12">
                <h1 class="text-4xl font-bold">
                    "Welcome back, " <span class="text-primary">{username}</span>
                </h1>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <Link to=AppRoute::AdminUpload>
                        <div class="card bg-base-100 shadow hover:shadow-xl transition h-full">
                            <div class="card-body">
                                <FilePlus attr:class="h-8 w-8 text-primary" />
                                <h3 class="card-title">"Upload Document"</h3>
                                <p class="text-base-content/70">
                                    "Upload files and let AI classify and route them."
                                </p>
                            </div>
                        </div>
                    </Link>
                    <Link to=AppRoute::AdminSearch>
                        <div class="card bg-base-100 shadow hover:shadow-xl transition h-full">
                            <div class="card-body">
                                <Search attr:class="h-8 w-8 text-primary" />
                                <h3 class="card-title">"Search"</h3>
                                <p class="text-base-content/70">
                                    "Find documents using AI-powered semantic search."
                                </p>
                            </div>
                        </div>
                    </Link>
                    <Link to=AppRoute::AdminDepartments>
                        <div class="card bg-base-100 shadow hover:shadow-xl transition h-full">
                            <div class="card-body">
                                <Building2 attr:class="h-8 w-8 text-primary" />
                                <h3 class="card-title">"Departments"</h3>
                                <p class="text-base-content/70">
                                    "Track document progress across departments."
                                </p>
                            </div>
                        </div>
                    </Link>
                </div>

                <div>
                    <h2 class="text-2xl font-bold mb-4">"System Overview"</h2>
                    {stats_view}
                </div>

                <div>
                    <h2 class="text-2xl font-bold mb-4">"Recent Activity"</h2>
                    {activity_view}
                </div>
            </section>
        </div>
    }
}
