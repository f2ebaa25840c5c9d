//! 全局语义检索页
//!
//! 空白查询在本地直接拦截，不发请求；结果按相关度原序展示。
//! `None` 表示尚未发起过搜索（首屏空闲态）。

use leptos::prelude::*;
use leptos::task::spawn_local;

use fileflux_shared::SearchHit;

use crate::api::{ApiClient, sanitize_query};
use crate::components::icons::{FileText, Search};
use crate::components::navbar::Navbar;
use crate::components::state_views::{EmptyNotice, ErrorNotice, LoadingNotice, UnconfiguredNotice};
use crate::components::toast::{Toast, notification_signal, push_notification};
use crate::view_state::ViewState;

/// 首屏结果状态：`None` 为空闲（尚未搜索）；
/// 未配置后端时不等提交，直接进入指引态。
fn initial_results(configured: bool) -> Option<ViewState<Vec<SearchHit>>> {
    if configured {
        None
    } else {
        Some(ViewState::Unconfigured)
    }
}

#[component]
pub fn AdminSearchPage() -> impl IntoView {
    let api = ApiClient::from_env();

    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(initial_results(api.is_some()));
    let (notification, set_notification) = notification_signal();

    let run_search = {
        let api = api.clone();
        move || {
            let Some(q) = sanitize_query(&query.get()) else {
                push_notification(set_notification, "Enter keywords to search", true);
                return;
            };

            let Some(api) = api.clone() else {
                set_results.set(Some(ViewState::Unconfigured));
                return;
            };

            set_results.set(Some(ViewState::Loading));
            spawn_local(async move {
                let state = ViewState::from_list_result(
                    api.admin_search(&q).await.map(|resp| resp.results),
                );
                set_results.set(Some(state));
            });
        }
    };

    let on_submit = {
        let run_search = run_search.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            run_search();
        }
    };

    let results_view = move || match results.get() {
        None => view! {
            <div class="text-center py-16 text-base-content/50">
                <Search attr:class="h-12 w-12 mx-auto mb-4 opacity-40" />
                <p>"Search across every document by meaning, not just filenames."</p>
            </div>
        }
        .into_any(),
        Some(ViewState::Unconfigured) => view! { <UnconfiguredNotice /> }.into_any(),
        Some(ViewState::Loading) => view! { <LoadingNotice label="Searching..." /> }.into_any(),
        Some(ViewState::Empty) => view! {
            <EmptyNotice
                title="No matches found."
                hint="Try different keywords or broader phrasing."
            />
        }
        .into_any(),
        Some(ViewState::Error(msg)) => view! { <ErrorNotice message=msg /> }.into_any(),
        Some(ViewState::Loaded(hits)) => view! {
            <div class="space-y-4">
                {hits
                    .into_iter()
                    .map(|hit: SearchHit| {
                        let filename = hit.filename().to_string();
                        let preview = hit.preview(200);
                        view! {
                            <div class="card bg-base-100 shadow-sm">
                                <div class="card-body py-4">
                                    <p class="font-semibold flex items-center gap-2">
                                        <FileText attr:class="h-4 w-4 text-primary" />
                                        {filename}
                                    </p>
                                    <p class="text-sm text-base-content/70">{preview}</p>
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

            <section class="max-w-3xl mx-auto px-6 py-12 space-y-8">
                <h1 class="text-3xl font-bold">"Search Documents"</h1>

                <form class="join w-full" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="e.g. invoice totals for March"
                        class="input input-bordered join-item flex-1"
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        prop:value=query
                    />
                    <button type="submit" class="btn btn-primary join-item gap-2">
                        <Search attr:class="h-4 w-4" /> "Search"
                    </button>
                </form>

                {results_view}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_backend_shows_guidance_before_any_submit() {
        assert_eq!(initial_results(false), Some(ViewState::Unconfigured));
    }

    #[test]
    fn configured_backend_starts_idle() {
        assert_eq!(initial_results(true), None);
    }
}
