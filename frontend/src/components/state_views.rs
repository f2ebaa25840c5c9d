//! 视图状态的公共渲染组件
//!
//! `ViewState` 的每个变体对应这里的一个组件，页面只需在 match 的
//! 各分支里引用，避免各页重复拼相同的条件渲染。

use leptos::prelude::*;

use crate::components::icons::AlertCircle;

/// 后端未配置时的指引。不发网络请求，这不是错误状态。
#[component]
pub fn UnconfiguredNotice() -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-warning shadow-sm my-6">
            <AlertCircle attr:class="h-5 w-5 shrink-0" />
            <div>
                <p class="font-semibold">"Backend not configured"</p>
                <p class="text-sm">
                    "Set " <code class="font-mono bg-base-200 px-1 rounded">"FILEFLUX_API_BASE_URL"</code>
                    " at build time to enable live data."
                </p>
            </div>
        </div>
    }
}

/// 加载中
#[component]
pub fn LoadingNotice(#[prop(into, default = String::from("Loading..."))] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-base-content/60 text-lg my-6">
            <span class="loading loading-spinner loading-md"></span>
            {label}
        </div>
    }
}

/// 请求失败。页面保持可交互，通常与一条临时通知同时出现。
#[component]
pub fn ErrorNotice(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error shadow-sm my-6">
            <AlertCircle attr:class="h-5 w-5 shrink-0" />
            <span>{message}</span>
        </div>
    }
}

/// 成功但没有数据
#[component]
pub fn EmptyNotice(
    #[prop(into)] title: String,
    #[prop(into, default = String::new())] hint: String,
) -> impl IntoView {
    view! {
        <div class="p-8 rounded-box bg-base-200 my-6">
            <p class="font-semibold">{title}</p>
            <p class="text-sm text-base-content/60 mt-1">{hint}</p>
        </div>
    }
}
