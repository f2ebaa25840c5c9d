//! 导航壳
//!
//! 顶栏始终展示公共链接；会话存在时追加角色徽章、面板入口与登出按钮。
//! 内容完全由会话信号驱动，其他标签页的登录/登出也会实时反映。

use leptos::prelude::*;

use fileflux_shared::Session;

use crate::auth::{logout, use_auth};
use crate::components::icons::LogOut;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;

    let on_logout = move |_| {
        // 跳转由路由服务对会话变化的监听完成
        logout(&auth);
    };

    let session_area = move || match session.get() {
        Some(Session { role, .. }) => view! {
            <span class="badge badge-neutral hidden sm:inline-flex">
                "Role: " {format!("{role:?}")}
            </span>
            <Link to=AppRoute::dashboard_for(role)>
                <span class="btn btn-ghost btn-sm">"Dashboard"</span>
            </Link>
            <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                <LogOut attr:class="h-4 w-4" /> "Logout"
            </button>
        }
        .into_any(),
        None => view! {
            <Link to=AppRoute::Login>
                <span class="btn btn-outline btn-primary btn-sm">"Sign In"</span>
            </Link>
        }
        .into_any(),
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
            <div class="flex-1">
                <Link to=AppRoute::Home>
                    <span class="btn btn-ghost text-xl font-bold text-primary">"FileFlux"</span>
                </Link>
            </div>
            <div class="flex-none gap-2 items-center">
                <Link to=AppRoute::Home>
                    <span class="btn btn-ghost btn-sm">"Home"</span>
                </Link>
                <Link to=AppRoute::About>
                    <span class="btn btn-ghost btn-sm">"About"</span>
                </Link>
                <Link to=AppRoute::Contact>
                    <span class="btn btn-ghost btn-sm">"Contact Us"</span>
                </Link>
                {session_area}
            </div>
        </div>
    }
}
