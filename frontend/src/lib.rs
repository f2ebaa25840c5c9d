//! FileFlux 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含角色守卫）
//! - `auth`: 认证状态管理（客户端内置凭据表）
//! - `api`: 外部文档处理后端的网关
//! - `components`: UI 组件层（市场页 / 管理员面板 / 员工面板）

mod api;
mod auth;
mod view_state;
mod components {
    pub mod admin {
        pub mod dashboard;
        pub mod departments;
        pub mod doc;
        pub mod search;
        pub mod upload;
    }
    pub mod employee {
        pub mod dashboard;
        pub mod doc;
    }
    mod icons;
    pub mod login;
    pub mod marketing;
    mod navbar;
    mod state_views;
    mod status;
    mod toast;
}
mod serde_helper;

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::dashboard::AdminDashboardPage;
use crate::components::admin::departments::{AdminDepartmentPage, AdminDepartmentsPage};
use crate::components::admin::doc::AdminDocPage;
use crate::components::admin::search::AdminSearchPage;
use crate::components::admin::upload::AdminUploadPage;
use crate::components::employee::dashboard::EmployeeDashboardPage;
use crate::components::employee::doc::EmployeeDocPage;
use crate::components::login::LoginPage;
use crate::components::marketing::{AboutPage, ContactPage, HomePage};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
/// 角色守卫在路由服务里完成，到达这里的路由已经通过校验。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminUpload => view! { <AdminUploadPage /> }.into_any(),
        AppRoute::AdminSearch => view! { <AdminSearchPage /> }.into_any(),
        AppRoute::AdminDepartments => view! { <AdminDepartmentsPage /> }.into_any(),
        AppRoute::AdminDepartment(slug) => view! { <AdminDepartmentPage slug=slug /> }.into_any(),
        AppRoute::AdminDoc(doc_id) => view! { <AdminDocPage doc_id=doc_id /> }.into_any(),
        AppRoute::EmployeeDashboard => view! { <EmployeeDashboardPage /> }.into_any(),
        AppRoute::EmployeeDoc(doc_id) => view! { <EmployeeDocPage doc_id=doc_id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化认证状态（从 LocalStorage 恢复会话）
    init_auth(&auth_ctx);

    // 3. 获取会话信号，用于注入路由服务（解耦！）
    let session = auth_ctx.session_signal();

    view! {
        // 4. 路由器组件：注入会话信号实现角色守卫
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
