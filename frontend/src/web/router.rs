//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 导航流程为"请求 -> 守卫 -> 处理 -> 加载"：守卫读取注入的会话信号，
//! 会话缺失与角色不匹配一视同仁地重定向到登录页。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use fileflux_shared::Session;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 守卫判定：给定目标路由与当前会话，返回需要重定向到的路由
///
/// 返回 `None` 表示放行。该函数不触碰 DOM，便于单独推理：
/// - 受保护路由 + 无会话或角色不匹配 -> 登录页
/// - 登录页 + 已有会话 -> 对应角色的面板
fn redirect_target(target: &AppRoute, session: Option<&Session>) -> Option<AppRoute> {
    if let Some(required) = target.required_role() {
        match session {
            Some(s) if s.role == required => {}
            _ => return Some(AppRoute::auth_failure_redirect()),
        }
    }

    if target.should_redirect_when_authenticated() {
        if let Some(s) = session {
            return Some(AppRoute::dashboard_for(s.role));
        }
    }

    None
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 会话信号由外部注入，与认证模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 当前会话（注入的信号）
    session: Signal<Option<Session>>,
}

impl RouterService {
    fn new(session: Signal<Option<Session>>) -> Self {
        let path = current_path();
        let initial_route = AppRoute::from_path(&path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    /// 按路由枚举导航，等价于 `navigate(route.to_path())`
    pub fn navigate_to(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let session = self.session.get_untracked();

        if let Some(redirect) = redirect_target(&target_route, session.as_ref()) {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting.".into());
            // 守卫重定向一律 replaceState，避免把被拒绝的地址留在历史里
            replace_history_state(&redirect.to_path());
            self.set_route.set(redirect);
            return;
        }

        if use_push {
            push_history_state(&target_route.to_path());
        } else {
            replace_history_state(&target_route.to_path());
        }
        self.set_route.set(target_route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = AppRoute::from_path(&path);

            // popstate 时也执行守卫逻辑
            let current_session = session.get_untracked();
            if let Some(redirect) = redirect_target(&target_route, current_session.as_ref()) {
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话变化时的自动重定向
    ///
    /// 登录后停留在登录页 -> 跳转面板；登出或他标签页清除会话后
    /// 停留在受保护页面 -> 跳转登录页。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |_| {
            let current_session = session.get();
            let route = current_route.get_untracked();

            if let Some(redirect) = redirect_target(&route, current_session.as_ref()) {
                web_sys::console::log_1(
                    &"[Router] Session changed, redirecting current page.".into(),
                );
                // 与导航守卫一致：replaceState，被拒绝的地址不留在历史里
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Option<Session>>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(AppRoute) + Clone {
    let router = use_router();
    move |to: AppRoute| {
        router.navigate_to(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 当前会话信号
    session: Signal<Option<Session>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接，拦截点击并走路由服务
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.to_path();
    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to.clone());
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileflux_shared::Role;

    fn admin() -> Session {
        Session::new("admin", "Admin")
    }

    fn employee() -> Session {
        Session::new("hr", "HR Department")
    }

    #[test]
    fn protected_route_without_session_redirects_to_login() {
        for route in [
            AppRoute::AdminDashboard,
            AppRoute::AdminDoc("1".to_string()),
            AppRoute::EmployeeDashboard,
            AppRoute::EmployeeDoc("1".to_string()),
        ] {
            assert_eq!(redirect_target(&route, None), Some(AppRoute::Login));
        }
    }

    #[test]
    fn role_mismatch_redirects_like_absence() {
        let s = employee();
        assert_eq!(
            redirect_target(&AppRoute::AdminUpload, Some(&s)),
            Some(AppRoute::Login)
        );
        let s = admin();
        assert_eq!(
            redirect_target(&AppRoute::EmployeeDashboard, Some(&s)),
            Some(AppRoute::Login)
        );
    }

    #[test]
    fn matching_role_passes() {
        let s = admin();
        assert_eq!(redirect_target(&AppRoute::AdminSearch, Some(&s)), None);
        let s = employee();
        assert_eq!(
            redirect_target(&AppRoute::EmployeeDoc("9".to_string()), Some(&s)),
            None
        );
    }

    #[test]
    fn public_routes_never_redirect_anonymous_users() {
        for route in [AppRoute::Home, AppRoute::About, AppRoute::Contact, AppRoute::Login] {
            assert_eq!(redirect_target(&route, None), None);
        }
    }

    #[test]
    fn authenticated_user_leaves_login_for_their_dashboard() {
        let s = admin();
        assert_eq!(
            redirect_target(&AppRoute::Login, Some(&s)),
            Some(AppRoute::AdminDashboard)
        );
        let s = employee();
        assert_eq!(
            redirect_target(&AppRoute::Login, Some(&s)),
            Some(AppRoute::EmployeeDashboard)
        );
        assert_eq!(s.role, Role::Employee);
    }
}
