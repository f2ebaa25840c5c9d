//! 认证模块
//!
//! 管理会话状态，与路由系统解耦：路由服务只消费注入的会话信号。
//! 凭据表是客户端内置的明文列表（原系统的既有特性，服务端校验
//! 属于外部后端协作方的范畴），校验是纯函数，便于单测。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use fileflux_shared::{STORAGE_AUTH_KEY, Session};

use crate::web::LocalStorage;

/// 内置用户记录：(用户名, 密码, 部门)
const USERS: [(&str, &str, &str); 8] = [
    ("admin", "admin123", "Admin"),
    ("hr", "hr123", "HR Department"),
    ("finance", "finance123", "Finance Team"),
    ("procurement", "proc123", "Procurement Team"),
    ("engineering", "eng123", "Engineering Manager"),
    ("safety", "safe123", "Safety Officer"),
    ("compliance", "comp123", "Compliance Department"),
    ("operations", "ops123", "Operations Manager"),
];

/// 校验凭据三元组，精确匹配才算成功
///
/// 成功时返回会话，角色由部门推导。
pub fn authenticate(username: &str, password: &str, department: &str) -> Option<Session> {
    USERS
        .iter()
        .any(|(u, p, d)| *u == username && *p == password && *d == department)
        .then(|| Session::new(username, department))
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（只读）
    pub session: ReadSignal<Option<Session>>,
    /// 设置会话（写入）
    pub set_session: WriteSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (session, set_session) = signal(None::<Session>);
        Self {
            session,
            set_session,
        }
    }

    /// 获取会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Option<Session>> {
        let session = self.session;
        Signal::derive(move || session.get())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 LocalStorage 读取会话，解析失败与不存在同等对待
fn load_session() -> Option<Session> {
    LocalStorage::get_json::<Session>(STORAGE_AUTH_KEY)
}

/// 初始化认证状态
///
/// 启动时从 LocalStorage 恢复会话，并监听 `storage` 事件：
/// 其他标签页的登录/登出会触发本标签页重新加载会话副本。
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_session.set(load_session());

    let set_session = ctx.set_session;
    let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(storage_event) = event.dyn_ref::<web_sys::StorageEvent>() else {
            return;
        };
        // key 为 None 表示整个 storage 被清空，同样需要重载
        match storage_event.key() {
            Some(key) if key != STORAGE_AUTH_KEY => {}
            _ => set_session.set(load_session()),
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }

    // 泄漏闭包以保持监听器存活（与 popstate 监听同样的生命周期策略）
    closure.forget();
}

/// 登录：校验凭据，成功则持久化会话并更新信号
///
/// 返回登录是否成功。跳转由路由服务对会话变化的监听完成。
pub fn login(ctx: &AuthContext, username: &str, password: &str, department: &str) -> bool {
    match authenticate(username, password, department) {
        Some(session) => {
            LocalStorage::set_json(STORAGE_AUTH_KEY, &session);
            ctx.set_session.set(Some(session));
            true
        }
        None => false,
    }
}

/// 登出：删除持久化会话并清空信号
///
/// 不需要手动导航，路由服务会监听会话变化并自动重定向。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_AUTH_KEY);
    ctx.set_session.set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileflux_shared::Role;

    #[test]
    fn exact_triple_matches() {
        let session = authenticate("hr", "hr123", "HR Department").unwrap();
        assert_eq!(session.username, "hr");
        assert_eq!(session.department, "HR Department");
        assert_eq!(session.role, Role::Employee);
    }

    #[test]
    fn admin_department_yields_admin_role() {
        let session = authenticate("admin", "admin123", "Admin").unwrap();
        assert_eq!(session.role, Role::Admin);
    }

    #[test]
    fn wrong_password_fails() {
        assert!(authenticate("hr", "wrong", "HR Department").is_none());
    }

    #[test]
    fn mismatched_department_fails() {
        // 用户名和密码都对，但部门不匹配
        assert!(authenticate("hr", "hr123", "Finance Team").is_none());
        assert!(authenticate("hr", "hr123", "").is_none());
    }

    #[test]
    fn unknown_user_fails() {
        assert!(authenticate("ghost", "ghost123", "HR Department").is_none());
    }
}
