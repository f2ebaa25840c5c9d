//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径解析以及每个路由要求的角色。

use std::fmt::Display;

use fileflux_shared::Role;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页（默认路由，公开）
    #[default]
    Home,
    /// 关于页（公开）
    About,
    /// 联系页（公开）
    Contact,
    /// 登录页（公开；已登录用户会被重定向到对应面板）
    Login,
    /// 管理员面板
    AdminDashboard,
    /// 上传与处理页
    AdminUpload,
    /// 全局语义检索页
    AdminSearch,
    /// 部门总览
    AdminDepartments,
    /// 部门详情，携带部门 slug
    AdminDepartment(String),
    /// 管理员文档详情，携带文档 id
    AdminDoc(String),
    /// 员工面板
    EmployeeDashboard,
    /// 员工文档详情，携带文档 id
    EmployeeDoc(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["about"] => Self::About,
            ["contact"] => Self::Contact,
            ["login"] => Self::Login,
            ["admin", "dashboard"] => Self::AdminDashboard,
            ["admin", "upload"] => Self::AdminUpload,
            ["admin", "search"] => Self::AdminSearch,
            ["admin", "departments"] => Self::AdminDepartments,
            ["admin", "departments", slug] => Self::AdminDepartment(slug.to_string()),
            ["admin", "doc", id] => Self::AdminDoc(id.to_string()),
            ["employee", "dashboard"] => Self::EmployeeDashboard,
            ["employee", "doc", id] => Self::EmployeeDoc(id.to_string()),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Contact => "/contact".to_string(),
            Self::Login => "/login".to_string(),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminUpload => "/admin/upload".to_string(),
            Self::AdminSearch => "/admin/search".to_string(),
            Self::AdminDepartments => "/admin/departments".to_string(),
            Self::AdminDepartment(slug) => format!("/admin/departments/{slug}"),
            Self::AdminDoc(id) => format!("/admin/doc/{id}"),
            Self::EmployeeDashboard => "/employee/dashboard".to_string(),
            Self::EmployeeDoc(id) => format!("/employee/doc/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：该路由要求的角色**
    ///
    /// `None` 表示公开路由。角色不匹配与未登录同等对待，
    /// 都会被重定向到登录页，没有单独的"无权限"状态。
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::AdminDashboard
            | Self::AdminUpload
            | Self::AdminSearch
            | Self::AdminDepartments
            | Self::AdminDepartment(_)
            | Self::AdminDoc(_) => Some(Role::Admin),
            Self::EmployeeDashboard | Self::EmployeeDoc(_) => Some(Role::Employee),
            _ => None,
        }
    }

    /// 已登录用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 守卫失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 各角色登录成功后的落地页
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Employee => Self::EmployeeDashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/about"), AppRoute::About);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/admin/dashboard"), AppRoute::AdminDashboard);
        assert_eq!(
            AppRoute::from_path("/employee/dashboard"),
            AppRoute::EmployeeDashboard
        );
        assert_eq!(AppRoute::from_path("/admin/unknown"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/etc/passwd"), AppRoute::NotFound);
    }

    #[test]
    fn parses_parameterized_paths() {
        assert_eq!(
            AppRoute::from_path("/admin/departments/hr-department"),
            AppRoute::AdminDepartment("hr-department".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/admin/doc/42"),
            AppRoute::AdminDoc("42".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/employee/doc/abc-123"),
            AppRoute::EmployeeDoc("abc-123".to_string())
        );
    }

    #[test]
    fn path_round_trips() {
        let routes = [
            AppRoute::Home,
            AppRoute::Contact,
            AppRoute::AdminSearch,
            AppRoute::AdminDepartment("finance-team".to_string()),
            AppRoute::EmployeeDoc("d7".to_string()),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/admin/upload/"), AppRoute::AdminUpload);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn role_requirements() {
        assert_eq!(AppRoute::Home.required_role(), None);
        assert_eq!(AppRoute::Login.required_role(), None);
        assert_eq!(AppRoute::AdminUpload.required_role(), Some(Role::Admin));
        assert_eq!(
            AppRoute::AdminDoc("1".to_string()).required_role(),
            Some(Role::Admin)
        );
        assert_eq!(
            AppRoute::EmployeeDoc("1".to_string()).required_role(),
            Some(Role::Employee)
        );
    }

    #[test]
    fn dashboards_match_roles() {
        assert_eq!(AppRoute::dashboard_for(Role::Admin), AppRoute::AdminDashboard);
        assert_eq!(
            AppRoute::dashboard_for(Role::Employee),
            AppRoute::EmployeeDashboard
        );
    }
}
