use serde::{Deserialize, Serialize};

mod model;
mod status;

pub use model::*;
pub use status::DocStatus;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中会话对象的存储键
pub const STORAGE_AUTH_KEY: &str = "authUser";

/// 员工文档列表请求携带的部门请求头
pub const HEADER_USER_DEPARTMENT: &str = "X-User-Department";

/// 管理员部门的名称，角色推导以此为准
pub const ADMIN_DEPARTMENT: &str = "Admin";

/// 所有可选部门（登录选择器与后端路由目标共用）
pub const DEPARTMENTS: [&str; 8] = [
    "Admin",
    "HR Department",
    "Finance Team",
    "Procurement Team",
    "Engineering Manager",
    "Safety Officer",
    "Compliance Department",
    "Operations Manager",
];

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色，完全由部门推导：部门为 "Admin" 时即管理员，否则为员工
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// 从部门名称推导角色
    pub fn from_department(department: &str) -> Self {
        if department == ADMIN_DEPARTMENT {
            Role::Admin
        } else {
            Role::Employee
        }
    }
}

/// 登录会话，整体写入/读取 LocalStorage，没有过期与服务端校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub department: String,
    pub role: Role,
}

impl Session {
    pub fn new(username: impl Into<String>, department: impl Into<String>) -> Self {
        let department = department.into();
        let role = Role::from_department(&department);
        Session {
            username: username.into(),
            department,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_derived_from_department() {
        assert_eq!(Role::from_department("Admin"), Role::Admin);
        assert_eq!(Role::from_department("HR Department"), Role::Employee);
        // 大小写敏感：只有精确的 "Admin" 才是管理员
        assert_eq!(Role::from_department("admin"), Role::Employee);
        assert_eq!(Role::from_department(""), Role::Employee);
    }

    #[test]
    fn session_round_trips_with_original_storage_shape() {
        let session = Session::new("hr", "HR Department");
        assert_eq!(session.role, Role::Employee);

        let json = serde_json::to_string(&session).unwrap();
        // 与 localStorage 中 authUser 的历史字段形状保持一致
        assert!(json.contains("\"username\":\"hr\""));
        assert!(json.contains("\"department\":\"HR Department\""));
        assert!(json.contains("\"role\":\"Employee\""));

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn admin_session_has_admin_role() {
        let session = Session::new("admin", "Admin");
        assert_eq!(session.role, Role::Admin);
    }
}
