//! 后端网关
//!
//! 外部文档处理后端的 HTTP 客户端，每个端点一个方法。
//! 基础地址来自编译期环境变量 `FILEFLUX_API_BASE_URL`；
//! 未配置时客户端不存在，页面渲染配置指引且不发起任何请求。
//! 没有重试、退避与超时策略，失败原样交给调用方转为临时通知。

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use fileflux_shared::{
    ActivityItem, AdminMessageRequest, AdminStats, ChatMessage, DepartmentDetailResponse,
    DepartmentOverviewResponse, DocSearchResponse, DocStatus, DocumentDetail,
    EmployeeChatRequest, EmployeeDocsResponse, HEADER_USER_DEPARTMENT, SearchResponse,
    StatusUpdateRequest, UploadResult,
};

/// 网关调用错误
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 非 2xx 响应
    Http(u16),
    /// 网络层失败（连接失败、请求构建失败等）
    Network(String),
    /// 响应体解析失败
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(status) => write!(f, "HTTP {}", status),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "bad response: {}", msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 检索查询的客户端校验：去除首尾空白，空白查询返回 `None`，
/// 调用方据此拦截提交，不发起请求。
pub fn sanitize_query(raw: &str) -> Option<String> {
    let q = raw.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_string())
    }
}

/// 文档处理后端的客户端
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 从编译期环境变量读取基础地址
    ///
    /// 返回 `None` 表示后端未配置，是一等状态而不是错误。
    pub fn from_env() -> Option<Self> {
        match option_env!("FILEFLUX_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Some(Self::new(url.trim())),
            _ => None,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 统一的状态码检查
    fn check(res: Response) -> ApiResult<Response> {
        if res.ok() {
            Ok(res)
        } else {
            Err(ApiError::Http(res.status()))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let res = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================
    // 管理员接口 (Admin API)
    // =========================================================

    /// 获取全局统计
    pub async fn admin_stats(&self) -> ApiResult<AdminStats> {
        self.get_json("/admin/stats").await
    }

    /// 获取最近活动
    pub async fn admin_activity(&self) -> ApiResult<Vec<ActivityItem>> {
        self.get_json("/admin/activity").await
    }

    /// 上传并处理文档（multipart，字段名为 `file`）
    pub async fn upload_document(&self, file: &File) -> ApiResult<UploadResult> {
        let form = FormData::new()
            .map_err(|e| ApiError::Network(format!("FormData 创建失败: {:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Network(format!("FormData 填充失败: {:?}", e)))?;

        let res = Request::post(&self.url("/admin/upload"))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<UploadResult>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 全局语义检索
    pub async fn admin_search(&self, query: &str) -> ApiResult<SearchResponse> {
        let res = Request::get(&self.url("/admin/search"))
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 部门总览
    pub async fn departments_overview(&self) -> ApiResult<DepartmentOverviewResponse> {
        self.get_json("/admin/departments/overview").await
    }

    /// 部门详情及其文档
    pub async fn department_detail(&self, slug: &str) -> ApiResult<DepartmentDetailResponse> {
        self.get_json(&format!("/admin/departments/{slug}")).await
    }

    /// 文档详情（含讨论消息）
    pub async fn admin_doc(&self, doc_id: &str) -> ApiResult<DocumentDetail> {
        self.get_json(&format!("/admin/doc/{doc_id}")).await
    }

    /// 管理员留言；调用方随后重新拉取文档刷新消息列表
    pub async fn admin_send_message(&self, doc_id: &str, text: String) -> ApiResult<()> {
        let body = AdminMessageRequest {
            sender: "Admin".to_string(),
            text,
        };
        let res = Request::post(&self.url(&format!("/admin/doc/{doc_id}/message")))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res).map(|_| ())
    }

    /// 管理员更新文档状态
    pub async fn admin_update_status(&self, doc_id: &str, status: DocStatus) -> ApiResult<()> {
        let body = StatusUpdateRequest { status };
        let res = Request::post(&self.url(&format!("/admin/doc/{doc_id}/status")))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res).map(|_| ())
    }

    // =========================================================
    // 员工接口 (Employee API)
    // =========================================================

    /// 本部门的文档列表，部门经由请求头传递
    pub async fn employee_docs(&self, department: &str) -> ApiResult<EmployeeDocsResponse> {
        let res = Request::get(&self.url("/employee/docs"))
            .header(HEADER_USER_DEPARTMENT, department)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<EmployeeDocsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 员工文档详情
    pub async fn employee_doc(&self, doc_id: &str) -> ApiResult<DocumentDetail> {
        self.get_json(&format!("/employee/doc/{doc_id}")).await
    }

    /// 拉取聊天记录（详情页轮询使用）
    pub async fn employee_chat(&self, doc_id: &str) -> ApiResult<Vec<ChatMessage>> {
        self.get_json(&format!("/employee/doc/{doc_id}/chat")).await
    }

    /// 发送聊天消息；响应即为刷新后的完整消息列表
    pub async fn employee_send_chat(
        &self,
        doc_id: &str,
        sender: String,
        message: String,
    ) -> ApiResult<Vec<ChatMessage>> {
        let body = EmployeeChatRequest { sender, message };
        let res = Request::post(&self.url(&format!("/employee/doc/{doc_id}/chat")))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<Vec<ChatMessage>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 文档内语义检索
    pub async fn employee_doc_search(
        &self,
        doc_id: &str,
        query: &str,
    ) -> ApiResult<DocSearchResponse> {
        let res = Request::get(&self.url(&format!("/employee/doc/{doc_id}/search")))
            .query([("query", query)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res)?
            .json::<DocSearchResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 员工更新文档状态（PUT）
    pub async fn employee_update_status(&self, doc_id: &str, status: DocStatus) -> ApiResult<()> {
        let body = StatusUpdateRequest { status };
        let res = Request::put(&self.url(&format!("/employee/doc/{doc_id}/status")))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(res).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://localhost:8000/");
        assert_eq!(api.url("/admin/stats"), "http://localhost:8000/admin/stats");
    }

    #[test]
    fn url_joins_with_or_without_leading_slash() {
        let api = ApiClient::new("http://localhost:8000");
        assert_eq!(api.url("admin/activity"), "http://localhost:8000/admin/activity");
        assert_eq!(
            api.url("/employee/doc/42/chat"),
            "http://localhost:8000/employee/doc/42/chat"
        );
    }

    #[test]
    fn error_display_is_user_presentable() {
        assert_eq!(ApiError::Http(502).to_string(), "HTTP 502");
        assert!(ApiError::Network("timeout".into()).to_string().contains("timeout"));
    }

    #[test]
    fn blank_queries_are_rejected_before_any_request() {
        assert_eq!(sanitize_query(""), None);
        assert_eq!(sanitize_query("   "), None);
        assert_eq!(sanitize_query("\t\n"), None);
        assert_eq!(
            sanitize_query("  march invoices "),
            Some("march invoices".to_string())
        );
    }
}
