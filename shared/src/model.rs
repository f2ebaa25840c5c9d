//! 后端接口的数据投影
//!
//! 所有文档相关实体都由外部文档处理后端拥有，这里只负责反序列化与展示。
//! 后端对可选字段并不总是返回，凡页面能容忍缺失的字段一律 `Option` + 默认值。

use crate::DocStatus;
use serde::{Deserialize, Serialize};

// =========================================================
// 文档投影 (Document Projections)
// =========================================================

/// 员工列表页使用的文档摘要投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub doc_id: String,
    pub filename: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: DocStatus,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub summary_preview: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
}

impl DocumentSummary {
    /// 列表项展示用的一行摘要：优先预览，其次全文摘要
    pub fn preview_text(&self) -> &str {
        self.summary_preview
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or("No summary available.")
    }

    /// 客户端过滤：文件名 / 摘要 / 分类任一命中即匹配
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let contains = |s: Option<&str>| s.map_or(false, |s| s.to_lowercase().contains(&q));
        self.filename.to_lowercase().contains(&q)
            || contains(self.summary_preview.as_deref())
            || contains(self.summary.as_deref())
            || contains(self.category.as_deref())
    }
}

/// 文档详情页投影（管理员与员工详情共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDetail {
    #[serde(default)]
    pub doc_id: String,
    pub filename: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: DocStatus,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// 讨论消息。管理员接口的字段名是 `text`，员工接口是 `message`，
/// 反序列化两者都接受，内部统一为 `message`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    #[serde(alias = "text")]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

// =========================================================
// 管理员接口 (Admin API)
// =========================================================

/// `/admin/stats` 的统计数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_docs: u64,
    pub processed_today: u64,
    pub pending: u64,
    pub completed: u64,
}

/// `/admin/activity` 的单条活动记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub doc_name: String,
    pub action: String,
    pub department: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// `/admin/upload` 的处理结果，四个字段按响应原文展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    pub category: String,
    pub routed_to: String,
    pub summary: String,
}

/// `/admin/search` 的单条命中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub metadata: SearchHitMetadata,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl SearchHit {
    /// 结果列表里截断展示的正文预览
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            self.text.clone()
        } else {
            let cut: String = self.text.chars().take(max_chars).collect();
            format!("{cut}...")
        }
    }

    pub fn filename(&self) -> &str {
        self.metadata
            .filename
            .as_deref()
            .unwrap_or("Unknown Document")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHitMetadata {
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

// =========================================================
// 部门接口 (Departments API)
// =========================================================

/// `/admin/departments/overview` 的单个部门汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub in_progress: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub last_activity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentOverviewResponse {
    #[serde(default)]
    pub departments: Vec<DepartmentSummary>,
}

/// `/admin/departments/{slug}` 的详情：部门信息 + 路由到该部门的文档
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDetailResponse {
    #[serde(default)]
    pub department: Option<DepartmentInfo>,
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub slug: String,
    pub name: String,
}

// =========================================================
// 员工接口 (Employee API)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocsResponse {
    #[serde(default)]
    pub documents: Vec<DocumentSummary>,
}

/// `/employee/doc/{id}/search` 的文档内检索结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSearchResponse {
    #[serde(default)]
    pub result: String,
}

// =========================================================
// 请求体 (Request Bodies)
// =========================================================

/// 管理员留言：字段名 `text` 是既有后端契约，不做统一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminMessageRequest {
    pub sender: String,
    pub text: String,
}

/// 员工聊天消息：字段名 `message` 是既有后端契约
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeChatRequest {
    pub sender: String,
    pub message: String,
}

/// 状态变更请求（管理员 POST、员工 PUT 共用同一请求体）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: DocStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_accepts_both_field_names() {
        let admin: ChatMessage =
            serde_json::from_str(r#"{"sender":"Admin","text":"please review"}"#).unwrap();
        assert_eq!(admin.message, "please review");

        let employee: ChatMessage =
            serde_json::from_str(r#"{"sender":"hr","message":"done","timestamp":"10:24"}"#)
                .unwrap();
        assert_eq!(employee.message, "done");
        assert_eq!(employee.timestamp.as_deref(), Some("10:24"));
    }

    #[test]
    fn document_summary_tolerates_missing_optional_fields() {
        let doc: DocumentSummary = serde_json::from_str(
            r#"{"doc_id":"d1","filename":"invoice.pdf","status":"in_progress"}"#,
        )
        .unwrap();
        assert_eq!(doc.status, DocStatus::InProgress);
        assert_eq!(doc.preview_text(), "No summary available.");
    }

    #[test]
    fn query_filter_matches_filename_summary_and_category() {
        let doc: DocumentSummary = serde_json::from_str(
            r#"{
                "doc_id": "d2",
                "filename": "Q3-invoice.pdf",
                "category": "Finance",
                "status": "Pending",
                "summary_preview": "Quarterly totals for procurement."
            }"#,
        )
        .unwrap();

        assert!(doc.matches_query("q3-INVOICE"));
        assert!(doc.matches_query("finance"));
        assert!(doc.matches_query("procurement"));
        assert!(doc.matches_query("   "));
        assert!(!doc.matches_query("payroll"));
    }

    #[test]
    fn search_hit_preview_is_truncated() {
        let hit = SearchHit {
            text: "x".repeat(300),
            metadata: SearchHitMetadata { filename: None },
            distance: Some(0.42),
        };
        assert_eq!(hit.preview(200).chars().count(), 203);
        assert_eq!(hit.filename(), "Unknown Document");
    }

    #[test]
    fn status_update_request_sends_canonical_status() {
        let body = StatusUpdateRequest {
            status: DocStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"In Progress"}"#
        );
    }
}
