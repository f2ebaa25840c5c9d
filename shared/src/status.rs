//! 文档状态类型
//!
//! 后端各接口对状态的大小写与分隔符并不统一（`in_progress`、`in progress`、
//! `In-Progress`、`In Progress` 都出现过）。解析时全部归一化；序列化时
//! 统一输出标题格式（`"In Progress"`），未知值原样保留而不是丢弃。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 文档处理状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocStatus {
    Pending,
    InProgress,
    Completed,
    /// 后端返回的未识别状态，按原文展示
    Other(String),
}

impl DocStatus {
    /// 三种已知状态的规范写法，用于筛选按钮与状态切换按钮
    pub const KNOWN: [DocStatus; 3] = [
        DocStatus::Pending,
        DocStatus::InProgress,
        DocStatus::Completed,
    ];

    /// 宽松解析：忽略大小写，把 `-`/`_` 视为空格
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "pending" => DocStatus::Pending,
            "in progress" => DocStatus::InProgress,
            "completed" => DocStatus::Completed,
            _ => DocStatus::Other(raw.to_string()),
        }
    }

    /// 规范的线上表示
    pub fn as_str(&self) -> &str {
        match self {
            DocStatus::Pending => "Pending",
            DocStatus::InProgress => "In Progress",
            DocStatus::Completed => "Completed",
            DocStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DocStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DocStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DocStatus::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_observed_spellings() {
        for raw in ["in_progress", "in progress", "In Progress", "In-Progress", "IN_PROGRESS"] {
            assert_eq!(DocStatus::parse(raw), DocStatus::InProgress, "raw = {raw}");
        }
        assert_eq!(DocStatus::parse("pending"), DocStatus::Pending);
        assert_eq!(DocStatus::parse("  Completed "), DocStatus::Completed);
    }

    #[test]
    fn unknown_status_is_preserved_verbatim() {
        let status = DocStatus::parse("Archived");
        assert_eq!(status, DocStatus::Other("Archived".to_string()));
        assert_eq!(status.as_str(), "Archived");
    }

    #[test]
    fn serializes_to_canonical_form() {
        let json = serde_json::to_string(&DocStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let back: DocStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(back, DocStatus::InProgress);
    }
}
