//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。
//! 会话对象整体以 JSON 存取，解析失败与键不存在同等对待。

use serde::{Serialize, de::DeserializeOwned};

use crate::serde_helper;

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// 键不存在或发生错误时返回 `None`。
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// 读取并反序列化 JSON 值
    ///
    /// 任何失败（键缺失、非法 JSON、字段不匹配）都返回 `None`，
    /// 调用方无从区分"没有"与"坏掉"，这是会话校验需要的语义。
    pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::get(key)?;
        serde_helper::from_json_string(&raw).ok()
    }

    /// 序列化并写入 JSON 值，返回操作是否成功
    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_helper::to_json_string(value) {
            Ok(json) => Self::set(key, &json),
            Err(_) => false,
        }
    }
}
