//! 页面视图状态
//!
//! 每个页面围绕后端请求的生命周期在五个状态间流转，
//! 用一个带标签的枚举代替散落的布尔标志，每个变体对应一个渲染分支。

use std::fmt::Display;

/// 单个页面（或页面内某块数据）的视图状态
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// 未配置后端地址：不发起任何网络请求，渲染配置指引
    Unconfigured,
    /// 请求进行中
    Loading,
    /// 请求成功但没有数据
    Empty,
    /// 请求失败，携带展示用的原因
    Error(String),
    /// 请求成功且有数据
    Loaded(T),
}

impl<T> ViewState<T> {
    /// 从请求结果转换；空集合的判定由 `from_list_result` 负责
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::Loaded(data),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_unconfigured(&self) -> bool {
        matches!(self, ViewState::Unconfigured)
    }

    /// 已加载数据的引用
    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<U> ViewState<Vec<U>> {
    /// 列表型结果的转换：成功但集合为空时进入 `Empty`
    pub fn from_list_result<E: Display>(result: Result<Vec<U>, E>) -> Self {
        match result {
            Ok(list) if list.is_empty() => ViewState::Empty,
            Ok(list) => ViewState::Loaded(list),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_becomes_loaded() {
        let state = ViewState::from_result::<&str>(Ok(7));
        assert_eq!(state, ViewState::Loaded(7));
        assert_eq!(state.loaded(), Some(&7));
    }

    #[test]
    fn err_result_becomes_error_with_message() {
        let state: ViewState<u32> = ViewState::from_result(Err("HTTP 502"));
        assert_eq!(state, ViewState::Error("HTTP 502".to_string()));
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn empty_list_becomes_empty_state() {
        let state = ViewState::from_list_result::<&str>(Ok(Vec::<u8>::new()));
        assert_eq!(state, ViewState::Empty);

        let state = ViewState::from_list_result::<&str>(Ok(vec![1u8]));
        assert_eq!(state, ViewState::Loaded(vec![1u8]));
    }

    #[test]
    fn unconfigured_is_terminal_until_config_changes() {
        let state: ViewState<u32> = ViewState::Unconfigured;
        assert!(state.is_unconfigured());
        assert!(!state.is_loading());
    }
}
