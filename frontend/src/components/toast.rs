//! 临时通知组件
//!
//! 每个页面持有一个 `(消息, 是否出错)` 信号，写入后 3 秒自动清除。
//! 所有失败都以这种非阻塞形式呈现，页面保持可交互。

use leptos::prelude::*;
use std::time::Duration;

/// 通知内容：消息文本与是否为错误
pub type Notification = Option<(String, bool)>;

/// 创建页面级通知信号
pub fn notification_signal() -> (ReadSignal<Notification>, WriteSignal<Notification>) {
    signal(None)
}

/// 推送一条通知并安排 3 秒后清除
pub fn push_notification(
    set_notification: WriteSignal<Notification>,
    message: impl Into<String>,
    is_error: bool,
) {
    set_notification.set(Some((message.into(), is_error)));
    set_timeout(
        move || set_notification.set(None),
        Duration::from_secs(3),
    );
}

/// 通知提示框，固定在页面右上角
#[component]
pub fn Toast(notification: ReadSignal<Notification>) -> impl IntoView {
    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
