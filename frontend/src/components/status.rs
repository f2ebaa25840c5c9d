//! 文档状态的展示与切换组件

use leptos::prelude::*;

use fileflux_shared::DocStatus;

/// 状态徽章的配色
fn badge_class(status: &DocStatus) -> &'static str {
    match status {
        DocStatus::Pending => "badge badge-warning badge-outline",
        DocStatus::InProgress => "badge badge-info badge-outline",
        DocStatus::Completed => "badge badge-success badge-outline",
        DocStatus::Other(_) => "badge badge-ghost",
    }
}

/// 状态徽章
#[component]
pub fn StatusBadge(status: DocStatus) -> impl IntoView {
    let class = badge_class(&status);
    view! { <span class=class>{status.to_string()}</span> }
}

/// 状态切换按钮组（Pending / In Progress / Completed）
///
/// 点击即触发一次状态变更请求；当前状态高亮。
#[component]
pub fn StatusButtons(
    /// 当前状态信号
    current: Signal<DocStatus>,
    /// 点击某个状态时的回调
    #[prop(into)] on_select: Callback<DocStatus>,
) -> impl IntoView {
    view! {
        <div class="flex gap-3 flex-wrap">
            {DocStatus::KNOWN
                .iter()
                .cloned()
                .map(|status| {
                    let label = status.to_string();
                    let this = status.clone();
                    let is_current = move || current.get() == this;
                    view! {
                        <button
                            class=move || {
                                if is_current() {
                                    "btn btn-sm btn-primary"
                                } else {
                                    "btn btn-sm btn-outline btn-primary"
                                }
                            }
                            on:click=move |_| on_select.run(status.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_have_distinct_badges() {
        let classes: Vec<&str> = DocStatus::KNOWN.iter().map(badge_class).collect();
        assert_eq!(classes.len(), 3);
        assert!(classes.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn unknown_status_falls_back_to_ghost_badge() {
        assert_eq!(
            badge_class(&DocStatus::Other("Archived".into())),
            "badge badge-ghost"
        );
    }
}
