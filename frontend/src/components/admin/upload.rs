//! 文档上传页
//!
//! 选择文件后提交 multipart 请求，后端完成分类、摘要与路由，
//! 成功时原样展示处理结果。未配置后端地址时直接给出提示，不渲染表单。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::HtmlInputElement;

use fileflux_shared::UploadResult;

use crate::api::ApiClient;
use crate::components::icons::{CheckCircle2, RefreshCw, Upload};
use crate::components::navbar::Navbar;
use crate::components::state_views::UnconfiguredNotice;
use crate::components::toast::{Toast, notification_signal, push_notification};

#[component]
pub fn AdminUploadPage() -> impl IntoView {
    let api = ApiClient::from_env();

    let (file, set_file) = signal::<Option<leptos::web_sys::File>>(None);
    let (processing, set_processing) = signal(false);
    let (result, set_result) = signal::<Option<UploadResult>>(None);
    let (notification, set_notification) = notification_signal();

    let on_file_change = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_file.set(input.files().and_then(|list| list.get(0)));
    };

    let on_upload = {
        let api = api.clone();
        move |_: leptos::web_sys::MouseEvent| {
            let Some(api) = api.clone() else {
                return;
            };
            let Some(f) = file.get() else {
                push_notification(set_notification, "Choose a file first", true);
                return;
            };
            if processing.get() {
                return;
            }

            set_processing.set(true);
            spawn_local(async move {
                match api.upload_document(&f).await {
                    Ok(res) => set_result.set(Some(res)),
                    Err(e) => {
                        push_notification(
                            set_notification,
                            format!("Upload failed: {e}"),
                            true,
                        );
                    }
                }
                set_processing.set(false);
            });
        }
    };

    let on_reset = move |_: leptos::web_sys::MouseEvent| {
        set_result.set(None);
        set_file.set(None);
    };

    let configured = api.is_some();

    let body = move || {
        if !configured {
            return view! { <UnconfiguredNotice /> }.into_any();
        }

        match result.get() {
            Some(res) => view! {
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-3">
                        <div class="flex items-center gap-3">
                            <CheckCircle2 attr:class="h-8 w-8 text-success" />
                            <h2 class="card-title">"Document Processed"</h2>
                        </div>
                        <div class="divider my-0"></div>
                        <p><span class="font-semibold">"File: "</span>{res.filename}</p>
                        <p><span class="font-semibold">"Category: "</span>{res.category}</p>
                        <p><span class="font-semibold">"Routed To: "</span>{res.routed_to}</p>
                        <div>
                            <p class="font-semibold">"Summary"</p>
                            <p class="text-base-content/70 whitespace-pre-wrap">{res.summary}</p>
                        </div>
                        <div class="card-actions justify-end pt-2">
                            <button on:click=on_reset class="btn btn-outline gap-2">
                                <RefreshCw attr:class="h-4 w-4" /> "Upload Another"
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">"Select a document"</h2>
                        <input
                            type="file"
                            class="file-input file-input-bordered w-full"
                            on:change=on_file_change
                        />
                        <button
                            on:click=on_upload.clone()
                            class="btn btn-primary gap-2"
                            disabled=move || processing.get() || file.get().is_none()
                        >
                            {move || if processing.get() {
                                view! {
                                    <span class="loading loading-spinner loading-sm"></span>
                                    "Processing..."
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Upload attr:class="h-5 w-5" /> "Upload & Process"
                                }
                                .into_any()
                            }}
                        </button>
                        <p class="text-sm text-base-content/60">
                            "The file is classified, summarized, and routed to the owning "
                            "department automatically."
                        </p>
                    </div>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <section class="max-w-2xl mx-auto px-6 py-12 space-y-8">
                <h1 class="text-3xl font-bold">"Upload Document"</h1>
                {body}
            </section>
        </div>
    }
}
