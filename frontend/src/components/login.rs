//! 登录页
//!
//! 凭据校验完全在客户端完成（内置用户表），不涉及网络。
//! 成功后会话写入 LocalStorage，路由服务监听到会话变化会
//! 自动把用户带到对应角色的面板。

use leptos::prelude::*;

use fileflux_shared::DEPARTMENTS;

use crate::auth::{login, use_auth};
use crate::components::icons::{Building2, Lock, LogIn, User};
use crate::components::navbar::Navbar;
use crate::components::toast::{Toast, notification_signal, push_notification};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (department, set_department) = signal(String::new());
    let (notification, set_notification) = notification_signal();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();
        let d = department.get();
        if u.is_empty() || p.is_empty() || d.is_empty() {
            push_notification(set_notification, "Please fill in all fields", true);
            return;
        }

        if login(&auth, &u, &p, &d) {
            // 重定向由路由服务完成，这里只反馈结果
            push_notification(set_notification, format!("Welcome {u}! Redirecting..."), false);
        } else {
            push_notification(set_notification, "Invalid login details", true);
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <Toast notification=notification />

            <div class="hero py-16">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                        <p class="text-base-content/70">
                            "Sign in with your department credentials"
                        </p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="username">
                                    <span class="label-text flex items-center gap-2">
                                        <User attr:class="h-4 w-4 text-primary" /> "Username"
                                    </span>
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    placeholder="Enter username"
                                    on:input=move |ev| set_username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                />
                            </div>

                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text flex items-center gap-2">
                                        <Lock attr:class="h-4 w-4 text-primary" /> "Password"
                                    </span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="Enter password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                />
                            </div>

                            <div class="form-control">
                                <label class="label" for="department">
                                    <span class="label-text flex items-center gap-2">
                                        <Building2 attr:class="h-4 w-4 text-primary" /> "Department"
                                    </span>
                                </label>
                                <select
                                    id="department"
                                    class="select select-bordered"
                                    on:change=move |ev| set_department.set(event_target_value(&ev))
                                >
                                    <option value="" selected=move || department.get().is_empty()>
                                        "Select department"
                                    </option>
                                    {DEPARTMENTS
                                        .iter()
                                        .map(|dept| {
                                            let dept = *dept;
                                            view! {
                                                <option
                                                    value=dept
                                                    selected=move || department.get() == dept
                                                >
                                                    {dept}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="form-control mt-6">
                                <button type="submit" class="btn btn-primary gap-2">
                                    <LogIn attr:class="h-5 w-5" /> "Sign In"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
