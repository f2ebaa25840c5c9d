//! 市场页（公开）：首页、关于、联系
//!
//! 纯静态视图，没有任何数据依赖。

use leptos::prelude::*;

use crate::components::icons::{Building2, FilePlus, Search};
use crate::components::navbar::Navbar;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />

            <div class="hero py-20">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold leading-tight">
                            "Intelligent Document " <span class="text-primary">"Processing"</span>
                        </h1>
                        <p class="py-6 text-lg text-base-content/70">
                            "FileFlux classifies, summarizes, and routes incoming documents to the "
                            "right department automatically, so teams only see what matters to them."
                        </p>
                        <Link to=AppRoute::Login>
                            <span class="btn btn-primary btn-lg">"Get Started"</span>
                        </Link>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto px-6 pb-20 grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <FilePlus attr:class="h-8 w-8 text-primary" />
                        <h3 class="card-title">"Upload & Route"</h3>
                        <p class="text-base-content/70">
                            "Drop in PDFs, scans, and office files. AI classification routes each "
                            "document to its owning department."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <Search attr:class="h-8 w-8 text-primary" />
                        <h3 class="card-title">"Semantic Search"</h3>
                        <p class="text-base-content/70">
                            "Find documents by meaning, not filenames — invoice totals, contract "
                            "IDs, employee names."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <Building2 attr:class="h-8 w-8 text-primary" />
                        <h3 class="card-title">"Department Workflows"</h3>
                        <p class="text-base-content/70">
                            "Track pending, in-progress, and completed work across every "
                            "department from one dashboard."
                        </p>
                    </div>
                </div>
            </div>

            <Footer />
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />

            <div class="max-w-3xl mx-auto px-6 py-20">
                <h1 class="text-4xl font-bold mb-6">"About FileFlux"</h1>
                <p class="text-lg text-base-content/70 mb-4">
                    "FileFlux is a document-management dashboard backed by an AI processing "
                    "pipeline. Uploaded documents are extracted, classified, summarized, and "
                    "routed to the department that should handle them."
                </p>
                <p class="text-lg text-base-content/70">
                    "Administrators get a global view — uploads, search, and per-department "
                    "progress — while employees see exactly the documents assigned to their "
                    "own department, with AI summaries and in-document search."
                </p>
            </div>

            <Footer />
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />

            <div class="max-w-3xl mx-auto px-6 py-20">
                <h1 class="text-4xl font-bold mb-6">"Contact Us"</h1>
                <div class="card bg-base-100 shadow">
                    <div class="card-body space-y-2">
                        <p><span class="font-semibold">"Support: "</span> "support@fileflux.example"</p>
                        <p><span class="font-semibold">"Sales: "</span> "sales@fileflux.example"</p>
                        <p class="text-base-content/70">
                            "We usually reply within one business day."
                        </p>
                    </div>
                </div>
            </div>

            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center border-t border-base-300 bg-base-100 py-8 text-base-content/60">
            <p>"© 2025 FileFlux — All rights reserved."</p>
        </footer>
    }
}
