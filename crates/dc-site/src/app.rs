//! Main application component

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <div class="min-h-screen bg-background">
                <SiteHeader/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/bulk" view=BulkCheckPage/>
                        <Route path="/report" view=ReportDomainPage/>
                        <Route path="/docs" view=ApiDocsPage/>
                        <Route path="/get-api-key" view=GetApiKeyPage/>
                        <Route path="/terms" view=TermsPage/>
                        <Route path="/the-disposable-email-epidemic" view=ResearchPage/>
                        <Route path="/value-proposition" view=ValuePropositionPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
