//! Report domain page

use leptos::*;

use dc_client::{local, ApiClient, ApiError, ClientConfig};

use crate::components::SeoHead;

async fn submit_report(domain: String, reason: Option<String>) -> Result<(), String> {
    let client = ApiClient::new(ClientConfig::default())
        .map_err(|_| "Could not reach the report service. Please try again.".to_string())?;

    match client.report(&domain, reason.as_deref()).await {
        Ok(_) => Ok(()),
        Err(ApiError::Api { message, .. }) => Err(message),
        Err(_) => Err("Failed to report domain. Please try again.".to_string()),
    }
}

#[component]
pub fn ReportDomainPage() -> impl IntoView {
    let (domain, set_domain) = create_signal(String::new());
    let (reason, set_reason) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let clean_domain = domain.get().to_lowercase().trim().to_string();

        if clean_domain.is_empty() || !clean_domain.contains('.') {
            set_error.set("Please enter a valid domain (e.g., tempmail.com)".to_string());
            return;
        }

        if local::is_known_disposable(&clean_domain) {
            set_error.set("This domain is already in our database.".to_string());
            return;
        }

        set_loading.set(true);
        let reason_text = reason.get().trim().to_string();
        let reason_opt = (!reason_text.is_empty()).then_some(reason_text);

        spawn_local(async move {
            match submit_report(clean_domain, reason_opt).await {
                Ok(()) => set_submitted.set(true),
                Err(message) => set_error.set(message),
            }
            set_loading.set(false);
        });
    };

    let reset = move |_| {
        set_submitted.set(false);
        set_domain.set(String::new());
        set_reason.set(String::new());
    };

    view! {
        <SeoHead
            title="Report a Disposable Domain – DisposableCheck"
            description="Help improve our database by reporting disposable email domains you've encountered. All submissions are reviewed."
        />

        <section class="py-12">
            <div class="container mx-auto px-4 max-w-lg">
                <Show
                    when=move || !submitted.get()
                    fallback=move || view! {
                        <div class="rounded-xl border bg-card p-6">
                            <div class="text-center">
                                <div class="mx-auto mb-4 rounded-full bg-green-100 p-3 w-fit">
                                    <span class="text-3xl">"✅"</span>
                                </div>
                                <h2 class="text-xl font-semibold mb-2">"Thank You!"</h2>
                                <p class="text-muted-foreground mb-5">
                                    "Your domain report has been submitted for review. Our team will "
                                    "verify it and add it to the database if confirmed."
                                </p>
                                <button
                                    class="px-4 py-2 rounded-lg bg-primary text-primary-foreground font-medium"
                                    on:click=reset
                                >
                                    "Report Another Domain"
                                </button>
                            </div>
                        </div>
                    }
                >
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold mb-2">"Report a Disposable Domain"</h1>
                        <p class="text-muted-foreground">
                            "Help improve our database by reporting disposable email domains you've encountered."
                        </p>
                    </div>

                    <div class="rounded-xl border bg-card">
                        <div class="p-6 pb-0">
                            <h2 class="text-lg font-semibold">"Submit Domain"</h2>
                            <p class="text-sm text-muted-foreground">
                                "All submissions are reviewed before being added to our database."
                            </p>
                        </div>
                        <div class="p-6">
                            <form on:submit=on_submit class="space-y-4">
                                <div class="space-y-2">
                                    <label for="domain" class="text-sm font-medium">"Domain Name"</label>
                                    <input
                                        id="domain"
                                        name="domain"
                                        placeholder="e.g., tempmail.com"
                                        autocomplete="off"
                                        spellcheck="false"
                                        class="w-full rounded-lg border bg-background px-3 py-2 text-sm"
                                        disabled=loading
                                        on:input=move |ev| set_domain.set(event_target_value(&ev))
                                        prop:value=domain
                                    />
                                </div>

                                <div class="space-y-2">
                                    <label for="reason" class="text-sm font-medium">
                                        "Why is this disposable? (optional)"
                                    </label>
                                    <textarea
                                        id="reason"
                                        name="reason"
                                        rows="3"
                                        placeholder="Provide any context about why this domain should be flagged…"
                                        class="w-full rounded-lg border bg-background px-3 py-2 text-sm"
                                        disabled=loading
                                        on:input=move |ev| set_reason.set(event_target_value(&ev))
                                        prop:value=reason
                                    ></textarea>
                                </div>

                                <Show when=move || !error.get().is_empty()>
                                    <div class="rounded-lg border border-destructive bg-destructive/5 p-3">
                                        <p class="text-sm font-medium text-destructive">"Error"</p>
                                        <p class="text-sm text-destructive">{move || error.get()}</p>
                                    </div>
                                </Show>

                                <button
                                    type="submit"
                                    class="w-full py-2.5 rounded-lg bg-primary text-primary-foreground font-medium disabled:opacity-50"
                                    disabled=loading
                                >
                                    {move || if loading.get() { "Submitting..." } else { "Submit Report" }}
                                </button>
                            </form>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
