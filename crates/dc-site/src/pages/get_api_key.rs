//! API key signup page

use leptos::*;
use wasm_bindgen::JsCast;

use dc_client::{local, ApiClient, ApiError, ClientConfig};

use crate::components::{AttributionPopup, SeoHead};

const QUICK_START: &str = r#"curl -X GET \
  'https://api.disposablecheck.com/v1/check?email=test@tempmail.com' \
  -H 'X-API-Key: your_api_key_here'"#;

/// Container the bot-verification widget mounts into. The widget writes its
/// opaque token into the hidden input; we only forward it.
#[component]
fn BotChallenge() -> impl IntoView {
    view! {
        <div class="bot-challenge" data-sitekey="disposablecheck-site">
            <input type="hidden" id="bot-challenge-token" name="bot-challenge-token" value=""/>
        </div>
    }
}

fn challenge_token() -> Option<String> {
    document()
        .get_element_by_id("bot-challenge-token")
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
}

async fn submit_key_request(email: String, token: String) -> Result<(), String> {
    let client = ApiClient::new(ClientConfig::default())
        .map_err(|_| "Could not reach the key service. Please try again.".to_string())?;

    match client.request_key(&email, &token).await {
        Ok(_) => Ok(()),
        Err(ApiError::Api { message, .. }) => Err(message),
        Err(_) => Err("Failed to request an API key. Please try again.".to_string()),
    }
}

#[component]
pub fn GetApiKeyPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (submitted, set_submitted) = create_signal(false);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let address = email.get().trim().to_string();
        if !local::is_valid_email(&address) {
            set_error.set("Please enter a valid email address.".to_string());
            return;
        }

        let Some(token) = challenge_token() else {
            set_error.set("Please complete the verification challenge.".to_string());
            return;
        };

        set_loading.set(true);
        spawn_local(async move {
            match submit_key_request(address, token).await {
                Ok(()) => set_submitted.set(true),
                Err(message) => set_error.set(message),
            }
            set_loading.set(false);
        });
    };

    view! {
        <SeoHead
            title="Get Your Free API Key – DisposableCheck"
            description="Start detecting disposable emails in your application today. Free tier with 1,000 requests per day."
        />

        <section class="py-12">
            <div class="container mx-auto px-4 max-w-lg">
                <Show
                    when=move || !submitted.get()
                    fallback=|| view! {
                        <div class="rounded-xl border bg-card p-6">
                            <div class="text-center mb-6">
                                <div class="mx-auto mb-4 rounded-full bg-green-100 p-3 w-fit">
                                    <span class="text-3xl">"✅"</span>
                                </div>
                                <h2 class="text-xl font-semibold mb-2">"Your API Key is on its Way!"</h2>
                                <p class="text-muted-foreground">
                                    "We've emailed your key to the address you provided. "
                                    "Keep it safe; you can use it to make API requests."
                                </p>
                            </div>

                            <div class="space-y-4">
                                <div class="border rounded-lg p-4 bg-amber-50 border-amber-200">
                                    <h4 class="font-medium mb-2 text-amber-800 flex items-center gap-2">
                                        "⚠️ Attribution Required"
                                        <AttributionPopup label="Details"/>
                                    </h4>
                                    <p class="text-sm text-amber-700">
                                        "Free tier usage requires a visible backlink to one of our "
                                        "partner sites on your application."
                                    </p>
                                </div>

                                <div class="border rounded-lg p-4 bg-muted/50">
                                    <h4 class="font-medium mb-2">"Quick Start"</h4>
                                    <pre class="text-sm overflow-x-auto">{QUICK_START}</pre>
                                </div>

                                <div class="text-center text-sm text-muted-foreground">
                                    <p>"Free tier: 1,000 requests/day (attribution required)"</p>
                                </div>
                            </div>
                        </div>
                    }
                >
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold mb-2">"Get Your Free API Key"</h1>
                        <p class="text-muted-foreground">
                            "Start detecting disposable emails in your application today."
                        </p>
                    </div>

                    <div class="rounded-xl border bg-card">
                        <div class="p-6 pb-0">
                            <h2 class="text-lg font-semibold flex items-center gap-2">
                                "🔑 Request API Key"
                            </h2>
                            <p class="text-sm text-muted-foreground">
                                "Enter your email to receive your free API key."
                            </p>
                        </div>
                        <div class="p-6">
                            <form on:submit=on_submit class="space-y-4">
                                <div class="space-y-2">
                                    <label for="email" class="text-sm font-medium">"Email Address"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        placeholder="you@example.com"
                                        required
                                        class="w-full rounded-lg border bg-background px-3 py-2 text-sm"
                                        disabled=loading
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        prop:value=email
                                    />
                                </div>

                                <BotChallenge/>

                                <Show when=move || !error.get().is_empty()>
                                    <div class="rounded-lg border border-destructive bg-destructive/5 p-3">
                                        <p class="text-sm text-destructive">{move || error.get()}</p>
                                    </div>
                                </Show>

                                <button
                                    type="submit"
                                    class="w-full py-2.5 rounded-lg bg-primary text-primary-foreground font-medium disabled:opacity-50"
                                    disabled=loading
                                >
                                    {move || if loading.get() { "Requesting..." } else { "Get Free API Key" }}
                                </button>

                                <p class="text-xs text-center text-muted-foreground">
                                    "By signing up, you agree to our "
                                    <a href="/terms" class="underline hover:text-foreground">"Terms of Service"</a>
                                    "."
                                </p>
                            </form>
                        </div>
                    </div>

                    <div class="mt-8 grid gap-4 text-center">
                        <div class="border rounded-lg p-4">
                            <h3 class="font-semibold mb-1">"Free Forever"</h3>
                            <p class="text-sm text-muted-foreground">"1,000 API calls/day with attribution"</p>
                        </div>
                        <div class="border rounded-lg p-4">
                            <h3 class="font-semibold mb-1">"Simple Attribution"</h3>
                            <p class="text-sm text-muted-foreground">"Just add a backlink to get started"</p>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}
