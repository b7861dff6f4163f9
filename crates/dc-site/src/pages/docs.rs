//! API documentation page

use leptos::*;

use crate::components::{AttributionPopup, SeoHead};

const JS_EXAMPLE: &str = r#"const response = await fetch(
  'https://api.disposablecheck.com/v1/check?email=user@example.com',
  {
    headers: {
      'X-API-Key': 'your_api_key_here'
    }
  }
);

const data = await response.json();
console.log(data.is_disposable); // true or false"#;

const PYTHON_EXAMPLE: &str = r#"import requests

response = requests.get(
    'https://api.disposablecheck.com/v1/check',
    params={'email': 'user@example.com'},
    headers={'X-API-Key': 'your_api_key_here'}
)

data = response.json()
print(data['is_disposable'])  # True or False"#;

const CURL_EXAMPLE: &str = r#"curl -X GET \
  'https://api.disposablecheck.com/v1/check?email=user@example.com' \
  -H 'X-API-Key: your_api_key_here'"#;

const CHECK_RESPONSE_EXAMPLE: &str = r#"{
  "email": "user@tempmail.com",
  "domain": "tempmail.com",
  "is_disposable": true,
  "is_valid_format": true,
  "checked_at": "2026-01-15T10:30:00Z"
}"#;

#[component]
pub fn ApiDocsPage() -> impl IntoView {
    let (tab, set_tab) = create_signal("javascript");

    let tab_class = move |name: &'static str| {
        if tab.get() == name {
            "px-3 py-1.5 text-sm font-medium rounded-md bg-background shadow"
        } else {
            "px-3 py-1.5 text-sm font-medium rounded-md text-muted-foreground hover:text-foreground"
        }
    };

    view! {
        <SeoHead
            title="Disposable Email API Documentation – DisposableCheck"
            description="Integrate disposable email detection into your application with our free API. Endpoints, code examples, and rate limits."
        />

        <section class="py-12">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold mb-2">"API Documentation"</h1>
                    <p class="text-muted-foreground">
                        "Integrate disposable email detection into your application with our free API."
                    </p>
                </div>

                <div class="space-y-6">
                    // Check endpoint
                    <div class="rounded-xl border bg-card">
                        <div class="p-6 pb-0">
                            <h2 class="text-lg font-semibold flex items-center gap-2">
                                <span class="px-2 py-0.5 text-xs rounded-full bg-muted font-mono">"GET"</span>
                                "Check Email"
                            </h2>
                            <p class="text-sm text-muted-foreground">
                                "Check if an email address is from a disposable email provider."
                            </p>
                        </div>
                        <div class="p-6 space-y-4">
                            <div>
                                <h4 class="font-medium mb-2">"Endpoint"</h4>
                                <code class="block bg-muted p-3 rounded-md text-sm">
                                    "GET https://api.disposablecheck.com/v1/check?email={email}"
                                </code>
                            </div>
                            <div>
                                <h4 class="font-medium mb-2">"Headers"</h4>
                                <code class="block bg-muted p-3 rounded-md text-sm">
                                    "X-API-Key: your_api_key_here"
                                </code>
                            </div>
                            <div>
                                <h4 class="font-medium mb-2">"Response"</h4>
                                <pre class="bg-muted p-3 rounded-md text-sm overflow-x-auto">{CHECK_RESPONSE_EXAMPLE}</pre>
                            </div>
                        </div>
                    </div>

                    // Code examples
                    <div class="rounded-xl border bg-card">
                        <div class="p-6 pb-0">
                            <h2 class="text-lg font-semibold">"Code Examples"</h2>
                            <p class="text-sm text-muted-foreground">"Quick start examples in popular languages."</p>
                        </div>
                        <div class="p-6">
                            <div class="inline-flex gap-1 rounded-lg bg-muted p-1">
                                <button class=move || tab_class("javascript") on:click=move |_| set_tab.set("javascript")>
                                    "JavaScript"
                                </button>
                                <button class=move || tab_class("python") on:click=move |_| set_tab.set("python")>
                                    "Python"
                                </button>
                                <button class=move || tab_class("curl") on:click=move |_| set_tab.set("curl")>
                                    "cURL"
                                </button>
                            </div>
                            <pre class="mt-4 bg-muted p-4 rounded-md text-sm overflow-x-auto">
                                {move || match tab.get() {
                                    "python" => PYTHON_EXAMPLE,
                                    "curl" => CURL_EXAMPLE,
                                    _ => JS_EXAMPLE,
                                }}
                            </pre>
                        </div>
                    </div>

                    // Rate limits
                    <div class="rounded-xl border bg-card">
                        <div class="p-6 pb-0">
                            <h2 class="text-lg font-semibold">"Rate Limits"</h2>
                            <p class="text-sm text-muted-foreground">"API usage limits per tier."</p>
                        </div>
                        <div class="p-6 grid gap-4 md:grid-cols-2">
                            <div class="border rounded-lg p-4 border-amber-200 bg-amber-50/30">
                                <h4 class="font-semibold mb-2 flex items-center gap-2">
                                    "Free Tier"
                                    <AttributionPopup label="View Requirements"/>
                                </h4>
                                <ul class="text-sm text-muted-foreground space-y-1">
                                    <li>"• 1,000 requests per day"</li>
                                    <li>"• Single email checks"</li>
                                    <li>"• Email support"</li>
                                    <li>"• " <span class="text-amber-600 font-medium">"Attribution required"</span> " (backlink)"</li>
                                </ul>
                            </div>
                            <div class="border rounded-lg p-4">
                                <h4 class="font-semibold mb-2">"Pro Tier"</h4>
                                <ul class="text-sm text-muted-foreground space-y-1">
                                    <li>"• 100,000 requests per day"</li>
                                    <li>"• Bulk email checks"</li>
                                    <li>"• Priority support"</li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
