//! Attribution requirements dialog

use leptos::*;

const ATTRIBUTION_DOMAINS: [(&str, &str, &str); 3] = [
    (
        "irensaltali.com",
        "https://irensaltali.com",
        "Personal website & portfolio",
    ),
    ("sendfax.pro", "https://sendfax.pro", "Professional fax service"),
    (
        "zenrise.app",
        "https://zenrise.app",
        "Wellness & productivity app",
    ),
];

#[component]
pub fn AttributionPopup(
    /// Trigger label; defaults to the footer wording.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let label = label.unwrap_or_else(|| "Attribution".to_string());

    view! {
        <button
            class="hover:text-foreground transition-colors hover:underline"
            on:click=move |_| set_open.set(true)
        >
            {label}
        </button>

        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4">
                <div class="w-full max-w-md rounded-xl border bg-background p-6 shadow-xl">
                    <div class="flex items-start justify-between mb-2">
                        <h2 class="text-lg font-semibold">"📋 Attribution Requirements"</h2>
                        <button
                            class="text-muted-foreground hover:text-foreground"
                            aria-label="Close"
                            on:click=move |_| set_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <p class="text-sm text-muted-foreground mb-4">
                        "Free tier API usage requires a visible backlink to one of our partner sites."
                    </p>

                    <div class="space-y-2 mb-4">
                        <h4 class="font-medium text-sm">"How to Attribute"</h4>
                        <p class="text-sm text-muted-foreground">
                            "Add a visible link on your website or application footer, credits page, "
                            "or API documentation. The link must be reachable by visitors and must "
                            "not carry rel=\"nofollow\"."
                        </p>
                    </div>

                    <ul class="space-y-2">
                        {ATTRIBUTION_DOMAINS
                            .into_iter()
                            .map(|(name, url, description)| {
                                view! {
                                    <li class="border rounded-lg p-3">
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="font-medium underline hover:no-underline"
                                        >
                                            {name}
                                        </a>
                                        <p class="text-xs text-muted-foreground">{description}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}
