//! Single email check widget

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use dc_client::{local, ApiClient, ClientConfig};

const DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
struct CheckOutcome {
    domain: String,
    is_disposable: bool,
}

/// One lookup, API-first with the bundled list as a neutral fallback.
async fn check_email(email: String) -> CheckOutcome {
    if let Ok(client) = ApiClient::new(ClientConfig::default()) {
        match client.check(&email, false).await {
            Ok(response) => {
                return CheckOutcome {
                    domain: response.domain,
                    is_disposable: response.is_disposable,
                };
            }
            Err(error) => {
                tracing::debug!("Check fell back to bundled list: {}", error);
            }
        }
    }

    let offline = local::check_offline(&email);
    CheckOutcome {
        domain: offline.domain,
        is_disposable: offline.is_disposable,
    }
}

#[component]
pub fn EmailChecker() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<CheckOutcome>);
    let (checking, set_checking) = create_signal(false);

    // Keystrokes are debounced; responses that lose the race against a
    // newer keystroke are dropped instead of clobbering the fresh result.
    let generation = store_value(0u64);
    let pending = store_value(None::<TimeoutHandle>);

    let is_valid = move || local::is_valid_email(&email.get());

    create_effect(move |_| {
        let current = email.get();

        pending.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
        generation.update_value(|gen| *gen += 1);

        if !local::is_valid_email(&current) {
            set_result.set(None);
            set_checking.set(false);
            return;
        }

        set_checking.set(true);
        let issued = generation.get_value();
        let handle = set_timeout_with_handle(
            move || {
                spawn_local(async move {
                    let outcome = check_email(current).await;
                    if generation.get_value() == issued {
                        set_result.set(Some(outcome));
                        set_checking.set(false);
                    }
                });
            },
            DEBOUNCE,
        );
        pending.set_value(handle.ok());
    });

    view! {
        <div class="w-full max-w-xl mx-auto">
            <div class="relative">
                <span class="absolute left-4 top-1/2 -translate-y-1/2 text-muted-foreground">"✉️"</span>
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder="Enter email address to check…"
                    class="w-full pl-12 pr-12 h-14 text-lg rounded-lg border bg-background focus:ring-2 focus:ring-primary"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=email
                />
                <Show when=move || checking.get()>
                    <span class="absolute right-4 top-1/2 -translate-y-1/2 animate-spin text-muted-foreground">"⏳"</span>
                </Show>
            </div>

            <Show when=move || {
                !email.get().is_empty() && is_valid() && result.get().is_some() && !checking.get()
            }>
                {move || {
                    result
                        .get()
                        .map(|outcome| {
                            if outcome.is_disposable {
                                view! {
                                    <div class="mt-4 rounded-xl border border-destructive bg-destructive/5 flex items-center gap-3 p-4">
                                        <span class="text-2xl shrink-0">"❌"</span>
                                        <div>
                                            <p class="font-medium text-destructive">"Disposable Email Detected"</p>
                                            <p class="text-sm text-muted-foreground">
                                                "The domain " <span class="font-mono">{outcome.domain.clone()}</span>
                                                " is a known disposable email provider."
                                            </p>
                                        </div>
                                    </div>
                                }
                            } else {
                                view! {
                                    <div class="mt-4 rounded-xl border border-green-500 bg-green-50 flex items-center gap-3 p-4">
                                        <span class="text-2xl shrink-0">"✅"</span>
                                        <div>
                                            <p class="font-medium text-green-700">"Valid Email Domain"</p>
                                            <p class="text-sm text-muted-foreground">
                                                "The domain " <span class="font-mono">{outcome.domain.clone()}</span>
                                                " appears to be a legitimate email provider."
                                            </p>
                                        </div>
                                    </div>
                                }
                            }
                        })
                }}
            </Show>

            <Show when=move || !email.get().is_empty() && !is_valid()>
                <p class="mt-2 text-sm text-muted-foreground">"Please enter a valid email address"</p>
            </Show>
        </div>
    }
}
