//! Bulk check page

use leptos::*;

use dc_client::local;

use crate::components::SeoHead;

/// Bulk checking ships behind the Pro tier for now.
const BULK_IS_PRO: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EmailRow {
    email: String,
    is_valid: bool,
    is_disposable: bool,
    domain: String,
}

/// Split pasted input on newlines, commas, and semicolons.
fn parse_emails(input: &str) -> Vec<String> {
    input
        .split(['\n', ',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn process_emails(input: &str) -> Vec<EmailRow> {
    parse_emails(input)
        .into_iter()
        .map(|email| {
            let is_valid = local::is_valid_email(&email);
            let check = local::check_offline(&email);
            EmailRow {
                email,
                is_valid,
                is_disposable: is_valid && check.is_disposable,
                domain: check.domain,
            }
        })
        .collect()
}

fn results_to_csv(rows: &[EmailRow]) -> String {
    let mut csv = String::from("Email,Valid,Disposable,Domain\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            row.email, row.is_valid, row.is_disposable, row.domain
        ));
    }
    csv
}

/// Data URL carrying the CSV, so export works as a plain download link.
fn csv_data_url(rows: &[EmailRow]) -> String {
    let mut encoded = String::new();
    for byte in results_to_csv(rows).bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'@' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("data:text/csv;charset=utf-8,{encoded}")
}

#[component]
pub fn BulkCheckPage() -> impl IntoView {
    let (input, set_input) = create_signal(String::new());
    let (results, set_results) = create_signal(Vec::<EmailRow>::new());

    let on_check = move |_| {
        if BULK_IS_PRO {
            return;
        }
        set_results.set(process_emails(&input.get()));
    };

    let valid_count = move || {
        results
            .get()
            .iter()
            .filter(|r| r.is_valid && !r.is_disposable)
            .count()
    };
    let disposable_count = move || results.get().iter().filter(|r| r.is_disposable).count();
    let invalid_count = move || results.get().iter().filter(|r| !r.is_valid).count();

    view! {
        <SeoHead
            title="Bulk Email Check – DisposableCheck"
            description="Check multiple email addresses at once. Paste emails or upload a CSV file to find disposable addresses in your list."
        />

        <section class="py-12">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-8">
                    <div class="inline-flex items-center gap-2 mb-4">
                        <h1 class="text-3xl font-bold">"Bulk Email Check"</h1>
                        <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-gradient-to-r from-amber-500 to-orange-500 text-white">
                            "✨ Pro"
                        </span>
                    </div>
                    <p class="text-muted-foreground">
                        "Check multiple email addresses at once. Paste emails or upload a CSV file."
                    </p>
                </div>

                // Pro upsell
                <Show when=|| BULK_IS_PRO>
                    <div class="mb-6 rounded-xl border-2 border-dashed border-amber-300 bg-gradient-to-br from-amber-50 to-orange-50 py-12">
                        <div class="text-center">
                            <div class="mx-auto mb-4 rounded-full bg-gradient-to-br from-amber-400 to-orange-500 p-4 w-fit shadow-lg">
                                <span class="text-3xl">"🔒"</span>
                            </div>
                            <h2 class="text-2xl font-bold mb-2 text-amber-700">
                                "Bulk Check is a Pro Feature"
                            </h2>
                            <p class="text-muted-foreground mb-6 max-w-md mx-auto">
                                "Coming soon! Upgrade to Pro to check thousands of emails at once "
                                "with CSV upload, export, and detailed analytics."
                            </p>
                            <div class="flex flex-col sm:flex-row gap-3 justify-center">
                                <button
                                    disabled
                                    class="px-6 py-3 rounded-lg bg-gradient-to-r from-amber-500 to-orange-500 text-white font-medium opacity-80 cursor-not-allowed"
                                >
                                    "✨ Coming Soon"
                                </button>
                                <a
                                    href="mailto:hello@disposablecheck.com?subject=Interested in Bulk Check Pro"
                                    class="px-6 py-3 rounded-lg border font-medium hover:bg-muted transition"
                                >
                                    "Notify Me"
                                </a>
                            </div>
                        </div>
                    </div>
                </Show>

                // Input form, disabled while gated
                <div class=move || {
                    if BULK_IS_PRO {
                        "mb-6 rounded-xl border bg-card p-6 opacity-50 pointer-events-none"
                    } else {
                        "mb-6 rounded-xl border bg-card p-6"
                    }
                }>
                    <h2 class="text-lg font-semibold">"Enter Emails"</h2>
                    <p class="text-sm text-muted-foreground mb-4">
                        "Paste email addresses separated by new lines, commas, or semicolons"
                    </p>
                    <textarea
                        rows="6"
                        placeholder="email1@example.com\nemail2@tempmail.com\nemail3@gmail.com"
                        class="w-full rounded-lg border bg-background p-3 text-sm font-mono"
                        disabled=BULK_IS_PRO
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        prop:value=input
                    ></textarea>
                    <div class="mt-4 flex flex-wrap gap-3">
                        <button
                            class="px-4 py-2 rounded-lg bg-primary text-primary-foreground font-medium disabled:opacity-50"
                            disabled=move || BULK_IS_PRO || input.get().is_empty()
                            on:click=on_check
                        >
                            "Check Emails"
                        </button>
                        <button class="px-4 py-2 rounded-lg border font-medium" disabled=BULK_IS_PRO>
                            "⬆️ Upload CSV"
                        </button>
                    </div>
                </div>

                <Show when=move || !results.get().is_empty() && !BULK_IS_PRO>
                    <div class="rounded-xl border bg-card">
                        <div class="flex items-center justify-between p-6 pb-0">
                            <div>
                                <h2 class="text-lg font-semibold">"Results"</h2>
                                <p class="text-sm text-muted-foreground">
                                    {move || format!(
                                        "{} valid, {} disposable, {} invalid",
                                        valid_count(),
                                        disposable_count(),
                                        invalid_count(),
                                    )}
                                </p>
                            </div>
                            <a
                                href=move || csv_data_url(&results.get())
                                download="email-check-results.csv"
                                class="px-3 py-1.5 rounded-lg border text-sm font-medium"
                            >
                                "⬇️ Export CSV"
                            </a>
                        </div>
                        <div class="p-6">
                            <table class="min-w-full divide-y">
                                <thead>
                                    <tr class="text-left text-xs font-medium text-muted-foreground uppercase">
                                        <th class="px-4 py-3">"Email"</th>
                                        <th class="px-4 py-3">"Domain"</th>
                                        <th class="px-4 py-3 text-right">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y">
                                    <For
                                        each=move || results.get()
                                        key=|row| row.email.clone()
                                        children=move |row| {
                                            let badge = if !row.is_valid {
                                                view! {
                                                    <span class="px-2 py-0.5 text-xs rounded-full border">"Invalid"</span>
                                                }
                                            } else if row.is_disposable {
                                                view! {
                                                    <span class="px-2 py-0.5 text-xs rounded-full bg-destructive text-destructive-foreground">"Disposable"</span>
                                                }
                                            } else {
                                                view! {
                                                    <span class="px-2 py-0.5 text-xs rounded-full bg-green-100 text-green-700">"Valid"</span>
                                                }
                                            };
                                            view! {
                                                <tr>
                                                    <td class="px-4 py-3 font-mono text-sm">{row.email.clone()}</td>
                                                    <td class="px-4 py-3 font-mono text-sm text-muted-foreground">
                                                        {if row.domain.is_empty() { "-".to_string() } else { row.domain.clone() }}
                                                    </td>
                                                    <td class="px-4 py-3 text-right">{badge}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emails_splits_separators() {
        let parsed = parse_emails("a@b.com\nc@d.com, e@f.com ; g@h.com\n\n");
        assert_eq!(parsed, vec!["a@b.com", "c@d.com", "e@f.com", "g@h.com"]);
    }

    #[test]
    fn test_process_emails_flags_rows() {
        let rows = process_emails("ok@example.com\nburner@tempmail.com\nnot-an-email");
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_valid && !rows[0].is_disposable);
        assert!(rows[1].is_valid && rows[1].is_disposable);
        assert!(!rows[2].is_valid && !rows[2].is_disposable);
    }

    #[test]
    fn test_results_to_csv() {
        let rows = process_emails("burner@tempmail.com");
        let csv = results_to_csv(&rows);
        assert!(csv.starts_with("Email,Valid,Disposable,Domain\n"));
        assert!(csv.contains("burner@tempmail.com,true,true,tempmail.com"));
    }

    #[test]
    fn test_csv_data_url_is_percent_encoded() {
        let rows = process_emails("burner@tempmail.com");
        let url = csv_data_url(&rows);
        assert!(url.starts_with("data:text/csv;charset=utf-8,"));
        assert!(url.contains("%2C"));
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
    }
}
