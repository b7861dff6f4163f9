//! Terms of service page

use leptos::*;

use crate::components::{AttributionPopup, SeoHead};

#[component]
fn TermsCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-xl border bg-card">
            <div class="p-6 pb-2">
                <h2 class="text-lg font-semibold">{title}</h2>
            </div>
            <div class="p-6 pt-0 text-sm text-muted-foreground space-y-3">{children()}</div>
        </div>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <SeoHead
            title="Terms of Service – DisposableCheck"
            description="Terms of service for the DisposableCheck disposable email detection API, including attribution requirements for the free tier."
        />

        <section class="py-12">
            <div class="container mx-auto px-4 max-w-4xl">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Terms of Service"</h1>
                    <p class="text-muted-foreground">"Last updated: January 26, 2026"</p>
                </div>

                <div class="space-y-6">
                    <TermsCard title="1. Acceptance of Terms">
                        <p>
                            "By accessing or using the DisposableCheck API and services (\"Service\"), "
                            "you agree to be bound by these Terms of Service (\"Terms\"). If you do not "
                            "agree to these Terms, do not use our Service."
                        </p>
                        <p>
                            "We reserve the right to modify these Terms at any time. Continued use of "
                            "the Service after any changes constitutes your acceptance of the new Terms."
                        </p>
                    </TermsCard>

                    <TermsCard title="2. API Usage">
                        <p>
                            "The DisposableCheck API is provided for the purpose of detecting disposable "
                            "and temporary email addresses. You agree to:"
                        </p>
                        <ul class="list-disc list-inside space-y-1 ml-2">
                            <li>"Use the API only for lawful purposes"</li>
                            <li>"Not exceed rate limits specified for your tier"</li>
                            <li>"Not attempt to circumvent security measures or access controls"</li>
                            <li>"Not redistribute, resell, or sublicense API access"</li>
                            <li>"Not use the API to harass, abuse, or harm others"</li>
                        </ul>
                    </TermsCard>

                    <div class="rounded-xl border border-amber-200 bg-amber-50/50">
                        <div class="p-6 pb-2">
                            <h2 class="text-lg font-semibold flex items-center gap-2">
                                "3. Attribution Requirements (Free Tier)"
                                <AttributionPopup label="Details"/>
                            </h2>
                            <p class="text-sm text-muted-foreground">"Required for all free tier API users"</p>
                        </div>
                        <div class="p-6 pt-0 text-sm text-muted-foreground space-y-3">
                            <p>
                                "Free tier API access requires visible attribution in the form of a "
                                "backlink to one of our designated domains. Attribution must be:"
                            </p>
                            <ul class="list-disc list-inside space-y-1 ml-2">
                                <li>"Publicly visible on your website or application"</li>
                                <li>"A dofollow link (rel=\"nofollow\" is not permitted)"</li>
                                <li>"Maintained for the duration of your API usage"</li>
                            </ul>
                            <p>
                                "Failure to provide proper attribution may result in API access "
                                "revocation without notice."
                            </p>
                        </div>
                    </div>

                    <TermsCard title="4. Limitation of Liability & Disclaimer">
                        <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                            <p class="font-medium text-red-800 mb-2">"DISCLAIMER OF WARRANTIES"</p>
                            <p class="text-red-700">
                                "THE SERVICE IS PROVIDED \"AS IS\" AND \"AS AVAILABLE\" WITHOUT "
                                "WARRANTIES OF ANY KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT "
                                "LIMITED TO IMPLIED WARRANTIES OF MERCHANTABILITY, FITNESS FOR A "
                                "PARTICULAR PURPOSE, AND NON-INFRINGEMENT."
                            </p>
                        </div>
                        <p>"DisposableCheck does not guarantee:"</p>
                        <ul class="list-disc list-inside space-y-1 ml-2">
                            <li>"100% accuracy in detecting disposable email domains"</li>
                            <li>"Uninterrupted or error-free service availability"</li>
                            <li>"That the service will meet your specific requirements"</li>
                            <li>"The completeness or timeliness of our domain database"</li>
                        </ul>
                        <p>
                            "Our total liability for any claims arising from or related to the Service "
                            "shall not exceed the amount you paid us (if any) in the twelve (12) months "
                            "preceding the claim."
                        </p>
                    </TermsCard>

                    <TermsCard title="5. Indemnification">
                        <p>
                            "You agree to indemnify, defend, and hold harmless DisposableCheck and its "
                            "owners, operators, affiliates, officers, directors, employees, and agents "
                            "from and against any claims, liabilities, damages, losses, costs, or "
                            "expenses arising out of or in any way connected with:"
                        </p>
                        <ul class="list-disc list-inside space-y-1 ml-2">
                            <li>"Your access to or use of the Service"</li>
                            <li>"Your violation of these Terms"</li>
                            <li>"Your violation of any third-party rights"</li>
                            <li>"Any content you submit or transmit through the Service"</li>
                        </ul>
                    </TermsCard>

                    <TermsCard title="6. Data & Privacy">
                        <p>"We collect minimal data necessary to provide the Service:"</p>
                        <ul class="list-disc list-inside space-y-1 ml-2">
                            <li>"API requests may be logged for rate limiting and abuse prevention"</li>
                            <li>"Email addresses submitted for checking are not stored permanently"</li>
                            <li>"We do not sell or share your data with third parties"</li>
                        </ul>
                        <p>"By using the Service, you consent to our data practices as described herein."</p>
                    </TermsCard>

                    <TermsCard title="7. Termination">
                        <p>
                            "We reserve the right to suspend or terminate your access to the Service at "
                            "any time, with or without cause, with or without notice. Upon termination:"
                        </p>
                        <ul class="list-disc list-inside space-y-1 ml-2">
                            <li>"Your API keys will be revoked immediately"</li>
                            <li>"You must cease all use of the Service"</li>
                            <li>"Provisions that by their nature should survive termination shall survive"</li>
                        </ul>
                    </TermsCard>

                    <TermsCard title="8. Governing Law">
                        <p>
                            "These Terms shall be governed by and construed in accordance with "
                            "applicable laws, without regard to conflict of law principles. Any "
                            "disputes arising from these Terms or the Service shall be resolved "
                            "through binding arbitration."
                        </p>
                    </TermsCard>
                </div>
            </div>
        </section>
    }
}
