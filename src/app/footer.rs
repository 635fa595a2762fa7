use leptos::prelude::*;

use crate::content::Portfolio;

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <footer class="py-6 sm:py-8 bg-gray-900 border-t border-gray-700">
            <div class="max-w-6xl mx-auto px-4 text-center">
                <p class="text-sm sm:text-base text-gray-400">
                    {format!("© {} {}.", portfolio.copyright_year(), portfolio.profile.name)}
                </p>
            </div>
        </footer>
    }
}
