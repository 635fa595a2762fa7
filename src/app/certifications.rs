use leptos::{html, prelude::*};

use crate::{content::Certification, tracker::SectionId};

#[component]
pub fn CertificationsSection(
    section_ref: NodeRef<html::Section>,
    certifications: &'static [Certification],
) -> impl IntoView {
    view! {
        <section id=SectionId::Certifications.as_str() node_ref=section_ref class="py-12 sm:py-20">
            <div class="max-w-5xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl font-bold mb-8 sm:mb-10 text-center text-blue-300">
                    "Certifications"
                </h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">
                    {certifications
                        .iter()
                        .map(|cert| {
                            view! {
                                <a
                                    href=cert.link.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="bg-gray-800 p-4 sm:p-5 rounded-2xl hover:bg-gray-700 transition-colors shadow-md reveal"
                                >
                                    <div class="flex items-center space-x-3 sm:space-x-4">
                                        <span class=format!("text-2xl flex-shrink-0 {}", cert.accent)>
                                            "🏅"
                                        </span>
                                        <div class="min-w-0">
                                            <h3 class="text-base sm:text-lg font-semibold truncate">
                                                {cert.title.clone()}
                                            </h3>
                                            <p class="text-sm sm:text-base text-gray-400">{cert.detail.clone()}</p>
                                        </div>
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
