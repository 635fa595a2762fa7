use leptos::{html, prelude::*};

use crate::{content::Profile, tracker::SectionId};

#[component]
pub fn AboutSection(section_ref: NodeRef<html::Section>, profile: &'static Profile) -> impl IntoView {
    let education = &profile.education;
    view! {
        <section id=SectionId::About.as_str() node_ref=section_ref class="py-12 sm:py-20 bg-gray-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8 sm:mb-12 text-blue-300 reveal">
                    "About Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-6 sm:gap-8">
                    <div class="space-y-4 sm:space-y-6 reveal">
                        <Card title="🎯 Professional Summary">
                            <p class="text-sm sm:text-base text-gray-300 leading-relaxed">
                                {profile.summary.clone()}
                            </p>
                        </Card>
                        <Card title="📖 Education">
                            <div class="text-sm sm:text-base">
                                <p class="font-semibold">{education.degree.clone()}</p>
                                <p class="text-gray-300">{education.field.clone()}</p>
                                <p class="text-gray-400">{education.institution.clone()}</p>
                                <p class="text-blue-400">
                                    {format!("Specialization: {}", education.specialization)}
                                </p>
                            </div>
                        </Card>
                    </div>
                    <div class="space-y-4 sm:space-y-6 reveal">
                        <Card title="Key Strengths">
                            <ul class="text-sm sm:text-base text-gray-300 space-y-2">
                                {profile
                                    .strengths
                                    .iter()
                                    .map(|s| view! { <li>{format!("• {s}")}</li> })
                                    .collect_view()}
                            </ul>
                        </Card>
                        <Card title="What I enjoy">
                            <p class="text-sm sm:text-base text-gray-300">{profile.interests.clone()}</p>
                        </Card>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-xl p-4 sm:p-6 shadow">
            <h3 class="text-lg sm:text-xl font-semibold mb-3 flex items-center gap-3">{title}</h3>
            {children()}
        </div>
    }
}
