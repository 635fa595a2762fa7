use leptos::{html, prelude::*};

use crate::{content::Project, tracker::SectionId};

#[component]
pub fn ProjectsSection(
    section_ref: NodeRef<html::Section>,
    projects: &'static [Project],
) -> impl IntoView {
    view! {
        <section id=SectionId::Projects.as_str() node_ref=section_ref class="py-12 sm:py-20 bg-gray-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8 sm:mb-12 text-blue-300 reveal">
                    "Recent Projects"
                </h2>
                <div class="space-y-6 sm:space-y-8">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="bg-gray-700 rounded-2xl p-4 sm:p-6 shadow-lg hover:shadow-2xl transition transform hover:-translate-y-1 reveal">
            <div class="grid lg:grid-cols-3 gap-4 sm:gap-6">
                <div class="lg:col-span-1 space-y-3 sm:space-y-4">
                    <div class="flex items-center gap-2">
                        <span aria-hidden="true">"📅"</span>
                        <span class="text-sm sm:text-base text-blue-400 font-semibold">
                            {project.duration.clone()}
                        </span>
                    </div>
                    <div class="flex items-center gap-2">
                        <span aria-hidden="true">"👥"</span>
                        <span class="text-sm sm:text-base text-gray-300">{project.client.clone()}</span>
                    </div>
                    <div>
                        <h4 class="font-semibold text-white mb-2 text-sm sm:text-base">"Technologies:"</h4>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .tech
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="bg-blue-600 text-white px-2 sm:px-3 py-1 rounded text-xs sm:text-sm">
                                            {t.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="lg:col-span-2">
                    <h3 class="text-xl sm:text-2xl font-bold mb-3 text-blue-300">{project.title.clone()}</h3>
                    <p class="text-sm sm:text-base text-gray-300 mb-4 leading-relaxed">
                        {project.description.clone()}
                    </p>
                    <div class="mb-4">
                        <h4 class="text-sm sm:text-base text-white font-semibold mb-2">"Business Objective:"</h4>
                        <p class="text-sm sm:text-base text-gray-300 bg-gray-600 p-3 rounded italic">
                            {project.business_objective.clone()}
                        </p>
                    </div>
                    <div class="space-y-2 sm:space-y-3 mb-4">
                        <h4 class="text-sm sm:text-base text-white font-semibold">"Key Achievements:"</h4>
                        {project
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <div class="flex items-start gap-2 sm:gap-3 p-2 sm:p-3 bg-gray-600 rounded">
                                        <div class="w-2 h-2 bg-blue-400 rounded-full mt-1.5 sm:mt-2 flex-shrink-0" />
                                        <span class="text-xs sm:text-sm text-gray-300">{h.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-col sm:flex-row items-start sm:items-center gap-3 sm:gap-4">
                        <a
                            href=project.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="w-full sm:w-auto bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 text-center text-sm sm:text-base"
                        >
                            "View Project on GitHub"
                        </a>
                        <a
                            href=project.link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue-300 underline text-sm sm:text-base"
                        >
                            "Open Repo"
                        </a>
                    </div>
                </div>
            </div>
        </article>
    }
}
