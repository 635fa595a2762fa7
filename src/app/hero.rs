use leptos::{html, prelude::*};

use crate::{content::Profile, tracker::SectionId};

use super::{avatar::Avatar, scroll_spy::ScrollSpy};

#[component]
pub fn HeroSection(
    section_ref: NodeRef<html::Section>,
    spy: ScrollSpy,
    profile: &'static Profile,
) -> impl IntoView {
    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center relative pt-20 px-4"
        >
            <div class="max-w-4xl text-center w-full fade-up">
                <Avatar src=profile.image.clone() alt=profile.name.clone() />
                <h1
                    class="mt-6 text-3xl sm:text-4xl md:text-6xl font-extrabold tracking-tight px-2 fade-up"
                    style="animation-delay: 150ms"
                >
                    {profile.name.clone()}
                </h1>
                <h2
                    class="mt-2 text-lg sm:text-xl md:text-2xl text-blue-300 px-2 fade-up"
                    style="animation-delay: 250ms"
                >
                    {profile.title.clone()}
                </h2>
                <p class="mt-4 text-sm sm:text-base text-gray-300 max-w-2xl mx-auto px-4">
                    {profile.tagline.clone()}
                </p>
                <div
                    class="mt-8 flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center items-center px-4 fade-in"
                    style="animation-delay: 350ms"
                >
                    <button
                        on:click=move |_| spy.navigate(SectionId::Projects)
                        class="w-full sm:w-auto bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold flex items-center justify-center gap-2 hover:bg-blue-700 transition-transform transform hover:-translate-y-0.5 shadow-lg"
                        aria-label="View projects"
                    >
                        "💼 View My Work"
                    </button>
                    <a
                        href=profile.resume.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="w-full sm:w-auto border border-gray-400 px-6 py-3 rounded-lg font-semibold inline-flex items-center justify-center gap-2 hover:border-white"
                    >
                        "View Resume"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 hidden sm:block float-y text-gray-400 text-3xl">
                "⌄"
            </div>
        </section>
    }
}
