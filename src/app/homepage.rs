use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::ui_state::THEME_STORAGE_KEY;
use crate::{
    content::{portfolio, ContentError, Portfolio},
    tracker::SectionId,
    ui_state::{MenuState, Theme},
};

use super::{
    about::AboutSection,
    certifications::CertificationsSection,
    contact::ContactSection,
    dom::{apply_theme, location_hash, DocumentViewport},
    footer::Footer,
    header::NavBar,
    hero::HeroSection,
    projects::ProjectsSection,
    scroll_spy::{ScrollSpy, SectionRefs},
    skills::SkillsSection,
};

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(err) => {
            log::error!("portfolio content unavailable: {err}");
            Either::Right(view! { <ContentUnavailable err /> })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    let spy = ScrollSpy::new();
    let sections = SectionRefs::new();
    spy.observe(sections);

    let theme = RwSignal::new(Theme::default());
    let menu = RwSignal::new(MenuState::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored_theme.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored_theme.set(*t),
            false,
        );
    }
    Effect::new(move |_| apply_theme(theme.get()));

    // deep links like `/#projects` land on their section once hydrated
    Effect::new(move |_| {
        if let Some(id) = location_hash() {
            spy.navigate_with(|t| t.navigate_to_id(&id, &DocumentViewport));
        }
    });

    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!("min-h-screen transition-colors duration-500 {}", theme.get().page_class())
        }>
            <NavBar spy theme menu portfolio />
            <main>
                <HeroSection
                    section_ref=sections.get(SectionId::Home)
                    spy
                    profile=&portfolio.profile
                />
                <AboutSection section_ref=sections.get(SectionId::About) profile=&portfolio.profile />
                <SkillsSection section_ref=sections.get(SectionId::Skills) portfolio />
                <ProjectsSection
                    section_ref=sections.get(SectionId::Projects)
                    projects=&portfolio.projects
                />
                <CertificationsSection
                    section_ref=sections.get(SectionId::Certifications)
                    certifications=&portfolio.certifications
                />
                <ContactSection
                    section_ref=sections.get(SectionId::Contact)
                    contact=&portfolio.contact
                />
            </main>
            <Footer portfolio />
        </div>
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-white px-4">
            <div class="max-w-xl bg-gray-800 p-6 rounded-xl border-l-4 border-red-500">
                <h1 class="text-xl font-bold mb-2">"This page couldn't be rendered"</h1>
                <pre class="whitespace-pre-wrap text-sm text-gray-300">{err.to_string()}</pre>
            </div>
        </div>
    }
}
