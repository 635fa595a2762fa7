use leptos::prelude::*;

use crate::{
    content::Portfolio,
    tracker::SectionId,
    ui_state::{MenuState, Theme},
};

use super::{mobile_menu::MobileMenu, scroll_spy::ScrollSpy};

#[component]
pub fn NavBar(
    spy: ScrollSpy,
    theme: RwSignal<Theme>,
    menu: RwSignal<MenuState>,
    portfolio: &'static Portfolio,
) -> impl IntoView {
    let nav_class = move || {
        let background = if spy.scrolled.get() {
            theme.get().scrolled_nav_class()
        } else {
            "bg-transparent"
        };
        format!("fixed top-0 left-0 right-0 z-50 backdrop-blur-sm transition-all duration-300 nav-enter {background}")
    };

    view! {
        <nav class=nav_class aria-label="Main navigation">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <Brand name=portfolio.profile.name.clone() />
                    <div class="hidden md:flex items-center gap-6">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| view! { <NavButton spy section /> })
                            .collect_view()}
                        <ThemeToggle theme />
                    </div>
                    <div class="md:hidden">
                        <MobileMenu spy theme menu portfolio />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Brand(name: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <div class="w-10 h-10 bg-blue-600 rounded-full flex items-center justify-center shadow">
                <i class="devicon-azuresqldatabase-plain text-white" />
            </div>
            <span class="font-bold text-lg">{name}</span>
        </div>
    }
}

#[component]
fn NavButton(spy: ScrollSpy, section: SectionId) -> impl IntoView {
    view! {
        <button
            on:click=move |_| spy.navigate(section)
            class=move || {
                if spy.is_active(section) {
                    "capitalize px-2 py-1 rounded focus:outline-none focus:ring-2 focus:ring-blue-400 transition-colors text-blue-400 font-semibold"
                } else {
                    "capitalize px-2 py-1 rounded focus:outline-none focus:ring-2 focus:ring-blue-400 transition-colors text-gray-300 hover:text-blue-400"
                }
            }
        >
            {section.as_str()}
        </button>
    }
}

#[component]
fn ThemeToggle(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| theme.update(|t| *t = t.toggled())
            class="p-2 rounded-full bg-gray-800 hover:bg-gray-700 text-white focus:outline-none focus:ring-2 focus:ring-blue-400"
            aria-label="Toggle theme"
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
