use leptos::prelude::*;

use crate::{
    content::Portfolio,
    tracker::SectionId,
    ui_state::{MenuState, Theme},
};

use super::{
    avatar::Avatar,
    dom::{set_body_overflow, DocumentViewport},
    header::Brand,
    scroll_spy::ScrollSpy,
};

#[component]
pub fn MobileMenu(
    spy: ScrollSpy,
    theme: RwSignal<Theme>,
    menu: RwSignal<MenuState>,
    portfolio: &'static Portfolio,
) -> impl IntoView {
    Effect::new(move |_| set_body_overflow(menu.get().body_overflow()));
    #[cfg(feature = "hydrate")]
    on_cleanup(|| set_body_overflow(MenuState::default().body_overflow()));

    let go = move |section: SectionId| {
        let mut state = menu.get_untracked();
        spy.navigate_with(|t| state.navigate(t, section, &DocumentViewport));
        menu.set(state);
    };
    let close = move || menu.update(MenuState::close);

    let profile = &portfolio.profile;
    let contact = &portfolio.contact;
    let year = portfolio.copyright_year();

    view! {
        <button
            on:click=move |_| menu.update(MenuState::open)
            aria-label="Open menu"
            aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
            class="p-2.5 rounded-md bg-gray-800 text-white hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-400 active:scale-95 transition-all z-50"
        >
            <svg
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <line x1="3" y1="6" x2="21" y2="6" />
                <line x1="3" y1="12" x2="21" y2="12" />
                <line x1="3" y1="18" x2="21" y2="18" />
            </svg>
        </button>

        <Show when=move || menu.get().is_open()>
            <div class="fixed inset-0 bg-gray-900 z-[998] menu-fade" on:click=move |_| close() />
            <aside
                class="fixed inset-0 bg-gradient-to-b from-gray-900 via-gray-900/95 to-gray-800 overflow-y-auto z-[999] flex flex-col min-h-screen max-h-screen menu-fade"
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-center justify-between pt-4 pb-6 px-4">
                    <Brand name=profile.name.clone() />
                    <button
                        on:click=move |_| close()
                        aria-label="Close menu"
                        class="p-2 rounded-md bg-gray-800 hover:bg-gray-700 transition-colors active:scale-95"
                    >
                        <svg
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2.5"
                        >
                            <line x1="18" y1="6" x2="6" y2="18" />
                            <line x1="6" y1="6" x2="18" y2="18" />
                        </svg>
                    </button>
                </div>

                <div class="flex flex-col flex-grow px-4">
                    <nav class="flex flex-col gap-4 my-auto" aria-label="Mobile site navigation">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| go(section)
                                        class=move || {
                                            if spy.is_active(section) {
                                                "text-left py-4 px-6 rounded-xl transition-all font-medium text-lg bg-blue-600 text-white shadow-lg"
                                            } else {
                                                "text-left py-4 px-6 rounded-xl transition-all font-medium text-lg text-gray-300 hover:bg-gray-800 hover:text-white"
                                            }
                                        }
                                    >
                                        <span class="capitalize">{section.as_str()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex flex-col items-center text-center mt-8 px-4 pb-8">
                        <Avatar src=profile.image.clone() alt=profile.name.clone() small=true />
                        <h3 class="mt-4 text-2xl font-extrabold">{profile.name.clone()}</h3>
                        <label class="mt-2 inline-flex items-center gap-2 text-sm text-gray-300">
                            <input
                                type="checkbox"
                                prop:checked=move || theme.get().is_dark()
                                on:change=move |_| theme.update(|t| *t = t.toggled())
                                class="w-4 h-4 rounded border-gray-500 bg-gray-700 focus:ring-2 focus:ring-blue-400"
                                aria-label="Toggle dark mode"
                            />
                            <span>"Dark mode"</span>
                        </label>
                        <p class="mt-2 text-blue-300 font-medium">{profile.title.clone()}</p>
                        <p class="mt-3 text-sm text-gray-300 max-w-[86%]">{profile.tagline.clone()}</p>

                        <div class="mt-6 w-full flex flex-col sm:flex-row gap-3 justify-center px-4">
                            <button
                                on:click=move |_| go(SectionId::Projects)
                                class="w-full sm:w-auto bg-blue-600 text-white px-6 py-3 rounded-lg font-semibold flex items-center justify-center gap-2 hover:bg-blue-700 transition"
                            >
                                "💼 View My Work"
                            </button>
                            <a
                                href=profile.resume.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-full sm:w-auto border border-gray-600 px-6 py-3 rounded-lg font-semibold inline-flex items-center justify-center gap-2 hover:border-white text-gray-200"
                            >
                                "View Resume"
                            </a>
                        </div>

                        <div class="mt-6 px-2 space-y-3 w-full max-w-md">
                            <div class="flex items-center gap-4 p-4 bg-gray-800 rounded-lg">
                                <span aria-hidden="true">"📧"</span>
                                <span class="text-gray-300">{contact.email.clone()}</span>
                            </div>
                            <div class="flex items-center gap-4 p-4 bg-gray-800 rounded-lg">
                                <span aria-hidden="true">"📞"</span>
                                <span class="text-gray-300">{contact.phone.clone()}</span>
                            </div>
                        </div>

                        <div class="mt-8 border-t border-gray-700 pt-6 text-center text-sm text-gray-500">
                            <p class="font-semibold text-gray-400">{profile.name.clone()}</p>
                            <p class="mt-1">{profile.title.clone()}</p>
                            <p class="mt-3">{format!("© {year} All rights reserved")}</p>
                        </div>
                    </div>
                </div>
            </aside>
        </Show>
    }
}
