use leptos::prelude::*;

#[component]
pub fn Avatar(src: String, alt: String, #[prop(optional)] small: bool) -> impl IntoView {
    let class = if small {
        "w-24 h-24 rounded-full object-cover border-4 border-blue-600 shadow-xl"
    } else {
        "w-28 h-28 sm:w-36 sm:h-36 rounded-full mx-auto object-cover shadow-2xl border-4 border-blue-600 transition-transform duration-300 hover:scale-105 hover:rotate-1"
    };
    view! { <img src=src alt=alt class=class /> }
}
