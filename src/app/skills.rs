use leptos::{html, prelude::*};

use crate::{
    content::{Portfolio, Skill, SkillCategory, MAX_SKILL_DOTS},
    tracker::SectionId,
};

#[component]
pub fn SkillsSection(section_ref: NodeRef<html::Section>, portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() node_ref=section_ref class="py-12 sm:py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8 sm:mb-12 text-blue-300 reveal">
                    "Skills & Technologies"
                </h2>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 mb-8 sm:mb-12">
                    {portfolio
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| view! { <SkillCard skill delay_ms={i * 50} /> })
                        .collect_view()}
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {portfolio
                        .skill_categories
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, delay_ms: usize) -> impl IntoView {
    let dots = (0..MAX_SKILL_DOTS)
        .map(|i| {
            let class = if i < skill.dots {
                format!("w-2.5 h-2.5 sm:w-3 sm:h-3 rounded-full {}", skill.color_class)
            } else {
                "w-2.5 h-2.5 sm:w-3 sm:h-3 rounded-full bg-gray-600 opacity-25".to_string()
            };
            view! { <div class=class /> }
        })
        .collect_view();

    view! {
        <div
            class="bg-gray-800 rounded-2xl p-4 sm:p-6 shadow hover:shadow-2xl transition transform hover:-translate-y-1 reveal"
            style=format!("animation-delay: {delay_ms}ms")
            tabindex="0"
            role="article"
            aria-label=format!("{} skill card", skill.name)
        >
            <div class="flex items-start justify-between mb-4 gap-2">
                <div class="flex-1 min-w-0">
                    <h3 class="font-bold text-base sm:text-lg mb-1 truncate">{skill.name.clone()}</h3>
                    <p class="text-xs sm:text-sm text-gray-400">{skill.description.clone()}</p>
                </div>
                <span class=format!(
                    "flex-shrink-0 px-2 sm:px-3 py-1 rounded-full text-xs font-semibold {}",
                    skill.proficiency.badge_class(),
                )>{skill.proficiency.to_string()}</span>
            </div>
            <div class="flex gap-1.5 sm:gap-2 mb-3" aria-hidden="true">
                {dots}
            </div>
            <div class="text-xs text-gray-400 mb-1">{format!("Proficiency: {}%", skill.percent)}</div>
            <div class="w-full bg-gray-700 rounded-full h-2.5 sm:h-3 overflow-hidden">
                <div
                    class=format!("{} h-full rounded-full grow-x", skill.color_class)
                    style=format!("width: {}%", skill.percent)
                />
            </div>
        </div>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 sm:p-6 text-center shadow reveal">
            <div class=format!("text-4xl mx-auto mb-3 sm:mb-4 {}", category.icon_class)>"◆"</div>
            <h3 class="text-lg sm:text-xl font-bold mb-2">{category.title.clone()}</h3>
            <p class="text-sm sm:text-base text-gray-300 mb-3 sm:mb-4">{category.summary.clone()}</p>
            <div class="flex flex-wrap gap-2 justify-center">
                {category
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <span class=format!(
                                "text-white px-2 sm:px-3 py-1 rounded-full text-xs sm:text-sm {}",
                                category.tag_class,
                            )>{item.clone()}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
