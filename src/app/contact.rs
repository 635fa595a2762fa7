use leptos::{html, prelude::*};

use crate::{content::Contact, tracker::SectionId};

const INPUT_CLASS: &str = "w-full p-3 rounded-lg bg-gray-800 text-white focus:ring-2 focus:ring-blue-400 focus:outline-none text-sm sm:text-base";
const LABEL_CLASS: &str = "block text-gray-300 font-semibold mb-2 text-sm sm:text-base";

#[component]
pub fn ContactSection(section_ref: NodeRef<html::Section>, contact: &'static Contact) -> impl IntoView {
    view! {
        <section id=SectionId::Contact.as_str() node_ref=section_ref class="py-12 sm:py-20 bg-gray-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-8 sm:mb-12 text-blue-300 reveal">
                    "Let's Connect"
                </h2>
                <div class="grid md:grid-cols-2 gap-8 sm:gap-12 items-start">
                    <ContactDetails contact />
                    <ContactForm endpoint=contact.form_endpoint.clone() />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails(contact: &'static Contact) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 sm:p-8 shadow order-2 md:order-1 reveal">
            <p class="text-sm sm:text-base text-gray-300 mb-4 sm:mb-6">
                "I'm actively seeking opportunities in data engineering roles where I can apply my cloud-native skills and continue growing in the field of big data and analytics."
            </p>
            <div class="space-y-3 sm:space-y-4">
                <DetailRow icon="📧">
                    <span class="select-all text-sm sm:text-base break-all">{contact.email.clone()}</span>
                </DetailRow>
                <DetailRow icon="📞">
                    <span class="select-all text-sm sm:text-base">{contact.phone.clone()}</span>
                </DetailRow>
                <DetailRow icon="📍">
                    <span class="text-sm sm:text-base">{contact.location.clone()}</span>
                </DetailRow>
                <DetailRow>
                    <i class="devicon-github-plain text-gray-300" />
                    <a
                        href=contact.github.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-400 text-sm sm:text-base break-all"
                    >
                        "GitHub Profile"
                    </a>
                </DetailRow>
                <DetailRow>
                    <i class="devicon-linkedin-plain text-blue-500" />
                    <a
                        href=contact.linkedin.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-blue-400 text-sm sm:text-base break-all"
                    >
                        "LinkedIn Profile"
                    </a>
                </DetailRow>
            </div>
        </div>
    }
}

#[component]
fn DetailRow(#[prop(optional)] icon: Option<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 sm:gap-4 p-3 sm:p-4 bg-gray-700 rounded-lg">
            {icon.map(|icon| view! { <span aria-hidden="true">{icon}</span> })}
            {children()}
        </div>
    }
}

/// Plain HTML POST straight to the relay; the site never sees the submission.
#[component]
fn ContactForm(endpoint: String) -> impl IntoView {
    view! {
        <form
            action=endpoint
            method="POST"
            class="bg-gray-700 rounded-xl p-4 sm:p-8 shadow-lg space-y-4 sm:space-y-6 order-1 md:order-2 reveal"
        >
            <div>
                <label for="name" class=LABEL_CLASS>
                    "Name"
                </label>
                <input
                    type="text"
                    name="name"
                    id="name"
                    required=true
                    class=INPUT_CLASS
                    placeholder="Your Name"
                />
            </div>
            <div>
                <label for="email" class=LABEL_CLASS>
                    "Email"
                </label>
                <input
                    type="email"
                    name="email"
                    id="email"
                    required=true
                    class=INPUT_CLASS
                    placeholder="you@example.com"
                />
            </div>
            <div>
                <label for="message" class=LABEL_CLASS>
                    "Message"
                </label>
                <textarea
                    name="message"
                    id="message"
                    rows="5"
                    required=true
                    class=INPUT_CLASS
                    placeholder="Write your message here..."
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-blue-600 text-white py-3 rounded-lg font-semibold hover:bg-blue-700 active:scale-95 transition-all text-sm sm:text-base"
            >
                "Send Message"
            </button>
        </form>
    }
}
