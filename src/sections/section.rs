//! Generic titled section with a one-shot entrance animation.
//!
//! Heading and body start offset and transparent; the first time the
//! section scrolls into partial view they transition to rest, with the
//! body trailing the heading by a CSS stagger delay.

use leptos::html;
use leptos::prelude::*;

use crate::effects::{use_reveal, REVEAL_THRESHOLD};

#[component]
pub fn Section(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref, REVEAL_THRESHOLD);

    view! {
        <section id=id class="section" node_ref=section_ref>
            <h2 class=move || {
                if revealed.get() { "section-title revealed" } else { "section-title" }
            }>{title}</h2>
            <div class=move || {
                if revealed.get() { "section-body revealed" } else { "section-body" }
            }>{children()}</div>
        </section>
    }
}
