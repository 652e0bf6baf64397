use leptos::prelude::*;

use super::{Section, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    let skills = SKILLS
        .iter()
        .map(|skill| view! { <li class="skill-card">{*skill}</li> })
        .collect_view();

    view! {
        <Section id="about" title="About Me">
            <p>
                "I started self-studying how to code when I was a freshman in high school. "
                "Building things on the computer has always been my dream. I can't wait to "
                "create more projects and meet more people!"
            </p>
            <ul class="skill-grid">{skills}</ul>
        </Section>
    }
}
