use leptos::prelude::*;

use crate::effects::MagneticButton;
use super::{Section, EMAIL_URL, GITHUB_URL};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Section id="contact" title="Get In Touch">
            <p>"Say hi and let's make something great together."</p>
            <div class="contact-actions">
                <MagneticButton href=EMAIL_URL>"Email Me"</MagneticButton>
                <MagneticButton href=GITHUB_URL>"GitHub"</MagneticButton>
            </div>
        </Section>
    }
}
