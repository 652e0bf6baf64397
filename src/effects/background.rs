//! Fixed decorative backdrop: gradient blobs, grid overlay, noise film.
//! Stateless; all motion is CSS keyframes (static markup, animation via CSS).

use leptos::prelude::*;

#[component]
pub fn BackgroundFx() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="bg-fx">
            <div class="bg-blobs">
                <div class="bg-blob bg-blob-conic"></div>
                <div class="bg-blob bg-blob-radial"></div>
            </div>
            <div class="bg-grid"></div>
            <div class="bg-noise"></div>
        </div>
    }
}
