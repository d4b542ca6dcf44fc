use leptos::prelude::*;

use crate::starfield::{generate_starfield, StarPoint};

#[component]
pub fn StarField() -> impl IntoView {
    let (stars, set_stars) = signal(Vec::<StarPoint>::new());

    // runs once in the browser when the view is created, never on the server
    Effect::watch(
        || (),
        move |_, _, _| {
            set_stars(generate_starfield());
        },
        true,
    );

    view! {
        <div class="fixed inset-0 z-0" aria-hidden="true">
            {move || {
                stars
                    .get()
                    .into_iter()
                    .map(|star| {
                        view! {
                            <div
                                class="absolute rounded-full bg-white animate-twinkle"
                                style=star.style()
                            ></div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn Nebula() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0" aria-hidden="true">
            <div class="absolute top-1/4 left-1/4 w-96 h-96 rounded-full bg-blue-500/20 blur-[100px] animate-float"></div>
            <div class="absolute top-1/3 right-1/4 w-96 h-96 rounded-full bg-green-500/20 blur-[100px] animate-float-delay"></div>
            <div class="absolute bottom-1/4 left-1/3 w-96 h-96 rounded-full bg-purple-500/20 blur-[100px] animate-float"></div>
        </div>
    }
}
