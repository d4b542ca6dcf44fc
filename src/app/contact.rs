use leptos::{html, prelude::*, task::spawn_local};

use crate::contact::{
    BannerTicket, Completion, ContactController, FormPayload, FAILURE_NOTICE, SUCCESS_MESSAGE,
};
use crate::delivery::{self, MessageDelivery};
use crate::portfolio::{CONTACT_EMAIL, PROFILE_LINKS};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-black/50 border border-white/10 text-white focus:outline-none focus:border-blue-500 transition-colors";

#[component]
pub fn ContactSection() -> impl IntoView {
    let controller = RwSignal::new(ContactController::new());
    let banner_timer = StoredValue::new(None::<TimeoutHandle>);
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let clear_banner_timer = move || {
        if let Some(Some(handle)) = banner_timer.try_get_value() {
            handle.clear();
            banner_timer.try_set_value(None);
        }
    };

    // a pending hide must not fire into a torn down view
    on_cleanup(clear_banner_timer);

    let arm_banner_timer = move |ticket: BannerTicket| {
        clear_banner_timer();
        let hide = move || {
            controller.try_update(|c| c.banner_elapsed(ticket));
            banner_timer.try_set_value(None);
        };
        match set_timeout_with_handle(hide, ticket.delay()) {
            Ok(handle) => {
                if banner_timer.try_set_value(Some(handle)).is_some() {
                    handle.clear();
                }
            }
            Err(e) => log::error!("Couldn't arm success banner timer: {e:?}"),
        }
    };

    let read_payload = move || {
        FormPayload::new(
            name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
            message_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        )
    };

    let on_complete = move |completion: Completion| match completion {
        Completion::Delivered(ticket) => {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            arm_banner_timer(ticket);
        }
        Completion::Failed(_) => {
            if let Err(e) = window().alert_with_message(FAILURE_NOTICE) {
                log::error!("Couldn't show failure notice: {e:?}");
            }
        }
    };

    view! {
        <section id="contact" class="min-h-screen py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-4xl font-bold text-center bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent mb-12">
                        "Let's Connect"
                    </h2>
                    {move || {
                        controller
                            .with(|c| c.banner_visible())
                            .then(|| {
                                view! {
                                    <div
                                        role="status"
                                        class="mb-8 p-4 rounded-lg bg-green-500/20 border border-green-400/30 text-green-300 text-center"
                                    >
                                        {SUCCESS_MESSAGE}
                                    </div>
                                }
                            })
                    }}
                    <div class="grid md:grid-cols-2 gap-8">
                        <div class="bg-black/30 p-8 rounded-2xl backdrop-blur-xl border border-white/10 shadow-xl shadow-blue-500/10">
                            <h3 class="text-2xl font-semibold text-blue-400 mb-6">"Get in Touch"</h3>
                            <form
                                node_ref=form_ref
                                class="space-y-6"
                                on:submit=move |ev| {
                                    ev.prevent_default();
                                    match controller.try_update(|c| c.begin_submit()) {
                                        Some(Ok(())) => {}
                                        Some(Err(e)) => {
                                            log::warn!("Ignoring submit: {e}");
                                            return;
                                        }
                                        None => return,
                                    }
                                    // resubmitting hides a banner that is still showing
                                    clear_banner_timer();
                                    let payload = read_payload();
                                    spawn_local(async move {
                                        let outcome = match delivery::client() {
                                            Ok(client) => client.deliver(payload).await,
                                            Err(e) => Err(e),
                                        };
                                        match controller.try_update(|c| c.complete(outcome)) {
                                            Some(Ok(completion)) => on_complete(completion),
                                            Some(Err(e)) => log::warn!("Dropping delivery result: {e}"),
                                            None => {}
                                        }
                                    });
                                }
                            >
                                <div>
                                    <label for="name" class="block text-sm text-gray-300 mb-2">
                                        "Name"
                                    </label>
                                    <input
                                        node_ref=name_ref
                                        type="text"
                                        id="name"
                                        name="user_name"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="Your Name"
                                    />
                                </div>
                                <div>
                                    <label for="email" class="block text-sm text-gray-300 mb-2">
                                        "Email"
                                    </label>
                                    <input
                                        node_ref=email_ref
                                        type="email"
                                        id="email"
                                        name="user_email"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="your.email@example.com"
                                    />
                                </div>
                                <div>
                                    <label for="message" class="block text-sm text-gray-300 mb-2">
                                        "Message"
                                    </label>
                                    <textarea
                                        node_ref=message_ref
                                        id="message"
                                        name="message"
                                        required
                                        rows=4
                                        class=INPUT_CLASS
                                        placeholder="Your message..."
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || !controller.with(|c| c.submit_enabled())
                                    class=move || {
                                        let base = "w-full px-6 py-3 bg-gradient-to-r from-blue-500 to-green-500 text-white font-semibold rounded-lg hover:from-blue-600 hover:to-green-600 transition-all duration-300";
                                        if controller.with(|c| c.submit_enabled()) {
                                            base.to_string()
                                        } else {
                                            format!("{base} opacity-70 cursor-not-allowed")
                                        }
                                    }
                                >
                                    {move || {
                                        if controller.with(|c| c.submit_enabled()) {
                                            "Send Message"
                                        } else {
                                            "Sending..."
                                        }
                                    }}
                                </button>
                            </form>
                        </div>
                        <ProfileLinks />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileLinks() -> impl IntoView {
    view! {
        <div class="bg-black/30 p-8 rounded-2xl backdrop-blur-xl border border-white/10 shadow-xl shadow-green-500/10">
            <h3 class="text-2xl font-semibold text-green-400 mb-6">"Professional Profiles"</h3>
            <div class="space-y-4">
                {PROFILE_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex items-center space-x-4 p-4 rounded-lg bg-black/20 hover:bg-black/40 transition-colors group"
                            >
                                <div class=format!(
                                    "p-3 rounded-lg bg-white/5 transition-colors text-2xl {}",
                                    link.accent,
                                )>
                                    <i class=link.icon></i>
                                </div>
                                <div>
                                    <h4 class="font-semibold">{link.name}</h4>
                                    <p class="text-sm text-gray-400">{link.caption}</p>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-8 text-sm text-gray-400 text-center">
                "Prefer email? Contact me at " <span class="text-blue-400">{CONTACT_EMAIL}</span>
            </p>
        </div>
    }
}
