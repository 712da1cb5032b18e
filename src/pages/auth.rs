//! Auth Page
//!
//! Sign-in with a magic-link email or an uploaded `.sumvault` access key,
//! plus the one-time summoner setup card. A `token` query parameter starts
//! magic-link verification automatically at page load.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::access_key::{self, AccessKeyError};
use crate::api;
use crate::api::ApiError;
use crate::components::loading::LoadingPanel;
use crate::config::CONFIG;
use crate::state::session;

/// Display state for the auth card. Each flow moves form → loading →
/// success or back to the form with the error panel shown; errors are
/// terminal for that one attempt and the user resubmits.
#[derive(Clone, PartialEq)]
enum AuthPhase {
    Form,
    Loading(&'static str),
    EmailSent(String),
    Setup,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Email,
    AccessKey,
}

/// Auth page component
#[component]
pub fn Auth() -> impl IntoView {
    let navigate = use_navigate();

    let (phase, set_phase) = create_signal(AuthPhase::Form);
    let (error, set_error) = create_signal(None::<String>);
    let (tab, set_tab) = create_signal(AuthTab::Email);

    // Magic-link verification, triggered once at load by ?token=
    let query = use_query_map();
    if let Some(token) = query.with_untracked(|q| q.get("token").cloned()) {
        let navigate = navigate.clone();
        set_phase.set(AuthPhase::Loading("Verifying your magic link..."));

        spawn_local(async move {
            match api::verify_magic_link(&token).await {
                Ok(result) => {
                    session::store_credentials(&result.token, &result.user_id);
                    if result.summoner_linked {
                        navigate("/dashboard", Default::default());
                    } else {
                        set_phase.set(AuthPhase::Setup);
                    }
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_phase.set(AuthPhase::Form);
                }
            }
        });
    }

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md space-y-6">
                // Brand header
                <header class="text-center">
                    <div class="text-5xl mb-2">"⚔️"</div>
                    <h1 class="text-3xl font-bold">{CONFIG.name}</h1>
                    <p class="text-gray-400 mt-1">"Your year on the Rift, chronicled"</p>
                </header>

                // Error panel
                {move || {
                    error.get().map(|msg| view! {
                        <div class="bg-red-900/40 border border-red-700 text-red-300 rounded-lg px-4 py-3 text-sm">
                            {msg}
                        </div>
                    })
                }}

                {move || match phase.get() {
                    AuthPhase::Loading(caption) => view! {
                        <div class="bg-gray-800 rounded-xl p-6">
                            <LoadingPanel caption=caption />
                        </div>
                    }.into_view(),

                    AuthPhase::EmailSent(email) => view! {
                        <div class="bg-gray-800 rounded-xl p-6 text-center space-y-4">
                            <div class="text-4xl">"📬"</div>
                            <h2 class="text-xl font-semibold">"Check your email"</h2>
                            <p class="text-gray-400">
                                "We sent a magic link to "
                                <span class="text-white font-medium">{email}</span>
                            </p>
                            <button
                                on:click=move |_| set_phase.set(AuthPhase::Form)
                                class="text-primary-400 hover:text-primary-300 text-sm"
                            >
                                "Use a different email"
                            </button>
                        </div>
                    }.into_view(),

                    AuthPhase::Setup => view! {
                        <SetupCard set_error=set_error />
                    }.into_view(),

                    AuthPhase::Form => view! {
                        <div class="bg-gray-800 rounded-xl p-6 space-y-6">
                            // Tabs
                            <div class="flex rounded-lg bg-gray-700 p-1">
                                <button
                                    type="button"
                                    on:click=move |_| set_tab.set(AuthTab::Email)
                                    class=move || tab_class(tab.get() == AuthTab::Email)
                                >
                                    "Magic Link"
                                </button>
                                <button
                                    type="button"
                                    on:click=move |_| set_tab.set(AuthTab::AccessKey)
                                    class=move || tab_class(tab.get() == AuthTab::AccessKey)
                                >
                                    "Access Key"
                                </button>
                            </div>

                            {move || match tab.get() {
                                AuthTab::Email => view! {
                                    <EmailForm set_phase=set_phase set_error=set_error />
                                }.into_view(),
                                AuthTab::AccessKey => view! {
                                    <AccessKeyForm set_phase=set_phase set_error=set_error />
                                }.into_view(),
                            }}
                        </div>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

fn tab_class(active: bool) -> String {
    let base = "flex-1 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
    if active {
        format!("{} bg-primary-600 text-white", base)
    } else {
        format!("{} text-gray-400 hover:text-white", base)
    }
}

/// Magic-link email form
#[component]
fn EmailForm(
    set_phase: WriteSignal<AuthPhase>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let address = email.get();
        if address.is_empty() {
            return;
        }

        set_error.set(None);
        set_phase.set(AuthPhase::Loading("Sending your magic link..."));

        spawn_local(async move {
            match api::send_magic_link(&address).await {
                Ok(()) => set_phase.set(AuthPhase::EmailSent(address)),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_phase.set(AuthPhase::Form);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email address"</label>
                <input
                    type="email"
                    required
                    placeholder="summoner@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                       rounded-lg font-medium transition-colors"
            >
                "Send Magic Link"
            </button>
        </form>
    }
}

/// Access-key file form with picker and drag-and-drop
#[component]
fn AccessKeyForm(
    set_phase: WriteSignal<AuthPhase>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let (file, set_file) = create_signal(None::<web_sys::File>);

    // Extension check happens at selection time, before any read
    let select_file = move |f: web_sys::File| {
        if access_key::is_access_key_file(&f.name()) {
            set_error.set(None);
            set_file.set(Some(f));
        } else {
            set_error.set(Some(AccessKeyError::BadExtension.to_string()));
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(files) = input.files() {
            if let Some(f) = files.get(0) {
                select_file(f);
            }
        }
    };

    let on_dragover = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            if let Some(files) = transfer.files() {
                if let Some(f) = files.get(0) {
                    select_file(f);
                }
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(f) = file.get() else {
            set_error.set(Some("Please select an access key file".to_string()));
            return;
        };

        set_error.set(None);
        set_phase.set(AuthPhase::Loading("Unsealing your vault..."));

        let navigate = navigate.clone();
        let reader = web_sys::FileReader::new().unwrap();

        let onload = {
            let reader = reader.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let contents = reader
                    .result()
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();

                // Validate the key locally before any network call
                match access_key::parse_access_key(&contents) {
                    Ok(key) => {
                        let navigate = navigate.clone();
                        spawn_local(async move {
                            match api::verify_access_key(&key).await {
                                Ok(result) => {
                                    session::store_credentials(&result.token, &result.user_id);
                                    navigate("/dashboard", Default::default());
                                }
                                Err(e) => {
                                    set_error.set(Some(e.to_string()));
                                    set_phase.set(AuthPhase::Form);
                                }
                            }
                        });
                    }
                    Err(e) => {
                        set_error.set(Some(e.to_string()));
                        set_phase.set(AuthPhase::Form);
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
            set_error.set(Some("Failed to read file".to_string()));
            set_phase.set(AuthPhase::Form);
        }) as Box<dyn FnMut(_)>);

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onload.forget();
        onerror.forget();

        let _ = reader.read_as_text(&f);
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <label
                on:dragover=on_dragover
                on:drop=on_drop
                class="flex flex-col items-center justify-center px-4 py-8 bg-gray-700
                       hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                       border-2 border-dashed border-gray-500 hover:border-primary-500"
            >
                <input
                    type="file"
                    accept=".sumvault"
                    class="hidden"
                    on:change=on_change
                />
                <span class="text-2xl mb-2">"🗝️"</span>
                <span class="text-sm text-gray-300">
                    "Choose your .sumvault file or drop it here"
                </span>
            </label>

            // Echo the selected file name
            {move || {
                file.get().map(|f| view! {
                    <div class="text-sm text-gray-400">
                        {format!("Selected: {}", f.name())}
                    </div>
                })
            }}

            <button
                type="submit"
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700
                       rounded-lg font-medium transition-colors"
            >
                "Unlock Chronicle"
            </button>
        </form>
    }
}

/// One-time summoner setup card, shown after a first magic-link sign-in
#[component]
fn SetupCard(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();

    let (summoner_name, set_summoner_name) = create_signal(String::new());
    let (region, set_region) = create_signal("na1".to_string());
    let (submitting, set_submitting) = create_signal(false);

    let regions = [
        ("na1", "North America"),
        ("euw1", "EU West"),
        ("eun1", "EU Nordic & East"),
        ("kr", "Korea"),
        ("br1", "Brazil"),
        ("jp1", "Japan"),
        ("oc1", "Oceania"),
        ("tr1", "Turkey"),
        ("ru", "Russia"),
    ];

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = summoner_name.get();
        let reg = region.get();
        if name.is_empty() {
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = async {
                let linked = api::link_summoner(&name, &reg).await?;
                session::store_summoner(&linked.puuid, &name, &reg);
                api::generate_report().await?;
                Ok::<(), ApiError>(())
            }
            .await;

            match result {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-6">
            <div class="text-center">
                <h2 class="text-xl font-semibold">"Link your summoner"</h2>
                <p class="text-gray-400 text-sm mt-1">
                    "Tell us who you are on the Rift to build your first report"
                </p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Summoner name"</label>
                    <input
                        type="text"
                        required
                        disabled=move || submitting.get()
                        prop:value=move || summoner_name.get()
                        on:input=move |ev| set_summoner_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Region"</label>
                    <select
                        disabled=move || submitting.get()
                        on:change=move |ev| set_region.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {regions.into_iter().map(|(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Forging your chronicle..." } else { "Link Account" }}
                </button>
            </form>
        </div>
    }
}
