//! Dashboard Page
//!
//! The yearly report view: header identity, section navigation, and the
//! seven report sections, plus download/share/logout actions.

use chrono::Datelike;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::components::sections::{
    AchievementsSection, ChampionsSection, GoalsSection, GrowthSection, OverviewSection,
    PerformanceSection, TeamImpactSection,
};
use crate::components::Loading;
use crate::state::global::GlobalState;
use crate::state::session;

/// The seven report sections, navigated by pill buttons
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Overview,
    Performance,
    Champions,
    TeamImpact,
    Growth,
    Achievements,
    Goals,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Overview,
        Section::Performance,
        Section::Champions,
        Section::TeamImpact,
        Section::Growth,
        Section::Achievements,
        Section::Goals,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Performance => "Performance",
            Section::Champions => "Champions",
            Section::TeamImpact => "Team Impact",
            Section::Growth => "Growth",
            Section::Achievements => "Achievements",
            Section::Goals => "Goals",
        }
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (active, set_active) = create_signal(Section::Overview);
    let profile = state.profile;
    let loading = state.loading;

    // Require a session, then fetch profile and report on mount. A 401
    // from either tears the session down and returns to the auth page.
    let state_for_effect = state.clone();
    let navigate_for_effect = navigate.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        let navigate = navigate_for_effect.clone();

        if !session::is_authenticated() {
            navigate("/", Default::default());
            return;
        }

        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_profile().await {
                Ok(profile) => state.profile.set(Some(profile)),
                Err(e) if e.is_unauthorized() => {
                    session::clear();
                    navigate("/", Default::default());
                    return;
                }
                Err(e) => {
                    log::error!("Failed to load user data: {}", e);
                    state.show_error(&e.to_string());
                }
            }

            match api::fetch_report().await {
                Ok(report) => state.report.set(Some(report)),
                Err(e) if e.is_unauthorized() => {
                    session::clear();
                    navigate("/", Default::default());
                    return;
                }
                Err(e) => {
                    log::error!("Failed to load report data: {}", e);
                    state.show_error(&e.to_string());
                }
            }

            state.loading.set(false);
        });
    });

    // Download the PDF report
    let (downloading, set_downloading) = create_signal(false);
    let state_for_download = state.clone();
    let navigate_for_download = navigate.clone();
    let download = move |_| {
        if downloading.get() {
            return;
        }
        set_downloading.set(true);

        let state = state_for_download.clone();
        let navigate = navigate_for_download.clone();
        spawn_local(async move {
            match api::download_report_pdf().await {
                Ok(bytes) => {
                    if let Err(e) = save_pdf(&bytes) {
                        log::error!("Download error: {:?}", e);
                        state.show_error("Failed to download report. Please try again.");
                    } else {
                        state.show_success("Report downloaded");
                    }
                }
                Err(e) if e.is_unauthorized() => {
                    session::clear();
                    navigate("/", Default::default());
                    return;
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_downloading.set(false);
        });
    };

    // Native share with clipboard fallback
    let state_for_share = state.clone();
    let share = move |_| {
        let state = state_for_share.clone();
        spawn_local(async move {
            share_report(&state).await;
        });
    };

    // Logout after confirmation
    let navigate_for_logout = navigate.clone();
    let logout = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to logout?").ok())
            .unwrap_or(false);

        if confirmed {
            session::clear();
            navigate_for_logout("/", Default::default());
        }
    };

    view! {
        <div class="min-h-screen flex flex-col">
            // Header with identity and actions
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"⚔️"</span>
                        <div>
                            <h1 class="font-bold">
                                {move || {
                                    profile.get()
                                        .and_then(|p| p.summoner_name)
                                        .unwrap_or_else(|| "Loading...".to_string())
                                }}
                            </h1>
                            <div class="text-gray-400 text-sm">
                                {move || {
                                    profile.get()
                                        .and_then(|p| p.rank)
                                        .unwrap_or_else(|| "Unranked".to_string())
                                }}
                            </div>
                        </div>
                    </div>

                    <div class="flex items-center space-x-2">
                        <button
                            on:click=download
                            disabled=move || downloading.get()
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-700
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            {move || if downloading.get() { "Downloading..." } else { "Download" }}
                        </button>
                        <button
                            on:click=share
                            class="px-4 py-2 bg-gray-700 hover:bg-gray-600
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "Share"
                        </button>
                        <button
                            on:click=logout
                            class="px-4 py-2 bg-gray-700 hover:bg-red-700
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </header>

            // Section navigation pills
            <nav class="container mx-auto px-4 py-4 flex flex-wrap gap-2">
                {Section::ALL.into_iter().map(|section| view! {
                    <button
                        on:click=move |_| {
                            set_active.set(section);
                            if let Some(window) = web_sys::window() {
                                window.scroll_to_with_x_and_y(0.0, 0.0);
                            }
                        }
                        class=move || {
                            let base = "px-4 py-2 rounded-full text-sm font-medium transition-colors";
                            if active.get() == section {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-800 text-gray-400 hover:bg-gray-700", base)
                            }
                        }
                    >
                        {section.label()}
                    </button>
                }).collect_view()}
            </nav>

            // Active section content
            <main class="container mx-auto px-4 pb-12 flex-1">
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        match active.get() {
                            Section::Overview => view! { <OverviewSection /> }.into_view(),
                            Section::Performance => view! { <PerformanceSection /> }.into_view(),
                            Section::Champions => view! { <ChampionsSection /> }.into_view(),
                            Section::TeamImpact => view! { <TeamImpactSection /> }.into_view(),
                            Section::Growth => view! { <GrowthSection /> }.into_view(),
                            Section::Achievements => view! { <AchievementsSection /> }.into_view(),
                            Section::Goals => view! { <GoalsSection /> }.into_view(),
                        }
                    }
                }}
            </main>
        </div>
    }
}

/// Save fetched PDF bytes through an object URL and a synthetic click
fn save_pdf(bytes: &[u8]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute(
        "download",
        &format!("summoners-chronicle-{}.pdf", chrono::Utc::now().year()),
    )?;
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or("not an element")?
        .click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Share the report URL natively, falling back to a clipboard copy
async fn share_report(state: &GlobalState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let href = window.location().href().unwrap_or_default();
    let navigator = window.navigator();

    let has_native_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_native_share {
        let data = web_sys::ShareData::new();
        data.set_title("My Summoner's Chronicle");
        data.set_text("Check out my League of Legends performance insights!");
        data.set_url(&href);

        if let Err(e) = JsFuture::from(navigator.share_with_data(&data)).await {
            log::error!("Share error: {:?}", e);
        }
    } else {
        match JsFuture::from(navigator.clipboard().write_text(&href)).await {
            Ok(_) => state.show_success("Link copied to clipboard!"),
            Err(_) => state.show_error("Unable to share this report"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_sections_in_display_order() {
        assert_eq!(Section::ALL.len(), 7);
        assert_eq!(Section::ALL[0], Section::Overview);
        assert_eq!(Section::ALL[6], Section::Goals);
    }

    #[test]
    fn test_section_labels() {
        for section in Section::ALL {
            assert!(!section.label().is_empty());
        }
        assert_eq!(Section::TeamImpact.label(), "Team Impact");
    }
}
