//! Account settings: details, avatar, password, mobile verification.

use leptos::prelude::*;

use crate::components::image_picker::ImagePicker;
use crate::net;
use crate::net::types::ImageUpload;
use crate::state::auth::use_session;

/// `/edit-profile` (protected). Each section submits independently;
/// changes that alter the account write the updated user back into the
/// session store so the rest of the app picks them up immediately.
#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = use_session();
    let current = auth.get_untracked().user.unwrap_or_else(|| {
        // Guarded route; an anonymous visitor never reaches this page.
        crate::net::types::User {
            id: String::new(),
            username: String::new(),
            full_name: String::new(),
            email: None,
            avatar: None,
            mobile_number: None,
            is_mobile_verified: false,
        }
    });

    // Details section.
    let full_name = RwSignal::new(current.full_name.clone());
    let username = RwSignal::new(current.username.clone());
    let details_msg = RwSignal::new(Option::<Result<String, String>>::None);

    let on_details = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        details_msg.set(None);
        leptos::task::spawn_local(async move {
            match net::users::update_details(&full_name.get_untracked(), &username.get_untracked())
                .await
            {
                Ok(user) => {
                    auth.update(|state| state.login(user));
                    details_msg.set(Some(Ok("Details updated.".to_owned())));
                }
                Err(err) => details_msg.set(Some(Err(err.message()))),
            }
        });
    };

    // Avatar section.
    let avatar = RwSignal::new(Option::<ImageUpload>::None);
    let avatar_msg = RwSignal::new(Option::<Result<String, String>>::None);

    let on_avatar = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        avatar_msg.set(None);
        leptos::task::spawn_local(async move {
            let Some(image) = avatar.get_untracked() else {
                avatar_msg.set(Some(Err("pick an image first".to_owned())));
                return;
            };
            match net::users::update_avatar(&image).await {
                Ok(user) => {
                    auth.update(|state| state.login(user));
                    avatar.set(None);
                    avatar_msg.set(Some(Ok("Avatar updated.".to_owned())));
                }
                Err(err) => avatar_msg.set(Some(Err(err.message()))),
            }
        });
    };

    // Password section.
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let password_msg = RwSignal::new(Option::<Result<String, String>>::None);

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        password_msg.set(None);
        leptos::task::spawn_local(async move {
            match net::users::change_password(
                &old_password.get_untracked(),
                &new_password.get_untracked(),
            )
            .await
            {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    password_msg.set(Some(Ok("Password changed.".to_owned())));
                }
                Err(err) => password_msg.set(Some(Err(err.message()))),
            }
        });
    };

    // Mobile verification section. Verifying refetches the account so
    // the verified flag lands in the session store.
    let mobile = RwSignal::new(current.mobile_number.clone().unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let mobile_msg = RwSignal::new(Option::<Result<String, String>>::None);

    let on_send_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        mobile_msg.set(None);
        leptos::task::spawn_local(async move {
            match net::users::send_mobile_otp(&mobile.get_untracked()).await {
                Ok(()) => {
                    otp_sent.set(true);
                    mobile_msg.set(Some(Ok("Code sent.".to_owned())));
                }
                Err(err) => mobile_msg.set(Some(Err(err.message()))),
            }
        });
    };

    let on_verify_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        mobile_msg.set(None);
        leptos::task::spawn_local(async move {
            match net::users::verify_mobile_otp(&otp.get_untracked()).await {
                Ok(()) => match net::auth::current_user().await {
                    Ok(user) => {
                        auth.update(|state| state.login(user));
                        otp_sent.set(false);
                        otp.set(String::new());
                        mobile_msg.set(Some(Ok("Mobile number verified.".to_owned())));
                    }
                    Err(err) => mobile_msg.set(Some(Err(err.message()))),
                },
                Err(err) => mobile_msg.set(Some(Err(err.message()))),
            }
        });
    };

    let verified = current.is_mobile_verified;

    view! {
        <div class="settings">
            <h1>"Edit Profile"</h1>

            <section class="settings__section">
                <h2>"Details"</h2>
                <form on:submit=on_details>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Username"
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <SectionMessage msg=details_msg/>
                    <button type="submit">"Save details"</button>
                </form>
            </section>

            <section class="settings__section">
                <h2>"Avatar"</h2>
                <form on:submit=on_avatar>
                    <ImagePicker image=avatar/>
                    <SectionMessage msg=avatar_msg/>
                    <button type="submit">"Upload avatar"</button>
                </form>
            </section>

            <section class="settings__section">
                <h2>"Password"</h2>
                <form on:submit=on_password>
                    <label>
                        "Current password"
                        <input
                            type="password"
                            prop:value=move || old_password.get()
                            on:input=move |ev| old_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "New password"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <SectionMessage msg=password_msg/>
                    <button type="submit">"Change password"</button>
                </form>
            </section>

            <section class="settings__section">
                <h2>"Mobile number"</h2>
                {if verified {
                    view! { <p>"Your mobile number is verified."</p> }.into_any()
                } else {
                    view! {
                        <form on:submit=on_send_otp>
                            <label>
                                "Mobile number"
                                <input
                                    type="tel"
                                    prop:value=move || mobile.get()
                                    on:input=move |ev| mobile.set(event_target_value(&ev))
                                />
                            </label>
                            <button type="submit">"Send code"</button>
                        </form>
                        <Show when=move || otp_sent.get()>
                            <form on:submit=on_verify_otp>
                                <label>
                                    "Verification code"
                                    <input
                                        type="text"
                                        prop:value=move || otp.get()
                                        on:input=move |ev| otp.set(event_target_value(&ev))
                                    />
                                </label>
                                <button type="submit">"Verify"</button>
                            </form>
                        </Show>
                        <SectionMessage msg=mobile_msg/>
                    }
                        .into_any()
                }}
            </section>
        </div>
    }
}

/// Inline outcome line under a settings form.
#[component]
fn SectionMessage(msg: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        msg.get().map(|outcome| match outcome {
            Ok(text) => view! { <p class="form-ok">{text}</p> },
            Err(text) => view! { <p class="form-error">{text}</p> },
        })
    }
}
