//! Google Identity sign-in button.
//!
//! Wraps the Google Identity Services script (loaded by the host page).
//! The rendered button yields an ID-token credential string, which the
//! caller exchanges against `POST /auth/google-login`.

use leptos::prelude::*;

/// OAuth client id the backend accepts, baked in at build time. Without
/// it the component renders an empty container.
const CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");

/// Container that the Google Identity script renders its button into.
/// `on_credential` fires with the raw credential on a successful
/// sign-in.
#[component]
pub fn GoogleSignIn(on_credential: Callback<String>) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let rendered = StoredValue::new(false);
        Effect::new(move || {
            let Some(target) = node.get() else {
                return;
            };
            if rendered.get_value() {
                return;
            }
            let Some(client_id) = CLIENT_ID else {
                return;
            };
            match gsi::render(&target, client_id, on_credential) {
                Ok(()) => rendered.set_value(true),
                Err(err) => leptos::logging::warn!("google sign-in unavailable: {err:?}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = on_credential;

    view! { <div class="google-signin" node_ref=node></div> }
}

#[cfg(feature = "csr")]
mod gsi {
    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = initialize, catch)]
        fn initialize(config: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(js_namespace = ["google", "accounts", "id"], js_name = renderButton, catch)]
        fn render_button(parent: &web_sys::Element, options: &JsValue) -> Result<(), JsValue>;
    }

    /// Initialize the identity script and render its button into
    /// `target`. Fails when the script is not loaded.
    pub fn render(
        target: &web_sys::HtmlDivElement,
        client_id: &str,
        on_credential: Callback<String>,
    ) -> Result<(), JsValue> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let credential = js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                .ok()
                .and_then(|value| value.as_string());
            if let Some(credential) = credential {
                on_credential.run(credential);
            } else {
                leptos::logging::warn!("google sign-in response had no credential");
            }
        });

        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"client_id".into(), &client_id.into())?;
        js_sys::Reflect::set(&config, &"callback".into(), callback.as_ref())?;
        initialize(&config)?;
        // The handler must outlive this call.
        callback.forget();

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"theme".into(), &"outline".into())?;
        js_sys::Reflect::set(&options, &"size".into(), &"large".into())?;
        render_button(target, &options)
    }
}
