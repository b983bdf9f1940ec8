//! File input that reads a picked image into memory.
//!
//! The picked file lands in an [`ImageUpload`] (plain bytes + name +
//! mime) so the payload types stay independent of the DOM; the browser
//! read itself is gated behind `csr`.

use leptos::prelude::*;

use crate::net::types::ImageUpload;

/// Image file input bound to an `RwSignal<Option<ImageUpload>>`.
#[component]
pub fn ImagePicker(image: RwSignal<Option<ImageUpload>>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let input: web_sys::HtmlInputElement = match ev.target() {
                Some(target) => target.unchecked_into(),
                None => return,
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    if let Some(upload) = read_file(&file).await {
                        image.set(Some(upload));
                    } else {
                        leptos::logging::warn!("could not read picked file");
                    }
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &ev;
        }
    };

    view! {
        <div class="image-picker">
            <input type="file" accept="image/*" on:change=on_change/>
            {move || {
                image
                    .get()
                    .map(|img| view! { <span class="image-picker__name">{img.file_name}</span> })
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
async fn read_file(file: &web_sys::File) -> Option<ImageUpload> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}
