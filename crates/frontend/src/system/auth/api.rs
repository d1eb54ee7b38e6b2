//! Binding to the external identity provider's browser SDK.
//!
//! The host page wires `identitySignIn` / `identitySignOut` to the provider;
//! the application never inspects credentials, only the resolved account.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Resolves with the signed-in account name.
    #[wasm_bindgen(js_name = identitySignIn, catch)]
    async fn identity_sign_in() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = identitySignOut, catch)]
    async fn identity_sign_out() -> Result<(), JsValue>;
}

pub async fn sign_in() -> Result<String, String> {
    let value = identity_sign_in()
        .await
        .map_err(|e| format!("Sign-in failed: {e:?}"))?;
    value
        .as_string()
        .ok_or_else(|| "Identity provider returned no account".to_string())
}

pub async fn sign_out() -> Result<(), String> {
    identity_sign_out()
        .await
        .map_err(|e| format!("Sign-out failed: {e:?}"))
}
