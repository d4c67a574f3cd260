//! WebAssembly bindings with the JavaScript calling convention.
//!
//! ```js
//! import init, { validateOTP, isPassword } from "validauth";
//!
//! await init();
//! validateOTP("1234", "1234", { attempts: 4, maxAttempts: 3, details: true });
//! // { valid: false, errors: ["Max attempts exceeded."], ..., remainingAttempts: -1 }
//! isPassword("MyP@ssw0rd123"); // true
//! ```
//!
//! The options argument may be omitted, `undefined` or `null`. Inside it, a
//! key set to `undefined` or `null` takes its default, as JS destructuring
//! would. Unknown keys, non-object options and wrongly typed values throw.

use crate::common_passwords::common_password_count;
use crate::otp::validate_otp_with;
use crate::password::is_password_with;
use crate::types::{OtpOptions, PasswordOptions};
use js_sys::{Object, Reflect};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn options_from<T: DeserializeOwned + Default>(
    options: Option<JsValue>,
    fields: &[&str],
) -> Result<T, JsError> {
    let value = match options {
        Some(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Ok(T::default()),
    };
    let source = value
        .dyn_ref::<Object>()
        .ok_or_else(|| JsError::new("invalid options: expected an object"))?;

    // serde-wasm-bindgen only visits declared fields, so unknown keys are
    // caught here and unset keys are dropped before deserializing.
    let present = Object::new();
    let mut keys = Vec::new();
    for key in Object::keys(source).iter() {
        let field = Reflect::get(source, &key)
            .map_err(|_| JsError::new("invalid options: unreadable key"))?;
        if field.is_undefined() || field.is_null() {
            continue;
        }
        Reflect::set(&present, &key, &field)
            .map_err(|_| JsError::new("invalid options: unwritable key"))?;
        keys.push(key.as_string().unwrap_or_default());
    }
    if let Some(unknown) = first_unknown_key(&keys, fields) {
        return Err(JsError::new(&format!("invalid options: unknown key '{}'", unknown)));
    }

    from_value(present.into()).map_err(|e| JsError::new(&format!("invalid options: {}", e)))
}

fn first_unknown_key<'a>(keys: &'a [String], fields: &[&str]) -> Option<&'a str> {
    keys.iter()
        .map(String::as_str)
        .find(|key| !fields.contains(key))
}

/// `null` for absent fields instead of `undefined`, matching the JS library.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&Serializer::new().serialize_missing_as_null(true))
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Compare a one-time code against the expected one.
#[wasm_bindgen(js_name = validateOTP)]
pub fn validate_otp_js(
    otp: &str,
    correct_otp: &str,
    options: Option<JsValue>,
) -> Result<JsValue, JsError> {
    let options: OtpOptions = options_from(options, &OtpOptions::FIELDS)?;
    to_js(&validate_otp_with(otp, correct_otp, &options))
}

/// Check a password against the composition rules and denylist.
#[wasm_bindgen(js_name = isPassword)]
pub fn is_password_js(password: &str, options: Option<JsValue>) -> Result<JsValue, JsError> {
    let options: PasswordOptions = options_from(options, &PasswordOptions::FIELDS)?;
    to_js(&is_password_with(password, &options))
}

/// Number of entries in the bundled common-password list.
#[wasm_bindgen(js_name = commonPasswordCount)]
pub fn common_password_count_js() -> usize {
    common_password_count()
}
