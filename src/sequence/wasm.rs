//! WASM bindings for sequence generation.
//!
//! These wrap the generator and the query boundary for use from
//! JavaScript/TypeScript in the browser.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::model::{DEFAULT_START_A, DEFAULT_START_B};
use crate::error::FibError;
use crate::response::handle_query as handle_query_inner;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

impl From<FibError> for JsValue {
    fn from(err: FibError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Generates a sequence and returns it as a JS array of numbers.
///
/// Throws the validation message when any argument is negative.
///
/// # Example (JavaScript)
/// ```js
/// fibonacci(10);        // [0, 1, 1, 2, 3, 5, 8]
/// fibonacci(5, 3, 2);   // [2, 3, 5]
/// ```
#[wasm_bindgen]
pub fn fibonacci(n: i32, startx: Option<i32>, starty: Option<i32>) -> Result<JsValue, JsValue> {
    let start_a = startx.map(i64::from).unwrap_or(DEFAULT_START_A);
    let start_b = starty.map(i64::from).unwrap_or(DEFAULT_START_B);
    let seq = super::generate(i64::from(n), start_a, start_b)?;
    Ok(to_js_value(&seq)?)
}

/// Answers a raw query string the way the HTTP endpoint would.
///
/// Returns an object with `status`, `contentType` and `body`.
///
/// # Example (JavaScript)
/// ```js
/// const res = handleQuery("n=10&startx=3&starty=2");
/// if (res.status === 200) console.log(JSON.parse(res.body));
/// ```
#[wasm_bindgen(js_name = handleQuery)]
pub fn handle_query(query: &str) -> Result<JsValue, JsValue> {
    let response = handle_query_inner(query);
    Ok(to_js_value(&response)?)
}
