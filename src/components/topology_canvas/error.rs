use thiserror::Error;

/// Reasons the drawing surface could not be brought up.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window")]
	NoWindow,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<wasm_bindgen::JsValue> for SurfaceError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		SurfaceError::Js(format!("{value:?}"))
	}
}
