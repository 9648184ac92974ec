// WebAssembly bindings for the converter page
use crate::config::Config;
use crate::convert::converter::Converter;
use crate::convert::formatter::Renderer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct KmConvWasm {
    converter: Converter,
    renderer: Renderer,
}

impl Default for KmConvWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl KmConvWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_config(&Config::empty())
    }

    /// Build a converter from the contents of a kmconv.toml
    #[wasm_bindgen]
    pub fn with_config(config_toml: &str) -> Result<KmConvWasm, JsValue> {
        let config = Config::load_from_str(config_toml)
            .map_err(|e| js_sys::Error::new(&format!("Failed to load config: {}", e)))?;
        Ok(Self::from_config(&config))
    }

    /// Text for the result element: "6.21 Miles", or a message
    #[wasm_bindgen]
    pub fn convert(&self, input: &str) -> String {
        self.renderer.render(&self.converter.convert(input))
    }

    /// Returns JSON string of the tagged outcome
    #[wasm_bindgen]
    pub fn convert_to_json(&self, input: &str) -> Result<String, JsValue> {
        let outcome = self.renderer.outcome(self.converter.convert(input));

        serde_json::to_string(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {}", e)))
    }

    /// Raw miles value; throws a JS Error for empty or invalid input
    #[wasm_bindgen]
    pub fn miles(&self, input: &str) -> Result<f64, JsValue> {
        self.converter
            .convert(input)
            .map(|distance| distance.miles)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }
}

impl KmConvWasm {
    fn from_config(config: &Config) -> Self {
        Self {
            converter: Converter::new(config.parse_mode),
            renderer: Renderer::from_config(config),
        }
    }
}
