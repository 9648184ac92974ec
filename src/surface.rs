// Presentation binding: the no-argument `convert()` that reads an input surface and writes
// an output surface, on top of the pure converter

use crate::config::Config;
use crate::convert::converter::Converter;
use crate::convert::formatter::Renderer;

/// Identifier of the kilometer input on the page
pub const INPUT_ID: &str = "km";
/// Identifier of the result element on the page
pub const OUTPUT_ID: &str = "res";

/// Something that holds the text the user typed
pub trait InputSurface {
    fn value(&self) -> String;
}

/// Something that displays a line of text
pub trait OutputSurface {
    fn set_text(&mut self, text: &str);
}

/// In-memory text element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub id: String,
    pub text: String,
}

impl TextField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }
}

impl InputSurface for TextField {
    fn value(&self) -> String {
        self.text.clone()
    }
}

impl OutputSurface for TextField {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// An input and an output surface wired to a converter
pub struct ConversionForm<I, O> {
    pub input: I,
    pub output: O,
    converter: Converter,
    renderer: Renderer,
}

impl ConversionForm<TextField, TextField> {
    /// In-memory form with the page's element identifiers
    pub fn in_memory(config: &Config) -> Self {
        Self::with_config(TextField::new(INPUT_ID), TextField::new(OUTPUT_ID), config)
    }
}

impl<I: InputSurface, O: OutputSurface> ConversionForm<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            converter: Converter::default(),
            renderer: Renderer::default(),
        }
    }

    pub fn with_config(input: I, output: O, config: &Config) -> Self {
        Self {
            input,
            output,
            converter: Converter::new(config.parse_mode),
            renderer: Renderer::from_config(config),
        }
    }

    /// Read the input surface, convert, and write exactly one string to the output
    /// surface: the formatted distance or a message.
    pub fn convert(&mut self) {
        let raw = self.input.value();
        let result = self.converter.convert(&raw);
        let display = self.renderer.render(&result);
        self.output.set_text(&display);
    }
}
