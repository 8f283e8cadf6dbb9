use std::collections::HashMap;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Opaque fill-color identifier, valid for one conversion run.
    pub struct Color;
}

/// Request-scoped color registry.
///
/// Interns source color tokens (e.g. `"#ff0000"`) into opaque [`Color`]
/// keys. The core compares and propagates keys but never interprets the
/// token text; palette resolution belongs to the serialization
/// collaborator. One registry is created per conversion run, so concurrent
/// conversions never share color state.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    tokens: SlotMap<Color, String>,
    index: HashMap<String, Color>,
}

impl ColorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `token`, returning the existing key when already interned.
    pub fn intern(&mut self, token: &str) -> Color {
        if let Some(&color) = self.index.get(token) {
            return color;
        }
        let color = self.tokens.insert(token.to_owned());
        self.index.insert(token.to_owned(), color);
        color
    }

    /// Returns the source token for `color`, if it was interned here.
    #[must_use]
    pub fn token(&self, color: Color) -> Option<&str> {
        self.tokens.get(color).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
