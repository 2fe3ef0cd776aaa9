//! Top-level emission stream.
//!
//! The translator writes each lifted routine here in its entirety
//! before returning the value-construction statements for it to the
//! caller, so a single append-only buffer is enough to model the
//! logical split between "top-level routines" and "current position".

pub struct Emitter {
    buffer: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
        if !text.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    pub fn into_inner(self) -> String {
        self.buffer
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
