//! Display formatting and conditional tones for numeric values.

pub mod decimal;
pub mod num;

use rust_decimal::Decimal;

/// Colour bucket for a signed value (maps onto the palette names the UI uses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn of_f64(value: f64) -> Self {
        if value > 0.0 {
            Tone::Positive
        } else if value < 0.0 {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }

    pub fn of_decimal(value: &Decimal) -> Self {
        if value.is_zero() {
            Tone::Neutral
        } else if value.is_sign_negative() {
            Tone::Negative
        } else {
            Tone::Positive
        }
    }

    pub fn palette(&self) -> &'static str {
        match self {
            Tone::Positive => "success",
            Tone::Negative => "error",
            Tone::Neutral => "default",
        }
    }
}
