use serde_json::Value;
use std::fmt;

pub const DEFAULT_BITS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Raw,
    Samsung,
    Nec,
}

impl Protocol {
    /// Maps a command type tag onto a protocol, `None` for tags this device does not know.
    pub fn from_tag(tag: &str) -> Option<Protocol> {
        match tag {
            "raw" => Some(Protocol::Raw),
            "samsung" => Some(Protocol::Samsung),
            "nec" => Some(Protocol::Nec),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Protocol::Raw => "RAW",
            Protocol::Samsung => "SAMSUNG",
            Protocol::Nec => "NEC",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A simulated infrared transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrSignal {
    pub protocol: Protocol,
    pub code: String,
    pub bits: u32,
}

impl IrSignal {
    pub fn new(protocol: Protocol, code: &Value, bits: u32) -> Self {
        let code = match code {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        IrSignal { protocol, code, bits }
    }
}

impl fmt::Display for IrSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Code: {}, Bits: {}", self.protocol, self.code, self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("raw", Some(Protocol::Raw))]
    #[case("samsung", Some(Protocol::Samsung))]
    #[case("nec", Some(Protocol::Nec))]
    #[case("NEC", None)]
    #[case("sony", None)]
    #[case("", None)]
    fn maps_type_tags(#[case] tag: &str, #[case] expected: Option<Protocol>) {
        assert_eq!(Protocol::from_tag(tag), expected);
    }

    #[rstest]
    #[case(json!("0x1234"), "0x1234")]
    #[case(json!(3772793023u32), "3772793023")]
    #[case(json!([9000, 4500, 560]), "[9000,4500,560]")]
    fn renders_codes_as_text(#[case] code: Value, #[case] expected: &str) {
        assert_eq!(IrSignal::new(Protocol::Raw, &code, DEFAULT_BITS).code, expected);
    }

    #[test]
    fn displays_protocol_code_and_bits() {
        let signal = IrSignal::new(Protocol::Nec, &json!("0x1234"), 16);

        assert_eq!(signal.to_string(), "NEC - Code: 0x1234, Bits: 16");
    }
}
