// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use byte_unit::Byte;
use serde::{Deserialize, de};
use serde_yaml::Value;

/// Parse a value which could be an integer or a string and return u64 value
///
/// The string can be a hex string with underscores or a Byte string that
/// specifies units. Some examples are:
///  0x10000000
///  0x1000_0000
///  10B
///  10M, 10MB, 10MiB
pub fn parse_byte_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: de::Deserializer<'de>,
{
    // We need to first deserialize to a generic `Value` so that we can
    // support the case where it is already a u64.
    let value: Value = Deserialize::deserialize(deserializer)?;

    if let Some(number) = value.as_u64() {
        // It already is a u64, so simply return that
        return Ok(number);
    }

    let s = match value.as_str() {
        Some(s) => s.to_owned(),
        None => {
            return Err(de::Error::custom(format!(
                "'{value:?}': Unsupported type for Deserialize (should be u64 or String)"
            )));
        }
    };

    // Convert to lowercase in order to standardise any 0x prefix
    let lowercase = s.to_lowercase();

    if lowercase.starts_with("0x") {
        let without_underscore = lowercase.replace('_', "");
        let without_0x = without_underscore.trim_start_matches("0x");
        u64::from_str_radix(without_0x, 16)
            .map_err(|e| de::Error::custom(format!("Unable to parse {s} as hex string: {e}")))
    } else {
        let ignore_case = false;
        let num_bytes = Byte::parse_str(&s, ignore_case)
            .map_err(|e| de::Error::custom(format!("Unable to parse {s} as Byte string: {e}")))?;
        Ok(num_bytes.as_u64())
    }
}

pub fn parse_optional_byte_str<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: de::Deserializer<'de>,
{
    Ok(Some(parse_byte_str(deserializer)?))
}

#[derive(Debug, Deserialize)]
pub struct PlatformConfig {
    pub name: Option<String>,
    pub fabrics: Vec<FabricSection>,
    pub requests: Option<Vec<RequestSection>>,
}

#[derive(Debug, Deserialize)]
pub struct FabricSection {
    pub compatible: String,
}

/// A bandwidth request established at bring-up, before any runtime
/// consumer attaches. Bandwidths are in bytes per second; the peak
/// defaults to the average when omitted.
#[derive(Debug, Deserialize)]
pub struct RequestSection {
    pub src: u16,
    pub dst: u16,
    #[serde(deserialize_with = "parse_byte_str")]
    pub average: u64,
    #[serde(default, deserialize_with = "parse_optional_byte_str")]
    pub peak: Option<u64>,
}
