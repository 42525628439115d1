//! XML encoding of payloads and decoding of acquirer replies.

use serde::Serialize;
use serde::de::DeserializeOwned;

use fac_types::GatewayError;

pub const NAMESPACE: &str = "http://schemas.firstatlanticcommerce.com/gateway/data";
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Serializes `payload` under `root`, declaring the acquirer's namespace on the root element.
pub fn encode<T: Serialize + ?Sized>(root: &str, payload: &T) -> Result<String, GatewayError> {
    let xml = quick_xml::se::to_string_with_root(root, payload)
        .map_err(|e| GatewayError::Encoding(e.to_string()))?;

    let open = format!("<{}", root);
    let rest = xml
        .strip_prefix(&open)
        .ok_or_else(|| GatewayError::Encoding(format!("missing <{}> root element", root)))?;

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>{} xmlns=\"{}\"{}",
        open, NAMESPACE, rest
    ))
}

/// Parses an acquirer reply.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    quick_xml::de::from_str(body.trim()).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}
