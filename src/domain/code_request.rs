//! Code request model and resolution into QR payload text.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::CodeError;

/// Semantic type of the text carried by a QR code.
///
/// Determines the URI scheme prepended to the payload so that scanners
/// can act on it (open a browser, dial, compose a message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Url,
    Tel,
    Sms,
    Email,
}

impl DataType {
    /// All supported data types, in display order.
    pub const ALL: [DataType; 4] = [DataType::Url, DataType::Tel, DataType::Sms, DataType::Email];

    /// Wire tag used in JSON bodies and HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Url => "url",
            DataType::Tel => "tel",
            DataType::Sms => "sms",
            DataType::Email => "email",
        }
    }

    /// URI scheme prefix prepended to the payload.
    pub fn scheme_prefix(&self) -> &'static str {
        match self {
            DataType::Url => "",
            DataType::Tel => "tel:",
            DataType::Sms => "smsto:",
            DataType::Email => "mailto:",
        }
    }
}

impl FromStr for DataType {
    type Err = CodeError;

    /// Parses a wire tag. Matching is exact: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(DataType::Url),
            "tel" => Ok(DataType::Tel),
            "sms" => Ok(DataType::Sms),
            "email" => Ok(DataType::Email),
            _ => Err(CodeError::UnsupportedDataType),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound request to generate a QR code.
///
/// `data_type` is kept as the raw tag so that an unknown value is reported
/// as [`CodeError::UnsupportedDataType`] by [`CodeRequest::resolve`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRequest {
    pub text: String,
    pub data_type: String,
}

impl CodeRequest {
    pub fn new(text: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data_type: data_type.into(),
        }
    }

    /// Produces the exact string to feed into the QR encoder.
    ///
    /// # Errors
    ///
    /// - [`CodeError::Required`] if `text` is empty (checked first)
    /// - [`CodeError::UnsupportedDataType`] if `data_type` is not a known tag
    ///
    /// # Examples
    ///
    /// ```
    /// use qrcode_service::domain::CodeRequest;
    ///
    /// let req = CodeRequest::new("555-1234", "tel");
    /// assert_eq!(req.resolve().unwrap(), "tel:555-1234");
    /// ```
    pub fn resolve(&self) -> Result<String, CodeError> {
        if self.text.is_empty() {
            return Err(CodeError::Required);
        }

        let data_type: DataType = self.data_type.parse()?;

        Ok(match data_type {
            DataType::Url => self.text.clone(),
            DataType::Tel | DataType::Sms | DataType::Email => {
                format!("{}{}", data_type.scheme_prefix(), self.text)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_is_unchanged() {
        let req = CodeRequest::new("https://example.com/a?b=c", "url");
        assert_eq!(req.resolve().unwrap(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_resolve_tel() {
        let req = CodeRequest::new("555-1234", "tel");
        assert_eq!(req.resolve().unwrap(), "tel:555-1234");
    }

    #[test]
    fn test_resolve_email() {
        let req = CodeRequest::new("a@b.com", "email");
        assert_eq!(req.resolve().unwrap(), "mailto:a@b.com");
    }

    #[test]
    fn test_resolve_sms() {
        let req = CodeRequest::new("+15551234", "sms");
        assert_eq!(req.resolve().unwrap(), "smsto:+15551234");
    }

    #[test]
    fn test_every_type_prepends_its_prefix() {
        for data_type in DataType::ALL {
            let req = CodeRequest::new("payload", data_type.as_str());
            let resolved = req.resolve().unwrap();
            assert_eq!(resolved, format!("{}payload", data_type.scheme_prefix()));
        }
    }

    #[test]
    fn test_empty_text_is_required_for_any_type() {
        for tag in ["url", "tel", "sms", "email", "", "fax"] {
            let req = CodeRequest::new("", tag);
            assert!(
                matches!(req.resolve(), Err(CodeError::Required)),
                "tag {tag:?} should fail with Required"
            );
        }
    }

    #[test]
    fn test_unknown_data_type_is_rejected() {
        for tag in ["", "fax", "URL", " tel", "mailto"] {
            let req = CodeRequest::new("hello", tag);
            assert!(
                matches!(req.resolve(), Err(CodeError::UnsupportedDataType)),
                "tag {tag:?} should be unsupported"
            );
        }
    }

    #[test]
    fn test_data_type_round_trips_through_tag() {
        for data_type in DataType::ALL {
            assert_eq!(data_type.as_str().parse::<DataType>().unwrap(), data_type);
            assert_eq!(data_type.to_string(), data_type.as_str());
        }
    }
}
