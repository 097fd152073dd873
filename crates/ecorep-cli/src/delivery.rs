//! Delivery helpers
//!
//! Rendered bytes are handed to the surrounding application as
//! base64 data-URI download links with a fixed filename and MIME type
//! per format.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The two deliverable output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFormat {
    Pdf,
    Docx,
}

impl DeliveryFormat {
    /// Fixed download filename for this format
    pub fn filename(self) -> &'static str {
        match self {
            DeliveryFormat::Pdf => "climate_report.pdf",
            DeliveryFormat::Docx => "climate_report.docx",
        }
    }

    /// MIME type served with the download
    pub fn mime_type(self) -> &'static str {
        match self {
            DeliveryFormat::Pdf => "application/pdf",
            DeliveryFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            DeliveryFormat::Pdf => "PDF",
            DeliveryFormat::Docx => "DOCX",
        }
    }
}

/// Build an HTML download link embedding the output as a data URI
pub fn download_link(bytes: &[u8], format: DeliveryFormat) -> String {
    let b64 = STANDARD.encode(bytes);
    format!(
        "<a href=\"data:{};base64,{}\" download=\"{}\" class=\"download-button\">Download {}</a>",
        format.mime_type(),
        b64,
        format.filename(),
        format.label()
    )
}
