//! Export MIME type to file extension table.
//!
//! An export target whose MIME type is missing here is not downloaded.

const EXTENSIONS: &[(&str, &str)] = &[
    // generic
    ("text/html", ".html"),
    ("text/plain", ".txt"),
    ("text/csv", ".csv"),
    ("image/jpeg", ".jpg"),
    ("image/svg+xml", ".svg"),
    ("image/png", ".png"),
    ("application/pdf", ".pdf"),
    ("application/rtf", ".rtf"),
    // Office Open XML and legacy macro/template variants
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
    ("application/vnd.ms-word.document.macroEnabled.12", ".docm"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.template",
        ".dotx",
    ),
    ("application/vnd.ms-word.template.macroEnabled.12", ".dotm"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".xlsx",
    ),
    ("application/vnd.ms-excel.sheet.macroEnabled.12", ".xlsm"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.template",
        ".xltx",
    ),
    ("application/vnd.ms-excel.template.macroEnabled.12", ".xltm"),
    ("application/vnd.ms-excel.sheet.binary.macroEnabled.12", ".xlsb"),
    ("application/vnd.ms-excel.addin.macroEnabled.12", ".xlam"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        ".pptx",
    ),
    (
        "application/vnd.ms-powerpoint.presentation.macroEnabled.12",
        ".pptm",
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.slideshow",
        ".ppsx",
    ),
    ("application/vnd.ms-powerpoint.slideshow.macroEnabled.12", ".ppsm"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.template",
        ".potx",
    ),
    ("application/vnd.ms-powerpoint.template.macroEnabled.12", ".potm"),
    ("application/vnd.ms-powerpoint.addin.macroEnabled.12", ".ppam"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.slide",
        ".sldx",
    ),
    ("application/vnd.ms-powerpoint.slide.macroEnabled.12", ".sldm"),
    ("application/onenote", ".onetoc"),
    // OpenDocument
    ("application/vnd.oasis.opendocument.text", ".odt"),
    ("application/vnd.oasis.opendocument.spreadsheet", ".ods"),
    ("application/x-vnd.oasis.opendocument.spreadsheet", ".ods"),
    ("application/vnd.oasis.opendocument.presentation", ".odp"),
    ("application/vnd.oasis.opendocument.graphics", ".odg"),
    ("application/vnd.oasis.opendocument.chart", ".odc"),
    ("application/vnd.oasis.opendocument.formula", ".odf"),
    ("application/vnd.oasis.opendocument.image", ".odi"),
    ("application/vnd.oasis.opendocument.text-master", ".odm"),
    ("application/vnd.sun.xml.base", ".odb"),
    ("application/vnd.oasis.opendocument.base", ".odb"),
    ("application/vnd.oasis.opendocument.database", ".odb"),
];

pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map(|(_, ext)| *ext)
}

pub fn is_exportable(mime_type: &str) -> bool {
    extension_for(mime_type).is_some()
}

/// Every `(mime type, extension)` pair, in table order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    EXTENSIONS.iter().copied()
}
