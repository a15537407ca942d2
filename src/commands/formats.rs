use crate::extensions;

/// One `mime type -> extension` line per export format the mirror can write.
pub fn formats() -> String {
    extensions::all()
        .map(|(mime, ext)| format!("{} -> {}\n", mime, ext))
        .collect()
}
