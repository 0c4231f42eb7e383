/// First four bytes of every PNG file.
pub const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

/// Sniff an image MIME type from magic bytes.
#[must_use]
pub fn detect_image_mime(data: &[u8]) -> Option<&'static str> {
    infer::get(data)
        .filter(|kind| matches!(kind.matcher_type(), infer::MatcherType::Image))
        .map(|kind| kind.mime_type())
}

#[must_use]
pub fn is_png(data: &[u8]) -> bool {
    data.starts_with(&PNG_MAGIC)
}
