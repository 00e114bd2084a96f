use bytes::Bytes;

pub const CONFLICT_START: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END: &str = ">>>>>>>\n";

/// Contents of a conflicted file; an absent side contributes no bytes
///
/// The sides are concatenated verbatim, so a side without a trailing newline runs into the
/// following marker.
pub fn conflict_content(current: Option<&[u8]>, target: Option<&[u8]>) -> Bytes {
    let current = current.unwrap_or_default();
    let target = target.unwrap_or_default();

    let mut content = Vec::with_capacity(
        CONFLICT_START.len()
            + current.len()
            + CONFLICT_SEPARATOR.len()
            + target.len()
            + CONFLICT_END.len(),
    );
    content.extend_from_slice(CONFLICT_START.as_bytes());
    content.extend_from_slice(current);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    content.extend_from_slice(target);
    content.extend_from_slice(CONFLICT_END.as_bytes());

    Bytes::from(content)
}
