use crate::models::LogField;

/// Resolved column positions for the five logical fields of one source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMap {
    positions: [Option<usize>; 5],
}

impl HeaderMap {
    /// Zero-based column holding `field`, or `None` if the file lacks it
    pub fn position(&self, field: LogField) -> Option<usize> {
        self.positions[field.slot()]
    }

    pub fn is_absent(&self, field: LogField) -> bool {
        self.position(field).is_none()
    }

    /// Fields present in the source, in slot order
    pub fn present_fields(&self) -> impl Iterator<Item = LogField> + '_ {
        LogField::ALL.into_iter().filter(|field| !self.is_absent(*field))
    }

    pub fn absent_fields(&self) -> impl Iterator<Item = LogField> + '_ {
        LogField::ALL.into_iter().filter(|field| self.is_absent(*field))
    }
}

/// Map raw header cells to logical field positions
///
/// Headers are trimmed and upper-cased before comparison. Unknown headers are
/// ignored; a field named twice takes its last position.
pub fn resolve_headers<I, S>(raw_headers: I) -> HeaderMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = HeaderMap::default();
    for (index, raw) in raw_headers.into_iter().enumerate() {
        if let Some(field) = LogField::from_name(raw.as_ref()) {
            map.positions[field.slot()] = Some(index);
        }
    }
    map
}
