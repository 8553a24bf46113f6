//! Query encoding settings

/// How nested object keys are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestedFormat {
    /// `created_at.after=...`
    #[default]
    Dots,
    /// `created_at[after]=...`
    Brackets,
}

/// How arrays of scalars are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    /// `status.in=a,b`
    #[default]
    Comma,
    /// `status.in=a&status.in=b`
    Repeat,
    /// `status.in[]=a&status.in[]=b`
    Brackets,
}

/// Settings for [`encode_query`](super::encode_query)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuerySettings {
    /// Nested key format
    pub nested: NestedFormat,
    /// Array format
    pub array: ArrayFormat,
}

impl QuerySettings {
    /// Create settings with the given formats
    pub fn new(nested: NestedFormat, array: ArrayFormat) -> Self {
        Self { nested, array }
    }
}
