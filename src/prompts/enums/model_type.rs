#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    Text,
    Image,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Anything other than `"image"`, including a missing tag, is treated as text.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag == Self::Image.as_str() => Self::Image,
            _ => Self::Text,
        }
    }

    pub fn clause(&self) -> &'static str {
        match *self {
            Self::Text => "Narrative should be engaging yet responsible.",
            Self::Image => "Visual representation should be artistic and tasteful.",
        }
    }
}
