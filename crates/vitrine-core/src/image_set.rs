use serde::{Deserialize, Serialize};

use crate::consts::{PLACEHOLDER_ALT, PLACEHOLDER_IMAGE};

/// One image reference with its accessibility text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub uri: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(uri: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            alt: alt.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_IMAGE, PLACEHOLDER_ALT)
    }
}

/// Ordered, never-empty list of images shown by a viewer.
///
/// An empty input is replaced by a single placeholder entry so index
/// arithmetic always has at least one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<ImageRef>,
    placeholder: bool,
}

#[allow(clippy::len_without_is_empty)]
impl ImageSet {
    pub fn new(images: Vec<ImageRef>) -> Self {
        if images.is_empty() {
            Self {
                images: vec![ImageRef::placeholder()],
                placeholder: true,
            }
        } else {
            Self {
                images,
                placeholder: false,
            }
        }
    }

    /// Plain URIs, alt text numbered from `alt_prefix`.
    pub fn from_uris<I, S>(uris: I, alt_prefix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images = uris
            .into_iter()
            .enumerate()
            .map(|(i, uri)| ImageRef::new(uri, format!("{alt_prefix} {}", i + 1)))
            .collect();
        Self::new(images)
    }

    /// Normalize product image data of any supported shape.
    ///
    /// Nested lists are flattened in order, blank URIs dropped, and missing
    /// alt text becomes `"{fallback_alt} {n}"`.
    pub fn from_sources(sources: &[ImageSource], fallback_alt: &str) -> Self {
        let mut flat = Vec::new();
        for source in sources {
            source.flatten_into(&mut flat);
        }

        let images = flat
            .into_iter()
            .enumerate()
            .map(|(i, (uri, alt))| {
                let alt = alt
                    .filter(|a| !a.trim().is_empty())
                    .unwrap_or_else(|| format!("{fallback_alt} {}", i + 1));
                ImageRef::new(uri, alt)
            })
            .collect();
        Self::new(images)
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the caller supplied no images.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// The image at `index`, or the last one when out of range.
    pub fn get_clamped(&self, index: usize) -> &ImageRef {
        &self.images[index.min(self.last_index())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.images.iter()
    }

    pub fn last_index(&self) -> usize {
        self.images.len() - 1
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Image data as it arrives from product records: a bare string, an object,
/// or a nested list of either.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Uri(String),
    Entry {
        #[serde(alias = "src", alias = "image")]
        url: String,
        #[serde(default)]
        alt: Option<String>,
    },
    Nested(Vec<ImageSource>),
}

impl ImageSource {
    fn flatten_into(&self, out: &mut Vec<(String, Option<String>)>) {
        match self {
            Self::Uri(uri) => push_uri(out, uri, None),
            Self::Entry { url, alt } => push_uri(out, url, alt.clone()),
            Self::Nested(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

fn push_uri(out: &mut Vec<(String, Option<String>)>, uri: &str, alt: Option<String>) {
    let uri = uri.trim();
    if !uri.is_empty() {
        out.push((uri.to_string(), alt));
    }
}
