use std::fmt;
use std::sync::Arc;

/// Tool-defined metadata attached to a node.
///
/// The builder and printer never look inside a marker; they only carry it
/// along.
pub trait Marker: fmt::Debug + Send + Sync {
    /// Short name used to look a marker up, e.g. `"deprecated-usage"`.
    fn name(&self) -> &str;
}

/// Ordered, shareable set of [`Marker`]s. Empty for freshly built nodes.
#[derive(Clone, Debug, Default)]
pub struct Markers {
    markers: Vec<Arc<dyn Marker>>,
}

impl Markers {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy of this set with `marker` appended.
    pub fn with_marker(&self, marker: Arc<dyn Marker>) -> Self {
        let mut markers = self.markers.clone();
        markers.push(marker);
        Self { markers }
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn Marker>> {
        self.markers.iter().find(|marker| marker.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Marker>> {
        self.markers.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }
}
