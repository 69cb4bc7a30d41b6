use serde::{Deserialize, Serialize};

/// A normalized destination stop: name plus geocoded coordinates.
///
/// Coordinates are `None` when absent or unparsable; both diff sides share
/// the coercion, so a missing coordinate never reads as a change by itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DestinationPoint {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// The ordered destination list of a package.
///
/// The primary stop is edited through different UI controls than the
/// additional stops, but downstream storage replaces the whole ordered list
/// atomically, so the two are kept together and diffed as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DestinationList {
    /// Element 0 of the stored list.
    pub primary: Option<DestinationPoint>,
    /// Elements 1..N of the stored list, in display order.
    pub additional: Vec<DestinationPoint>,
}

impl DestinationList {
    /// Total number of stops (primary included).
    pub fn len(&self) -> usize {
        usize::from(self.primary.is_some()) + self.additional.len()
    }

    /// True when the package has no destinations at all.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.additional.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_counts_primary() {
        let list = DestinationList {
            primary: Some(DestinationPoint {
                name: Some("Cancún".to_string()),
                lat: Some(21.1),
                lng: Some(-86.8),
            }),
            additional: vec![DestinationPoint::default()],
        };
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_empty_list() {
        assert!(DestinationList::default().is_empty());
        assert_eq!(DestinationList::default().len(), 0);
    }
}
