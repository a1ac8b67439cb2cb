use std::collections::HashMap;

/// Show-more/show-less state for a set of items, keyed by item id.
///
/// Every known item starts collapsed. Each operation touches exactly one entry, so
/// expanding one item never changes another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: HashMap<String, bool>,
}

impl Disclosure {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(|id| (id.into(), false)).collect(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn show_more(&mut self, id: &str) {
        self.set(id, true);
    }

    pub fn show_less(&mut self, id: &str) {
        self.set(id, false);
    }

    pub fn toggle(&mut self, id: &str) {
        let next = !self.is_expanded(id);
        self.set(id, next);
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    fn set(&mut self, id: &str, value: bool) {
        match self.expanded.get_mut(id) {
            Some(flag) => *flag = value,
            None => log::warn!("ignoring disclosure change for unknown item {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::projects;

    fn project_disclosure() -> Disclosure {
        Disclosure::new(projects().iter().map(|p| p.id))
    }

    fn snapshot(d: &Disclosure) -> Vec<(&'static str, bool)> {
        projects().iter().map(|p| (p.id, d.is_expanded(p.id))).collect()
    }

    #[test]
    fn test_all_start_collapsed() {
        let d = project_disclosure();
        assert_eq!(d.len(), projects().len());
        assert!(projects().iter().all(|p| !d.is_expanded(p.id)));
    }

    #[test]
    fn test_toggle_only_changes_one_entry() {
        for target in projects() {
            let mut d = project_disclosure();
            // expand everything else first so "unchanged" is meaningful both ways
            for other in projects().iter().filter(|p| p.id != target.id) {
                d.show_more(other.id);
            }
            let before = snapshot(&d);

            d.toggle(target.id);
            let after = snapshot(&d);

            for ((id, was), (_, now)) in before.iter().zip(after.iter()) {
                if *id == target.id {
                    assert_ne!(was, now);
                } else {
                    assert_eq!(was, now, "sibling {id} changed");
                }
            }
        }
    }

    #[test]
    fn test_show_more_and_less_are_idempotent() {
        let mut d = project_disclosure();
        let id = projects()[0].id;

        d.show_less(id);
        assert!(!d.is_expanded(id));

        d.show_more(id);
        d.show_more(id);
        assert!(d.is_expanded(id));

        d.show_less(id);
        d.show_less(id);
        assert!(!d.is_expanded(id));
    }

    #[test]
    fn test_entries_cycle_indefinitely() {
        let mut d = project_disclosure();
        let id = projects()[1].id;
        for i in 0..5 {
            d.toggle(id);
            assert_eq!(d.is_expanded(id), i % 2 == 0);
        }
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut d = project_disclosure();
        let before = d.clone();
        d.show_more("not-a-project");
        d.toggle("not-a-project");
        assert_eq!(d, before);
        assert!(!d.is_expanded("not-a-project"));
    }

    #[test]
    fn test_cnn_show_more_scenario() {
        let cnn = projects()
            .iter()
            .find(|p| p.title == "Anomaly Intrusion Detection using CNN")
            .expect("CNN project should exist");
        let mut d = project_disclosure();
        assert!(!d.is_expanded(cnn.id));

        // "Click me for more information"
        d.show_more(cnn.id);
        assert!(d.is_expanded(cnn.id));
        assert_eq!(cnn.detail.bullets.len(), 3);

        // "Show less"
        d.show_less(cnn.id);
        assert!(!d.is_expanded(cnn.id));
    }
}
