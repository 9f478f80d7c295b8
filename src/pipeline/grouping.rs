use std::collections::HashMap;

use crate::domain::AcceptedAnnotation;

/// Accepted annotations partitioned by exact `text` equality.
///
/// Keys and group members both keep first-seen order, so iteration is
/// deterministic and reruns over identical input serialize identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextGroups {
    groups: HashMap<String, Vec<AcceptedAnnotation>>,
    order: Vec<String>,
}

impl TextGroups {
    fn insert(&mut self, annotation: AcceptedAnnotation) {
        if !self.groups.contains_key(&annotation.text) {
            self.order.push(annotation.text.clone());
        }
        self.groups
            .entry(annotation.text.clone())
            .or_default()
            .push(annotation);
    }

    pub fn get(&self, text: &str) -> Option<&[AcceptedAnnotation]> {
        self.groups.get(text).map(Vec::as_slice)
    }

    /// Groups in first-seen order of their text key.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &[AcceptedAnnotation])> {
        self.order.iter().map(|text| {
            let members = self.groups.get(text).map(Vec::as_slice).unwrap_or(&[]);
            (text, members)
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Group annotations by text after QC1. Single pass, appending into the
/// per-key sequence and creating it on first sight of a key.
pub fn group_by_text(annotations: Vec<AcceptedAnnotation>) -> TextGroups {
    let mut grouped = TextGroups::default();
    for annotation in annotations {
        grouped.insert(annotation);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(text: &str, annotator: &str, label: &str) -> AcceptedAnnotation {
        AcceptedAnnotation {
            text: text.to_string(),
            annotator_id: Some(annotator.to_string()),
            label: label.to_string(),
            confidence_score: 0.9,
        }
    }

    #[test]
    fn groups_share_a_key_iff_texts_match_exactly() {
        let grouped = group_by_text(vec![
            annotation("hello", "alice", "pos"),
            annotation("hello", "bob", "pos"),
            annotation("Hello", "carol", "neg"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("hello").unwrap().len(), 2);
        assert_eq!(grouped.get("Hello").unwrap().len(), 1);
    }

    #[test]
    fn keys_iterate_in_first_seen_order() {
        let grouped = group_by_text(vec![
            annotation("b", "a1", "pos"),
            annotation("a", "a2", "neg"),
            annotation("b", "a3", "pos"),
            annotation("c", "a4", "pos"),
        ]);

        let keys: Vec<&str> = grouped.iter().map(|(text, _)| text.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn group_members_keep_arrival_order() {
        let grouped = group_by_text(vec![
            annotation("x", "first", "cat"),
            annotation("x", "second", "dog"),
            annotation("x", "third", "cat"),
        ]);

        let annotators: Vec<&str> = grouped.get("x").unwrap()
            .iter()
            .map(|a| a.annotator_id.as_deref().unwrap())
            .collect();
        assert_eq!(annotators, vec!["first", "second", "third"]);
    }

    #[test]
    fn every_annotation_lands_in_exactly_one_group() {
        let annotations = vec![
            annotation("a", "1", "pos"),
            annotation("b", "2", "neg"),
            annotation("a", "3", "pos"),
        ];
        let total = annotations.len();

        let grouped = group_by_text(annotations);
        let member_count: usize = grouped.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(member_count, total);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_text(Vec::new()).is_empty());
    }
}
