use std::collections::BTreeSet;

use crate::domain::{AgreedSample, Disagreement};
use crate::pipeline::grouping::TextGroups;

/// Result of QC2 over all text groups. The two sets are disjoint: a text
/// appears in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgreementOutcome {
    pub agreed: Vec<AgreedSample>,
    pub disagreements: Vec<Disagreement>,
}

/// Quality Check 2 (Agreement): for each text group, collect the distinct
/// labels across its members. Exactly one distinct label means the
/// annotators agree; two or more mean a disagreement carrying the full
/// label set. A group always has at least one member, so there is no
/// zero-label case; a single-annotation group trivially agrees.
pub fn apply_agreement_check(grouped: &TextGroups) -> AgreementOutcome {
    let mut outcome = AgreementOutcome::default();

    for (text, annotations) in grouped.iter() {
        let labels: BTreeSet<String> = annotations
            .iter()
            .map(|annotation| annotation.label.clone())
            .collect();

        if labels.len() == 1 {
            // unanimous
            let label = labels.into_iter().next().unwrap_or_default();
            outcome.agreed.push(AgreedSample {
                text: text.clone(),
                label,
            });
        } else {
            outcome.disagreements.push(Disagreement {
                text: text.clone(),
                labels,
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AcceptedAnnotation;
    use crate::pipeline::grouping::group_by_text;

    fn annotation(text: &str, label: &str) -> AcceptedAnnotation {
        AcceptedAnnotation {
            text: text.to_string(),
            annotator_id: None,
            label: label.to_string(),
            confidence_score: 0.9,
        }
    }

    #[test]
    fn unanimous_group_becomes_agreed_sample() {
        let grouped = group_by_text(vec![
            annotation("hello", "pos"),
            annotation("hello", "pos"),
        ]);

        let outcome = apply_agreement_check(&grouped);
        assert_eq!(
            outcome.agreed,
            vec![AgreedSample {
                text: "hello".to_string(),
                label: "pos".to_string(),
            }]
        );
        assert!(outcome.disagreements.is_empty());
    }

    #[test]
    fn single_annotation_group_trivially_agrees() {
        let grouped = group_by_text(vec![annotation("solo", "neg")]);

        let outcome = apply_agreement_check(&grouped);
        assert_eq!(outcome.agreed.len(), 1);
        assert_eq!(outcome.agreed[0].label, "neg");
    }

    #[test]
    fn conflicting_labels_become_disagreement_with_full_label_set() {
        let grouped = group_by_text(vec![
            annotation("x", "dog"),
            annotation("x", "cat"),
            annotation("x", "dog"),
        ]);

        let outcome = apply_agreement_check(&grouped);
        assert!(outcome.agreed.is_empty());
        assert_eq!(outcome.disagreements.len(), 1);

        let disagreement = &outcome.disagreements[0];
        assert_eq!(disagreement.text, "x");
        // BTreeSet: distinct and lexicographically sorted
        let labels: Vec<&str> = disagreement.labels.iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["cat", "dog"]);
    }

    #[test]
    fn every_group_lands_in_exactly_one_result_set() {
        let grouped = group_by_text(vec![
            annotation("a", "pos"),
            annotation("b", "pos"),
            annotation("b", "neg"),
            annotation("c", "neu"),
        ]);

        let outcome = apply_agreement_check(&grouped);
        assert_eq!(
            outcome.agreed.len() + outcome.disagreements.len(),
            grouped.len()
        );

        let agreed_texts: Vec<&str> = outcome.agreed.iter().map(|s| s.text.as_str()).collect();
        let disagreed_texts: Vec<&str> = outcome
            .disagreements
            .iter()
            .map(|d| d.text.as_str())
            .collect();
        assert_eq!(agreed_texts, vec!["a", "c"]);
        assert_eq!(disagreed_texts, vec!["b"]);
    }

    #[test]
    fn disagreement_label_sets_have_at_least_two_labels() {
        let grouped = group_by_text(vec![
            annotation("x", "cat"),
            annotation("x", "dog"),
            annotation("y", "pos"),
        ]);

        let outcome = apply_agreement_check(&grouped);
        for disagreement in &outcome.disagreements {
            assert!(disagreement.labels.len() >= 2);
        }
    }
}
