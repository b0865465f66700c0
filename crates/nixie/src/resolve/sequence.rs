//! Canonical message ordering.
//!
//! Message order is a total order over the host-assigned sequence numbers,
//! interpreted according to the diagram's numbering mode: flat integers in
//! the single-level modes, dotted hierarchical tokens in the nested-level
//! modes. The frame-based variants order messages exactly like their base
//! modes. Sequence numbers are assumed unique; no secondary tie-break exists,
//! but both sorts are stable.

use std::cmp::Ordering;

use log::debug;

use nixie_core::model::{
    Diagram, Message, SEQUENCE_NUMBERING_PROPERTY, SequenceNumbering,
};

use crate::error::NixieError;

/// Read the configured numbering mode from the diagram's property table.
///
/// # Errors
///
/// Fails fast when the property is missing or outside the four recognized
/// codes; there is no fallback mode.
pub fn numbering_mode(diagram: &Diagram) -> Result<SequenceNumbering, NixieError> {
    let code = diagram
        .property(SEQUENCE_NUMBERING_PROPERTY)
        .ok_or(NixieError::MissingNumberingMode)?;
    let mode = SequenceNumbering::try_from(code)?;
    debug!(code, mode:?; "Resolved sequence numbering mode");
    Ok(mode)
}

/// Produce the canonical message order for the given mode.
///
/// # Errors
///
/// In the single-level modes a sequence number that does not parse as an
/// integer aborts the export.
pub fn canonical_order<'a>(
    diagram: &'a Diagram,
    mode: SequenceNumbering,
) -> Result<Vec<&'a Message>, NixieError> {
    let mut messages: Vec<&Message> = diagram.messages().collect();

    if mode.is_single_level() {
        let mut keyed: Vec<(i64, &Message)> = messages
            .into_iter()
            .map(|message| {
                let key = message.sequence_number().parse::<i64>().map_err(|_| {
                    NixieError::SequenceNumber {
                        number: message.sequence_number().to_string(),
                    }
                })?;
                Ok((key, message))
            })
            .collect::<Result<_, NixieError>>()?;
        keyed.sort_by_key(|(key, _)| *key);
        messages = keyed.into_iter().map(|(_, message)| message).collect();
    } else {
        messages.sort_by(|a, b| compare_nested(a.sequence_number(), b.sequence_number()));
    }

    Ok(messages)
}

/// Compare two dotted hierarchical sequence numbers.
///
/// Tokens are compared component-wise with per-component string comparison;
/// a token that is a strict prefix of another orders first ("1" < "1.2" <
/// "1.3"). This agrees with the host's native string ordering of such
/// tokens (including "1.10" < "1.2").
fn compare_nested(a: &str, b: &str) -> Ordering {
    let mut lhs = a.split('.');
    let mut rhs = b.split('.');
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(left), Some(right)) => match left.cmp(right) {
                Ordering::Equal => continue,
                decided => return decided,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nixie_core::{geometry::Point, identifier::Id, model::{Element, MessageKind}};
    use proptest::prelude::*;

    fn message(id: &str, sequence_number: &str) -> Element {
        Element::Message(Message::new(
            Id::new(id),
            sequence_number,
            "A",
            "B",
            MessageKind::Send,
            Point::default(),
        ))
    }

    fn numbered_diagram(code: i64, sequence_numbers: &[&str]) -> Diagram {
        let elements = sequence_numbers
            .iter()
            .enumerate()
            .map(|(i, number)| message(&format!("m{i}"), number))
            .collect();
        Diagram::new("d", elements).with_property(SEQUENCE_NUMBERING_PROPERTY, code)
    }

    fn order_of(diagram: &Diagram) -> Vec<String> {
        let mode = numbering_mode(diagram).expect("valid mode");
        canonical_order(diagram, mode)
            .expect("orderable")
            .iter()
            .map(|m| m.sequence_number().to_string())
            .collect()
    }

    #[test]
    fn test_numbering_mode_missing_property() {
        let diagram = Diagram::new("d", vec![]);
        assert!(matches!(
            numbering_mode(&diagram),
            Err(NixieError::MissingNumberingMode)
        ));
    }

    #[test]
    fn test_numbering_mode_unknown_code() {
        let diagram = Diagram::new("d", vec![]).with_property(SEQUENCE_NUMBERING_PROPERTY, 7);
        assert!(matches!(
            numbering_mode(&diagram),
            Err(NixieError::NumberingMode { code: 7 })
        ));
    }

    #[test]
    fn test_single_level_orders_numerically() {
        let diagram = numbered_diagram(1, &["10", "2", "1"]);
        assert_eq!(order_of(&diagram), ["1", "2", "10"]);
    }

    #[test]
    fn test_single_level_rejects_dotted_numbers() {
        let diagram = numbered_diagram(1, &["1.2"]);
        let result = canonical_order(&diagram, SequenceNumbering::SingleLevel);
        assert!(matches!(
            result,
            Err(NixieError::SequenceNumber { number }) if number == "1.2"
        ));
    }

    #[test]
    fn test_nested_level_orders_hierarchically() {
        let diagram = numbered_diagram(0, &["1.3", "1", "2", "1.2", "1.2.1"]);
        assert_eq!(order_of(&diagram), ["1", "1.2", "1.2.1", "1.3", "2"]);
    }

    #[test]
    fn test_nested_level_matches_host_string_ordering() {
        // The host compares tokens as strings, so "1.10" sorts before "1.2"
        let diagram = numbered_diagram(0, &["1.2", "1.10"]);
        assert_eq!(order_of(&diagram), ["1.10", "1.2"]);
    }

    #[test]
    fn test_frame_based_variants_share_base_comparator() {
        let nested = numbered_diagram(0, &["1.2", "1", "2"]);
        let frame_nested = numbered_diagram(2, &["1.2", "1", "2"]);
        assert_eq!(order_of(&nested), order_of(&frame_nested));

        let single = numbered_diagram(1, &["3", "1", "2"]);
        let frame_single = numbered_diagram(3, &["3", "1", "2"]);
        assert_eq!(order_of(&single), order_of(&frame_single));
    }

    #[test]
    fn test_compare_nested_prefix_orders_first() {
        assert_eq!(compare_nested("1", "1.2"), Ordering::Less);
        assert_eq!(compare_nested("1.2", "1"), Ordering::Greater);
        assert_eq!(compare_nested("1.2", "1.2"), Ordering::Equal);
    }

    proptest! {
        /// Re-sorting already-sorted input is idempotent in every mode.
        #[test]
        fn prop_sort_is_idempotent(mut numbers in proptest::collection::vec(1i64..1000, 0..30)) {
            numbers.sort_unstable();
            numbers.dedup();
            let rendered: Vec<String> = numbers.iter().map(i64::to_string).collect();
            let refs: Vec<&str> = rendered.iter().map(String::as_str).collect();

            for code in 0..4i64 {
                let diagram = numbered_diagram(code, &refs);
                let once = order_of(&diagram);
                let again = {
                    let elements = once.iter().enumerate()
                        .map(|(i, n)| message(&format!("r{i}"), n))
                        .collect();
                    let resorted = Diagram::new("d", elements)
                        .with_property(SEQUENCE_NUMBERING_PROPERTY, code);
                    order_of(&resorted)
                };
                prop_assert_eq!(&once, &again);
            }
        }

        /// The nested comparator is a strict total order over distinct tokens.
        #[test]
        fn prop_nested_comparator_total_order(
            a in "[1-9][0-9]?(\\.[1-9][0-9]?){0,3}",
            b in "[1-9][0-9]?(\\.[1-9][0-9]?){0,3}",
        ) {
            let forward = compare_nested(&a, &b);
            let backward = compare_nested(&b, &a);
            prop_assert_eq!(forward, backward.reverse());
            prop_assert_eq!(forward == Ordering::Equal, a == b);
        }
    }
}
