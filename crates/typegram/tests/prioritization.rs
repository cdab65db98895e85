//! Property tests for the display prioritization policy

use proptest::prelude::*;
use typegram::prelude::*;

// ===================
// Strategies
// ===================

fn access_strategy() -> impl Strategy<Value = AccessModifier> {
    prop_oneof![
        Just(AccessModifier::Public),
        Just(AccessModifier::Private),
        Just(AccessModifier::Protected),
        Just(AccessModifier::Internal),
    ]
}

/// Members named by their input position so stability can be checked
fn diagram_strategy() -> impl Strategy<Value = ClassDiagram> {
    prop::collection::vec(access_strategy(), 0..30).prop_map(|accesses| {
        let mut diagram = ClassDiagram::new("Subject");
        for (i, access) in accesses.into_iter().enumerate() {
            diagram.add_member(ClassMember::new(format!("m{}", i), "Int32", access));
            diagram.add_method(ClassMethod::new(format!("f{}", i), "Void", access));
        }
        diagram
    })
}

fn position(name: &str) -> usize {
    name[1..].parse().unwrap()
}

// ===================
// Checks
// ===================

fn check_sorted_and_stable(
    shown: &[(AccessModifier, usize)],
) -> Result<(), TestCaseError> {
    for pair in shown.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        prop_assert!(a.0.priority() <= b.0.priority());
        if a.0 == b.0 {
            prop_assert!(a.1 < b.1, "equal access levels must keep input order");
        }
    }
    Ok(())
}

fn check_members(diagram: &ClassDiagram, limit: Option<usize>) -> Result<(), TestCaseError> {
    let effective = limit.unwrap_or(ClassDiagram::MAX_DISPLAY_MEMBERS);
    let shown = diagram.display_members(limit);
    let total = diagram.members.len();

    if total <= effective {
        prop_assert_eq!(shown.hidden, 0);
        prop_assert_eq!(shown.items.len(), total);
    } else {
        prop_assert_eq!(shown.items.len(), effective);
        prop_assert_eq!(shown.hidden, total - effective);
    }

    let pairs: Vec<_> = shown
        .items
        .iter()
        .map(|m| (m.access, position(&m.name)))
        .collect();
    check_sorted_and_stable(&pairs)
}

fn check_methods(diagram: &ClassDiagram, limit: Option<usize>) -> Result<(), TestCaseError> {
    let effective = limit.unwrap_or(ClassDiagram::MAX_DISPLAY_METHODS);
    let shown = diagram.display_methods(limit);
    let total = diagram.methods.len();

    prop_assert_eq!(shown.items.len(), total.min(effective));
    prop_assert_eq!(shown.hidden, total.saturating_sub(effective));

    let pairs: Vec<_> = shown
        .items
        .iter()
        .map(|m| (m.access, position(&m.name)))
        .collect();
    check_sorted_and_stable(&pairs)
}

/// The shown prefix is the prefix of the fully sorted sequence
fn check_truncation_keeps_highest_priority(
    diagram: &ClassDiagram,
    limit: usize,
) -> Result<(), TestCaseError> {
    let full = diagram.display_members(Some(usize::MAX));
    let cut = diagram.display_members(Some(limit));
    prop_assert_eq!(&full.items[..cut.items.len()], &cut.items[..]);
    Ok(())
}

proptest! {
    #[test]
    fn members_default_limit(diagram in diagram_strategy()) {
        check_members(&diagram, None)?;
    }

    #[test]
    fn members_custom_limit(diagram in diagram_strategy(), limit in 0usize..20) {
        check_members(&diagram, Some(limit))?;
    }

    #[test]
    fn methods_default_limit(diagram in diagram_strategy()) {
        check_methods(&diagram, None)?;
    }

    #[test]
    fn methods_custom_limit(diagram in diagram_strategy(), limit in 0usize..20) {
        check_methods(&diagram, Some(limit))?;
    }

    #[test]
    fn truncation_keeps_sorted_prefix(diagram in diagram_strategy(), limit in 0usize..20) {
        check_truncation_keeps_highest_priority(&diagram, limit)?;
    }
}

#[test]
fn test_twelve_fields_default_limit() {
    let mut diagram = ClassDiagram::new("Wide");
    for i in 0..12 {
        diagram.add_member(ClassMember::new(format!("m{}", i), "Int32", AccessModifier::Public));
    }

    let shown = diagram.display_members(None);
    assert_eq!(shown.items.len(), 8);
    assert_eq!(shown.hidden, 4);
}
