use gridform::RowKey;
use gridform::table::{HeaderCheckbox, Selection};
use proptest::prelude::*;

fn keys(n: i64) -> Vec<RowKey> {
    (1..=n).map(RowKey::from).collect()
}

#[test]
fn test_toggle_flips_membership() {
    let mut selection = Selection::new();
    selection.toggle(RowKey::from(2));
    assert!(selection.is_selected(&RowKey::from(2)));
    selection.toggle(RowKey::from(2));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_selects_then_clears() {
    let mut selection = Selection::new();
    selection.toggle(RowKey::from(2));

    selection.toggle_all(keys(3));
    assert_eq!(selection.len(), 3);
    for key in keys(3) {
        assert!(selection.is_selected(&key));
    }

    selection.toggle_all(keys(3));
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_on_empty_data_clears() {
    let mut selection = Selection::new();
    selection.toggle(RowKey::from(9));
    selection.toggle_all(Vec::new());
    // 1 selected vs 0 rows: not "all", so everything (nothing) gets selected
    assert!(selection.is_empty());
}

#[test]
fn test_header_state() {
    let mut selection = Selection::new();
    assert_eq!(selection.header_state(3), HeaderCheckbox::default());

    selection.toggle(RowKey::from(1));
    assert_eq!(
        selection.header_state(3),
        HeaderCheckbox {
            checked: false,
            indeterminate: true,
        }
    );

    selection.toggle_all(keys(3));
    assert_eq!(
        selection.header_state(3),
        HeaderCheckbox {
            checked: true,
            indeterminate: false,
        }
    );
}

#[test]
fn test_header_state_with_no_rows_is_unchecked() {
    let selection = Selection::new();
    assert!(!selection.header_state(0).checked);
    assert!(!selection.header_state(0).indeterminate);
}

#[test]
fn test_retain_present_removes_stale_keys() {
    let mut selection: Selection = keys(4).into_iter().collect();
    let present = keys(2);
    assert_eq!(selection.retain_present(&present), 2);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_number_keys_match_across_representations() {
    let mut selection = Selection::new();
    selection.toggle(RowKey::from(1i64));
    assert!(selection.is_selected(&RowKey::from(1.0f64)));
    assert!(!selection.is_selected(&RowKey::from("1")));

    selection.toggle(RowKey::from(0.0f64));
    assert!(selection.is_selected(&RowKey::from(-0.0f64)));
}

#[derive(Debug, Clone)]
enum Op {
    Toggle(i64),
    ToggleAll,
}

fn arb_op(n: i64) -> impl Strategy<Value = Op> {
    prop_oneof![(1..=n).prop_map(Op::Toggle), Just(Op::ToggleAll)]
}

proptest! {
    #[test]
    fn indeterminate_iff_partial(n in 0i64..8, ops in proptest::collection::vec(arb_op(8), 0..40)) {
        let all = keys(n);
        let mut selection = Selection::new();
        for op in ops {
            match op {
                Op::Toggle(k) if k <= n => selection.toggle(RowKey::from(k)),
                Op::Toggle(_) => {}
                Op::ToggleAll => selection.toggle_all(all.clone()),
            }
            let state = selection.header_state(all.len());
            let count = selection.len();
            prop_assert_eq!(state.indeterminate, count > 0 && count < all.len());
            prop_assert_eq!(state.checked, !all.is_empty() && count == all.len());
        }
    }

    #[test]
    fn toggle_all_twice_restores_all_selected_condition(
        n in 1i64..8,
        picks in proptest::collection::vec(1i64..8, 0..8),
    ) {
        let all = keys(n);
        let mut selection = Selection::new();
        for k in picks.into_iter().filter(|k| *k <= n) {
            selection.toggle(RowKey::from(k));
        }
        let before = selection.header_state(all.len()).checked;

        selection.toggle_all(all.clone());
        prop_assert_eq!(selection.header_state(all.len()).checked, !before);
        selection.toggle_all(all.clone());
        prop_assert_eq!(selection.header_state(all.len()).checked, before);
        if !before {
            prop_assert!(selection.is_empty());
        }
    }
}
