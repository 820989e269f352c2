use keym::engine::{
    add_action, add_macro, delete_action, delete_macro, move_action, update_action, update_macro,
};
use keym::{ErrorKind, KeyList, Macro, MacroAction, MacroConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const KEYS: &[&str] = &["A", "B", "C", "space", "f1", "num+"];

fn catalog() -> KeyList {
    KeyList::new(KEYS.iter().copied())
}

fn key() -> impl Strategy<Value = String> {
    prop::sample::select(KEYS).prop_map(str::to_string)
}

fn action() -> impl Strategy<Value = MacroAction> {
    (key(), 0u64..10_000, 0u64..10_000).prop_map(|(key, hold_ms, delay_ms)| MacroAction {
        key,
        hold_ms,
        delay_ms,
    })
}

fn macro_def() -> impl Strategy<Value = Macro> {
    (key(), 0u8..=2, prop::collection::vec(action(), 0..8)).prop_map(
        |(trigger, mode, actions)| Macro {
            trigger,
            mode,
            actions,
        },
    )
}

fn config() -> impl Strategy<Value = MacroConfig> {
    (
        prop_oneof![Just(String::new()), key()],
        prop::collection::vec(macro_def(), 0..6),
    )
        .prop_map(|(toggle_key, macros)| MacroConfig { toggle_key, macros })
}

/// A config with at least one macro holding at least one action, plus a
/// macro position and two action positions valid for it.
fn config_with_positions() -> impl Strategy<Value = (MacroConfig, usize, usize, usize)> {
    config()
        .prop_filter("needs a non-empty macro", |c| {
            c.macros.iter().any(|m| !m.actions.is_empty())
        })
        .prop_flat_map(|c| {
            let candidates: Vec<usize> = c
                .macros
                .iter()
                .enumerate()
                .filter(|(_, m)| !m.actions.is_empty())
                .map(|(i, _)| i)
                .collect();
            (Just(c), prop::sample::select(candidates))
        })
        .prop_flat_map(|(c, m)| {
            let len = c.macros[m].actions.len();
            (Just(c), Just(m), 0..len, 0..len)
        })
}

proptest! {
    #[test]
    fn add_then_delete_last_macro_is_identity(original in config()) {
        let grown = add_macro(&original, &catalog());
        prop_assert_eq!(grown.macros.len(), original.macros.len() + 1);
        let shrunk = delete_macro(&grown, grown.macros.len() - 1).unwrap();
        prop_assert_eq!(shrunk, original);
    }

    #[test]
    fn move_there_and_back_restores_order((original, m, i, j) in config_with_positions()) {
        let moved = move_action(&original, m, i, j).unwrap();
        prop_assert_eq!(moved.macros[m].actions[j].clone(), original.macros[m].actions[i].clone());
        let restored = move_action(&moved, m, j, i).unwrap();
        prop_assert_eq!(restored, original);
    }

    #[test]
    fn move_only_touches_one_macro((original, m, i, j) in config_with_positions()) {
        let moved = move_action(&original, m, i, j).unwrap();
        for (k, (a, b)) in original.macros.iter().zip(&moved.macros).enumerate() {
            if k != m {
                prop_assert_eq!(a, b);
            }
        }
        let mut before = original.macros[m].actions.clone();
        let mut after = moved.macros[m].actions.clone();
        before.sort_by(|x, y| (&x.key, x.hold_ms, x.delay_ms).cmp(&(&y.key, y.hold_ms, y.delay_ms)));
        after.sort_by(|x, y| (&x.key, x.hold_ms, x.delay_ms).cmp(&(&y.key, y.hold_ms, y.delay_ms)));
        prop_assert_eq!(before, after);
    }

    #[test]
    fn out_of_range_indices_are_rejected(original in config(), extra in 0usize..4) {
        let keys = catalog();
        let snapshot = original.clone();
        let bad_macro = original.macros.len() + extra;

        let results = [
            update_macro(&original, &keys, bad_macro, "A", 0),
            delete_macro(&original, bad_macro),
            add_action(&original, &keys, bad_macro, "A", 1, 1),
            update_action(&original, &keys, bad_macro, 0, "A", 1, 1),
            delete_action(&original, bad_macro, 0),
            move_action(&original, bad_macro, 0, 0),
        ];
        for result in results {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::IndexOutOfRange);
        }

        for (m, entry) in original.macros.iter().enumerate() {
            let bad_action = entry.actions.len() + extra;
            let results = [
                update_action(&original, &keys, m, bad_action, "A", 1, 1),
                delete_action(&original, m, bad_action),
                move_action(&original, m, bad_action, 0),
                move_action(&original, m, 0, bad_action),
            ];
            for result in results {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::IndexOutOfRange);
            }
        }

        prop_assert_eq!(
            serde_json::to_string(&original).unwrap(),
            serde_json::to_string(&snapshot).unwrap()
        );
    }

    #[test]
    fn json_round_trip(original in config()) {
        let text = serde_json::to_string(&original).unwrap();
        let back: MacroConfig = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, original);
    }

    #[test]
    fn toml_round_trip(original in config()) {
        let text = toml::to_string_pretty(&original).unwrap();
        let back: MacroConfig = toml::from_str(&text).unwrap();
        prop_assert_eq!(back, original);
    }
}

#[test]
fn validation_rejections() {
    let keys = catalog();
    let config = add_macro(&MacroConfig::default(), &keys);

    let err = add_action(&config, &keys, 0, "B", -1, 50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDuration);

    let err = add_action(&config, &keys, 0, "NOT_A_KEY", 50, 50).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);

    let err = update_macro(&config, &keys, 0, "A", 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMode);
}

#[test]
fn wire_shape_uses_documented_field_names() {
    let keys = catalog();
    let config = add_macro(&MacroConfig::default(), &keys);
    let config = add_action(&config, &keys, 0, "B", 50, 50).unwrap();

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "toggle_key": "`",
            "macros": [{
                "trigger": "A",
                "mode": 0,
                "actions": [{ "key": "B", "hold_ms": 50, "delay_ms": 50 }]
            }]
        })
    );
}
