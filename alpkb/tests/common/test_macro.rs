extern crate alpkb;

#[macro_export]
macro_rules! key_sequence_test {
    (keyboard: $keyboard:expr, sequence: [$([$row:expr, $col:expr, $pressed:expr, $delay:expr]),* $(,)?], expected_keystrokes: [$($stroke:expr),* $(,)?]) => {{
        let mut keyboard = $keyboard;
        let sequence = vec![
            $(
                $crate::common::TestKeyPress {
                    row: $row,
                    col: $col,
                    pressed: $pressed,
                    delay: $delay,
                },
            )*
        ];
        let expected_keystrokes: Vec<$crate::common::Keystroke> = vec![$($stroke),*];
        let mut lights = $crate::common::RecordingLights::default();

        let keystrokes = $crate::common::run_key_sequence(&mut keyboard, &sequence, &mut lights);
        assert_eq!(keystrokes, expected_keystrokes);
    }};
}
