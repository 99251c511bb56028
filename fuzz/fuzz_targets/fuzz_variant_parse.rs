#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rcs_chatbot::message::Suggestions;

#[derive(Arbitrary, Debug)]
struct Input {
    dial_type: String,
    recording_type: String,
    settings_type: String,
}

fuzz_target!(|input: Input| {
    let mut suggestions = Suggestions::new();
    let before = suggestions.len();
    if suggestions
        .add_dialer_action("Call", "call", input.dial_type.as_str(), "+1", None, None)
        .is_err()
    {
        assert_eq!(suggestions.len(), before);
    }
    let _ = suggestions.add_recording_compose_action(
        "Record",
        "rec",
        "+1",
        input.recording_type.as_str(),
    );
    let _ = suggestions.add_settings_action("Settings", "set", input.settings_type.as_str());
    let _ = suggestions.to_wire();
});
