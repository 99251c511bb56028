#![no_main]

use libfuzzer_sys::fuzz_target;
use rcs_chatbot::dispatch::classify;

fuzz_target!(|data: &[u8]| {
    let body = serde_json::from_slice::<serde_json::Value>(data).ok();
    if let Ok(event) = classify(body) {
        let _ = event.message_contact();
        let _ = event.text_message();
    }
});
