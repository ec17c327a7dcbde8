// Chain decoder behavior, pinned to literal listed-order semantics:

// * `chain_decode` with each single step
// * multi-step chains against encoder output
// * unknown steps and UTF-8 failures
// * `ChainOrder::Reverse` as the opt-in inverse

#[cfg(test)]
mod tests {
    use ecv1_core::{
        codec::{chain_decode, chain_decode_with, encode_message},
        envelope::parse_envelope,
        transform::{ChainOrder, TransformError},
        types::Ecv1Error,
    };
    use serde_json::json;

    fn encoder_payload() -> String {
        let text = encode_message(&json!({"a": 1})).unwrap();
        parse_envelope(&text).unwrap().payload
    }

// # ✅ 1. Single steps

    #[test]
    fn none_returns_payload_unchanged() {
        assert_eq!(chain_decode("none", "hello world").unwrap(), "hello world");
        assert_eq!(chain_decode("none", "").unwrap(), "");
    }

    #[test]
    fn b64_decodes_text() {
        assert_eq!(chain_decode("b64", "aGVsbG8gd29ybGQ=").unwrap(), "hello world");
    }

    #[test]
    fn b64_rejects_malformed_payload() {
        let err = chain_decode("b64", "not base64!").unwrap_err();
        assert!(matches!(err, Ecv1Error::TransformFailure(TransformError::Base64Decode(_))));
    }

    #[test]
    fn gz_on_plain_text_fails() {
        let err = chain_decode("gz", "plain").unwrap_err();
        assert!(matches!(err, Ecv1Error::TransformFailure(TransformError::Gzip(_))));
    }

// # ✅ 2. Listed order is applied literally

    #[test]
    fn encoder_declaration_gunzips_raw_payload_first() {
        // `gz>b64` runs gz on the base64 text, which has no gzip magic.
        let err = chain_decode("gz>b64", &encoder_payload()).unwrap_err();
        assert!(matches!(err, Ecv1Error::TransformFailure(TransformError::Gzip(_))));
    }

    #[test]
    fn decode_order_declaration_recovers_encoder_output() {
        assert_eq!(chain_decode("b64>gz", &encoder_payload()).unwrap(), r#"{"a":1}"#);
        assert_eq!(chain_decode("none>b64>none>gz", &encoder_payload()).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn reverse_order_recovers_encoder_output() {
        let text = chain_decode_with("gz>b64", &encoder_payload(), ChainOrder::Reverse).unwrap();
        assert_eq!(text, r#"{"a":1}"#);
    }

    #[test]
    fn double_b64_is_applied_twice() {
        // base64("aGk=") == "YUdrPQ=="
        assert_eq!(chain_decode("b64>b64", "YUdrPQ==").unwrap(), "hi");
    }

// # ✅ 3. Hard errors

    #[test]
    fn unknown_step_fails_for_any_payload() {
        for payload in ["", "aGk=", "anything at all"] {
            let err = chain_decode("rot13", payload).unwrap_err();
            assert!(matches!(err, Ecv1Error::UnknownTransform { ref step } if step == "rot13"));
        }
    }

    #[test]
    fn unknown_step_wins_over_earlier_valid_steps() {
        let err = chain_decode("b64>rot13", "%%%").unwrap_err();
        assert!(matches!(err, Ecv1Error::UnknownTransform { ref step } if step == "rot13"));
    }

    #[test]
    fn empty_step_is_unknown() {
        let err = chain_decode("b64>>gz", "aGk=").unwrap_err();
        assert!(matches!(err, Ecv1Error::UnknownTransform { ref step } if step.is_empty()));
    }

    #[test]
    fn invalid_utf8_result_is_an_encoding_error() {
        // "//4=" is base64 of [0xFF, 0xFE].
        let err = chain_decode("b64", "//4=").unwrap_err();
        assert!(matches!(err, Ecv1Error::Encoding(_)));
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = chain_decode("zz", "x").unwrap_err();
        assert_eq!(err.to_string(), "unknown transform step: \"zz\"");
    }
}
