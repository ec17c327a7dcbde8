// Envelope parsing and rendering:

// * header marker checks
// * declaration line (`t=` first, attributes after)
// * line handling (CRLF, extra lines, short input)

#[cfg(test)]
mod tests {
    use ecv1_core::{
        codec::{decode_envelope, encode_message},
        envelope::{decode_declaration, encode_envelope, parse_envelope, split_envelope, Attribute, Envelope, HeaderError},
        transform::{Step, TransformChain},
        types::Ecv1Error,
    };
    use serde_json::json;

// ## 1️⃣ Header line

    #[test]
    fn wrong_version_is_invalid_header() {
        let err = decode_envelope("EC v2\nt=none;ct=text\nhello").unwrap_err();
        assert!(matches!(err, Ecv1Error::InvalidHeader { ref found } if found == "EC v2"));
    }

    #[test]
    fn header_match_is_exact() {
        for text in ["ec v1\nt=none\nx", " EC v1\nt=none\nx", "EC v1 \nt=none\nx", ""] {
            let err = split_envelope(text).unwrap_err();
            assert!(matches!(err, HeaderError::InvalidHeader { .. }), "{text:?}");
        }
    }

    #[test]
    fn short_envelope_is_truncated() {
        let err = parse_envelope("EC v1\nt=gz>b64").unwrap_err();
        assert!(matches!(err, HeaderError::Truncated { lines: 2 }));

        let err = decode_envelope("EC v1").unwrap_err();
        assert!(matches!(err, Ecv1Error::TruncatedEnvelope { lines: 1 }));

        let err = split_envelope("EC v1\r\nt=none").unwrap_err();
        assert!(matches!(err, HeaderError::Truncated { lines: 2 }));
    }

// ## 2️⃣ Declaration line

    #[test]
    fn attributes_after_chain_are_kept_in_order() {
        let env = parse_envelope("EC v1\nt=none;ct=json;x=1;flag\npayload").unwrap();
        assert_eq!(env.transform, "none");
        assert_eq!(
            env.attributes,
            vec![Attribute::new("ct", "json"), Attribute::new("x", "1"), Attribute::new("flag", "")]
        );
        assert_eq!(env.content_type(), Some("json"));
        assert_eq!(env.attribute("x"), Some("1"));
        assert_eq!(env.payload, "payload");
    }

    #[test]
    fn chain_stops_at_second_equals() {
        let (chain, attrs) = decode_declaration("t=none=ignored;ct=text").unwrap();
        assert_eq!(chain, "none");
        assert_eq!(attrs, vec![Attribute::new("ct", "text")]);
    }

    #[test]
    fn chain_must_be_first_attribute() {
        let err = decode_envelope("EC v1\nct=json;t=none\nhello").unwrap_err();
        assert!(matches!(err, Ecv1Error::MissingChain { .. }));

        let err = decode_declaration("gz>b64").unwrap_err();
        assert!(matches!(err, HeaderError::MissingChain { .. }));
    }

    #[test]
    fn missing_content_type_defaults_to_json() {
        let env = parse_envelope("EC v1\nt=none\n{}").unwrap();
        assert_eq!(env.content_type(), None);
        assert_eq!(env.content_type_or_default(), "json");
    }

    #[test]
    fn envelope_resolves_its_chain() {
        let env = parse_envelope("EC v1\nt=gz>b64;ct=json\nx").unwrap();
        assert_eq!(env.chain().unwrap().steps(), &[Step::Gzip, Step::Base64]);
    }

// ## 3️⃣ Line handling

    #[test]
    fn crlf_line_endings_are_accepted() {
        assert_eq!(decode_envelope("EC v1\r\nt=none;ct=text\r\nhello\r\n").unwrap(), "hello");
    }

    #[test]
    fn trailing_newline_after_declaration_is_empty_payload() {
        let env = parse_envelope("EC v1\nt=b64;ct=text\n").unwrap();
        assert_eq!(env.transform, "b64");
        assert_eq!(env.payload, "");
        assert_eq!(decode_envelope("EC v1\r\nt=none\r\n").unwrap(), "");
    }

    #[test]
    fn lines_after_payload_are_ignored() {
        assert_eq!(decode_envelope("EC v1\nt=none\nhello\nsecond\nthird").unwrap(), "hello");
    }

// ## 4️⃣ Rendering

    #[test]
    fn render_matches_encoder_layout() {
        let env = Envelope::new(&TransformChain::default(), "json", "H4sI");
        assert_eq!(encode_envelope(&env), "EC v1\nt=gz>b64;ct=json\nH4sI");
        assert_eq!(env.to_string(), encode_envelope(&env));
    }

    #[test]
    fn parse_inverts_render() {
        let text = encode_message(&json!({"k": [1, 2, 3]})).unwrap();
        let env = parse_envelope(&text).unwrap();
        assert_eq!(encode_envelope(&env), text);
    }
}
