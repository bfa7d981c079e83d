//! Request body decoding and display-time cleanup of stored content.
//!
//! Browsers submitting an HTML form send `application/x-www-form-urlencoded`
//! bodies with the note in a `text` field; the editor script and CLI clients
//! send the note as the raw body. Both end up as the same stored bytes.
//!
//! Decoding works on bytes throughout: an escape such as `%E9` becomes the
//! byte `0xE9` whether or not the result is valid UTF-8.

use std::borrow::Cow;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const TEXT_PREFIX: &str = "text=";

/// Returns `true` if the declared content type is a URL-encoded form.
pub fn is_form_urlencoded(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains(FORM_CONTENT_TYPE))
}

/// Turn a request body into the bytes that should be stored for a note.
///
/// Form bodies yield the decoded `text` field. If that field is missing or
/// empty, a literal `text=` prefix is stripped and the remainder
/// query-unescaped. A form with any malformed escape, or a fallback that
/// cannot be unescaped, is kept as-is. Every other content type is stored
/// byte for byte.
pub fn decode_body<'a>(content_type: Option<&str>, body: &'a [u8]) -> Cow<'a, [u8]> {
    if !is_form_urlencoded(content_type) {
        return Cow::Borrowed(body);
    }

    let Some(fields) = parse_form(body) else {
        return Cow::Borrowed(body);
    };

    let text = fields
        .into_iter()
        .find(|(key, _)| key == b"text")
        .map(|(_, value)| value);
    if let Some(value) = text.filter(|v| !v.is_empty()) {
        return Cow::Owned(value);
    }

    body.strip_prefix(TEXT_PREFIX.as_bytes())
        .and_then(query_unescape)
        .map_or(Cow::Borrowed(body), Cow::Owned)
}

/// Split a form body into unescaped key/value pairs.
///
/// Returns `None` if any key or value carries a malformed escape.
fn parse_form(body: &[u8]) -> Option<Vec<(Vec<u8>, Vec<u8>)>> {
    body.split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(i) => (&pair[..i], &pair[i + 1..]),
                None => (pair, &pair[..0]),
            };
            Some((query_unescape(key)?, query_unescape(value)?))
        })
        .collect()
}

/// Unescape a query component: `+` is a space and every `%` must start a
/// two-digit hex escape.
fn query_unescape(raw: &[u8]) -> Option<Vec<u8>> {
    if !escapes_are_valid(raw) {
        return None;
    }
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    Some(urlencoding::decode_binary(&spaced).into_owned())
}

fn escapes_are_valid(raw: &[u8]) -> bool {
    let mut i = 0;
    while i < raw.len() {
        if raw[i] != b'%' {
            i += 1;
            continue;
        }
        match raw.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return false,
        }
    }
    true
}

/// Best-effort cleanup of notes persisted before form bodies were decoded.
///
/// Strips a leading `text=` and turns the most common literal escapes back
/// into whitespace. This is a display fix only: it is not a general
/// percent-decoder and raw reads never go through it.
pub fn legacy_cleanup(stored: &str) -> String {
    let content = stored.strip_prefix(TEXT_PREFIX).unwrap_or(stored);
    content
        .replace("%0A", "\n")
        .replace("%0D", "\r")
        .replace("%09", "\t")
        .replace("%20", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: Option<&str> = Some("application/x-www-form-urlencoded");

    fn decode(content_type: Option<&str>, body: &str) -> String {
        String::from_utf8(decode_body(content_type, body.as_bytes()).into_owned()).unwrap()
    }

    #[test]
    fn form_text_field_is_decoded() {
        assert_eq!(decode(FORM, "text=hello%20world"), "hello world");
        assert_eq!(decode(FORM, "text=a+b%0Ac"), "a b\nc");
        assert_eq!(decode(FORM, "text=1%2B1%3D2"), "1+1=2");
    }

    #[test]
    fn form_content_type_with_charset() {
        let ct = Some("application/x-www-form-urlencoded; charset=UTF-8");
        assert_eq!(decode(ct, "text=hi%21"), "hi!");
    }

    #[test]
    fn form_text_field_among_others() {
        assert_eq!(decode(FORM, "a=1&text=note&b=2"), "note");
    }

    #[test]
    fn form_first_text_field_wins() {
        assert_eq!(decode(FORM, "text=first&text=second"), "first");
    }

    #[test]
    fn form_text_field_keeps_non_utf8_bytes() {
        assert_eq!(decode_body(FORM, b"text=caf%E9").as_ref(), b"caf\xe9");
    }

    #[test]
    fn form_empty_text_falls_back_to_prefix_strip() {
        assert_eq!(decode(FORM, "text=&more%20stuff"), "&more stuff");
    }

    #[test]
    fn form_fallback_decodes_to_bytes() {
        assert_eq!(decode_body(FORM, b"text=&%ff%fe").as_ref(), b"&\xff\xfe");
    }

    #[test]
    fn form_malformed_escape_keeps_body() {
        for body in ["text=&50%zz", "text=100%", "text=ok&bad=%zz", "text=%4"] {
            assert_eq!(decode(FORM, body), body);
        }
    }

    #[test]
    fn form_without_text_field_keeps_body() {
        assert_eq!(decode(FORM, "other=value"), "other=value");
    }

    #[test]
    fn raw_body_is_untouched() {
        assert_eq!(decode(None, "plain text"), "plain text");
        assert_eq!(decode(Some("text/plain"), "text=hello%20world"), "text=hello%20world");
    }

    #[test]
    fn raw_body_borrows() {
        let body = b"\xff\x00binary";
        assert!(matches!(decode_body(None, body), Cow::Borrowed(b) if b == body));
    }

    #[test]
    fn detects_form_content_type() {
        assert!(is_form_urlencoded(FORM));
        assert!(!is_form_urlencoded(Some("Application/X-WWW-Form-Urlencoded")));
        assert!(!is_form_urlencoded(Some("text/plain; charset=UTF-8")));
        assert!(!is_form_urlencoded(Some("multipart/form-data")));
        assert!(!is_form_urlencoded(None));
    }

    #[test]
    fn escape_validation() {
        assert!(escapes_are_valid(b""));
        assert!(escapes_are_valid(b"a%20b%7e"));
        assert!(!escapes_are_valid(b"%"));
        assert!(!escapes_are_valid(b"%g0"));
        assert!(!escapes_are_valid(b"ab%2"));
    }

    #[test]
    fn legacy_cleanup_strips_prefix_and_escapes() {
        assert_eq!(
            legacy_cleanup("text=line%20one%0D%0Aline%09two"),
            "line one\r\nline\ttwo"
        );
    }

    #[test]
    fn legacy_cleanup_is_not_a_full_decode() {
        assert_eq!(legacy_cleanup("100%25 sure%21"), "100%25 sure%21");
        assert_eq!(legacy_cleanup("lower %0a stays"), "lower %0a stays");
    }

    #[test]
    fn legacy_cleanup_leaves_plain_text_alone() {
        assert_eq!(legacy_cleanup("just a note"), "just a note");
        assert_eq!(legacy_cleanup("context=text=x"), "context=text=x");
    }
}
