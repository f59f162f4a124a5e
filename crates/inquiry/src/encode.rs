use std::borrow::Cow;

/// Characters `encodeURIComponent` leaves untouched but `urlencoding` escapes.
const KEPT_MARKS: [(&str, char); 5] = [
    ("%21", '!'),
    ("%27", '\''),
    ("%28", '('),
    ("%29", ')'),
    ("%2A", '*'),
];

/// Percent-encode a URI component.
///
/// Output matches `encodeURIComponent` byte for byte: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` pass through, every other byte of the UTF-8 encoding
/// becomes an uppercase `%XX` escape.
pub fn encode_uri_component(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded.as_ref();

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);

        let escape = &rest[pos..pos + 3];
        match KEPT_MARKS.iter().find(|(code, _)| *code == escape) {
            Some((_, mark)) => out.push(*mark),
            None => out.push_str(escape),
        }

        rest = &rest[pos + 3..];
    }

    out.push_str(rest);
    out
}

/// Reverse of [`encode_uri_component`]. Invalid UTF-8 sequences yield `None`.
pub fn decode_uri_component(value: &str) -> Option<Cow<'_, str>> {
    urlencoding::decode(value).ok()
}
