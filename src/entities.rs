const REFERENCES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

// One pass per reference kind, in table order: `&amp;amp;` stops at `&amp;`.
pub fn decode_entities(text: &str) -> String {
    let mut out = text.to_string();
    for (reference, literal) in REFERENCES {
        if out.contains(reference) {
            out = out.replace(reference, literal);
        }
    }
    out
}
