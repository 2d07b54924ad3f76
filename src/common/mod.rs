pub fn clean_0x(s: &str) -> &str {
    if let Some(stripped) = s.strip_prefix("0x") {
        stripped
    } else {
        s
    }
}

pub fn hex_decode(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let s = clean_0x(s);
    hex::decode(s)
}

pub fn hex_encode(s: &[u8]) -> String {
    hex::encode(s)
}

// Bytes as lowercase hex pairs separated by one space: "01 02 ff".
pub fn hex_spaced(s: &[u8]) -> String {
    let mut r = String::with_capacity(s.len() * 3);
    for (i, e) in s.iter().enumerate() {
        if i != 0 {
            r.push(' ');
        }
        r.push_str(&hex::encode(&[*e]));
    }
    r
}
