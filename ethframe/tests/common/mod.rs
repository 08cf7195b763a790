/// Turn a hex dump such as `"ffff 0a1b"` into bytes. Whitespace is ignored.
pub fn hex_to_packet(hex: &str) -> Vec<u8> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    assert!(digits.len() % 2 == 0, "odd number of hex digits");

    (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn to_hex_dump(packet: &[u8]) -> String {
    let mut dump = String::new();
    for (i, byte) in packet.iter().enumerate() {
        if i > 0 && i % 16 == 0 {
            dump.push('\n');
        } else if i > 0 {
            dump.push(' ');
        }
        dump.push_str(&format!("{:02x}", byte));
    }
    dump
}
