use hashstream::hash::md5;
use hashstream::hash::md5::Md5;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn expect(input: &[u8], expected_hex: &str) {
    let got = hex(&md5(input));
    assert_eq!(got, expected_hex, "digest mismatch for input {:?}", input);
}

#[test]
fn empty_vector() {
    expect(b"", "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn abc_vector() {
    expect(b"abc", "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn known_phrase() {
    expect(
        b"The quick brown fox jumps over the lazy dog",
        "9e107d9d372bb6826bd81d3542a419d6",
    );
}

#[test]
fn chunked_matches_one_shot() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 256) as u8).collect();

    let mut ctx = Md5::new();
    for chunk in data.chunks(37) {
        ctx.update(chunk);
    }
    let streamed = ctx.finalize();

    assert_eq!(streamed, md5(&data));
}

#[test]
fn block_boundary_lengths() {
    // 55/56/63/64 straddle the single-vs-double compression pad threshold.
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128] {
        let buf = vec![0x61u8; len];
        let _ = md5(&buf);
    }
}

#[test]
fn one_million_a() {
    let buf = vec![b'a'; 1_000_000];
    expect(&buf, "7707d6ae4e027c70eea2a935c2296f21");
}
