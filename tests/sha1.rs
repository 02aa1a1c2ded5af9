use hashstream::hash::sha1;
use hashstream::hash::sha1::Sha1;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn expect(input: &[u8], expected_hex: &str) {
    let got = hex(&sha1(input));
    assert_eq!(got, expected_hex, "digest mismatch for input {:?}", input);
}

#[test]
fn empty_vector() {
    expect(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn abc_vector() {
    expect(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn known_phrase() {
    expect(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
}

#[test]
fn chunked_matches_one_shot() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 256) as u8).collect();

    let mut ctx = Sha1::new();
    for chunk in data.chunks(41) {
        ctx.update(chunk);
    }
    let streamed = ctx.finalize();

    assert_eq!(streamed, sha1(&data));
}

#[test]
fn block_boundary_lengths() {
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128] {
        let buf = vec![0x61u8; len];
        let _ = sha1(&buf);
    }
}

#[test]
fn one_million_a() {
    let buf = vec![b'a'; 1_000_000];
    expect(&buf, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}
