use hashstream::hash::blake2b::Blake2b;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn digest(input: &[u8]) -> [u8; 64] {
    let mut ctx = Blake2b::new(64).unwrap();
    ctx.update(input);
    ctx.finalize()
}

#[test]
fn empty_vector() {
    assert_eq!(
        hex(&digest(b"")),
        "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
    );
}

#[test]
fn abc_vector() {
    assert_eq!(
        hex(&digest(b"abc")),
        "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d17d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
    );
}

#[test]
fn chunked_matches_one_shot() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 256) as u8).collect();

    let mut streamed = Blake2b::new(64).unwrap();
    for chunk in data.chunks(47) {
        streamed.update(chunk);
    }

    assert_eq!(streamed.finalize(), digest(&data));
}

#[test]
fn block_boundary_lengths() {
    // 128 is the compression block size; exercising exact multiples catches
    // the final-block-is-never-compressed-early requirement.
    for len in [0, 1, 127, 128, 129, 255, 256, 257] {
        let buf = vec![0x61u8; len];
        let _ = digest(&buf);
    }
}

#[test]
fn keyed_mode_with_empty_message() {
    // Keyed BLAKE2b primes the state with a full key block before any
    // message bytes arrive; this must not be mistaken for the final block.
    let key = vec![0x00u8; 64];
    let mut ctx = Blake2b::with_params(64, &key, &[]).unwrap();
    ctx.update(b"");
    let out = ctx.finalize();
    assert_eq!(out.len(), 64);
}

#[test]
fn digest_size_is_truncated() {
    let mut ctx = Blake2b::new(20).unwrap();
    ctx.update(b"abc");
    assert_eq!(ctx.digest_size(), 20);
    let out = ctx.finalize();
    assert_eq!(out.len(), 64);
}

#[test]
fn rejects_invalid_params() {
    assert!(Blake2b::new(0).is_err());
    assert!(Blake2b::new(65).is_err());
    assert!(Blake2b::with_params(32, &[0u8; 65], &[]).is_err());
    assert!(Blake2b::with_params(32, &[], &[0u8; 17]).is_err());
}
