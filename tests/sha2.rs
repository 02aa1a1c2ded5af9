use hashstream::hash::{sha224, sha256, sha384, sha512};
use hashstream::hash::sha2::{Sha256, Sha512};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn sha224_empty_vector() {
    assert_eq!(
        hex(&sha224(b"")),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
}

#[test]
fn sha224_abc_vector() {
    assert_eq!(
        hex(&sha224(b"abc")),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
}

#[test]
fn sha256_empty_vector() {
    assert_eq!(
        hex(&sha256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc_vector() {
    assert_eq!(
        hex(&sha256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha384_empty_vector() {
    assert_eq!(
        hex(&sha384(b"")),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn sha384_abc_vector() {
    assert_eq!(
        hex(&sha384(b"abc")),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test]
fn sha512_empty_vector() {
    assert_eq!(
        hex(&sha512(b"")),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn sha512_abc_vector() {
    assert_eq!(
        hex(&sha512(b"abc")),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn chunked_matches_one_shot_sha256() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 256) as u8).collect();

    let mut ctx = Sha256::new();
    for chunk in data.chunks(53) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.finalize(), sha256(&data));
}

#[test]
fn chunked_matches_one_shot_sha512() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i % 256) as u8).collect();

    let mut ctx = Sha512::new();
    for chunk in data.chunks(97) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.finalize(), sha512(&data));
}

#[test]
fn sha256_block_boundary_lengths() {
    for len in [0, 1, 55, 56, 57, 63, 64, 65, 119, 120] {
        let buf = vec![0x61u8; len];
        let _ = sha256(&buf);
    }
}

#[test]
fn sha512_block_boundary_lengths() {
    for len in [0, 1, 111, 112, 113, 127, 128, 129, 239, 240] {
        let buf = vec![0x61u8; len];
        let _ = sha512(&buf);
    }
}

#[test]
fn sha256_one_million_a() {
    assert_eq!(
        hex(&sha256(&vec![b'a'; 1_000_000])),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}
