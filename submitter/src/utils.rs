pub const EVALUATE_PATH: &str = "/api/v1/evaluate";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PROOF_PATH: &str = "./packages/zk/target/proof";

const PREVIEW_LEN: usize = 16;

/// Hex encoding of the leading bytes of `bytes`, for log lines.
pub fn hex_preview(bytes: &[u8]) -> String {
    if bytes.len() <= PREVIEW_LEN {
        hex::encode(bytes)
    } else {
        format!("{}..", hex::encode(&bytes[..PREVIEW_LEN]))
    }
}
