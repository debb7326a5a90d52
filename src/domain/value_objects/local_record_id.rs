use chrono::Utc;
use rand::Rng;

const OFFLINE_PREFIX: &str = "offline-";
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Mint a locally-unique record id of the form `offline-<ms-epoch>-<suffix>`.
///
/// The prefix keeps locally-created records distinguishable from
/// server-assigned ids; the millisecond timestamp plus a 9-character random
/// base36 suffix makes collisions negligible.
pub fn mint_offline_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{OFFLINE_PREFIX}{millis}-{suffix}")
}

/// Whether `id` matches the locally-minted `offline-<digits>-<base36>` shape.
pub fn is_offline_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix(OFFLINE_PREFIX) else {
        return false;
    };
    let Some((millis, suffix)) = rest.rsplit_once('-') else {
        return false;
    };
    !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}
